use near_sdk::NearToken;

/// Token type index targeted by a bare payment with no type selection.
pub const DEFAULT_TYPE_INDEX: u32 = 0;

/// Copies granted per mint; a holder never owns more than one of a type.
pub const COPIES_PER_MINT: u64 = 1;

/// Deposit required on admin calls so that function-call access keys cannot make them.
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const MAX_PAGE_LIMIT: u32 = 100;
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

pub const GAS_TRANSFER_CALLBACK_TGAS: u64 = 10;
pub const GAS_MIGRATE_TGAS: u64 = 200;

// Upper bound on the payload read back from a settled transfer receipt.
pub const MAX_TRANSFER_RESULT_LEN: usize = 64;
