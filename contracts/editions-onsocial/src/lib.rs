//! Priced, capped editions: each token type has a price and a supply cap, and
//! every account may mint at most one copy of each type.

use near_sdk::json_types::U128;
use near_sdk::store::{LookupMap, LookupSet, Vector};
use near_sdk::{env, near, AccountId, Gas, NearToken, PanicOnDefault, Promise, PromiseOrValue};

pub mod constants;
mod errors;
mod guards;

mod events;

mod balances;
mod mint;
mod token_types;
mod treasury;

mod admin;
mod storage;
mod upgrade;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::EditionsError;
pub use storage::StorageKey;
pub use token_types::{TokenType, TokenTypeView};
pub use treasury::PendingTransfer;

/// Dense zero-based index into the token type table.
pub type TypeIndex = u32;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep245", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub admin: AccountId,

    // Append-only; indices are never reused.
    pub token_types: Vector<TokenType>,
    // Presence means a balance of exactly one copy.
    pub(crate) holdings: LookupSet<(TypeIndex, AccountId)>,

    pub accumulated_funds: u128,
    // Debited from `accumulated_funds` while the admin transfer is unsettled.
    pub withdrawal_in_flight: u128,
    // Payments returned by a compensated mint whose refund bounced.
    pub(crate) unclaimed_payments: LookupMap<AccountId, u128>,
}
