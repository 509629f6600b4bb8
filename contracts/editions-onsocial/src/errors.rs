use near_sdk::{env, FunctionError};
use near_sdk_macros::NearSchema;

#[derive(Debug, Clone, PartialEq, NearSchema, serde::Serialize)]
#[abi(json)]
pub enum EditionsError {
    Unauthorized,
    NotFound,
    SupplyExhausted,
    AlreadyMinted,
    InsufficientPayment,
    InsufficientDeposit,
    TransferFailed,
    InvalidInput(String),
}

impl std::fmt::Display for EditionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "Editions: Unauthorized"),
            Self::NotFound => write!(f, "Editions: Token type not found"),
            Self::SupplyExhausted => write!(f, "Editions: All token copies have been minted"),
            Self::AlreadyMinted => write!(
                f,
                "Editions: You cannot mint more than one copy of the same token type"
            ),
            Self::InsufficientPayment => write!(f, "Editions: Insufficient payment"),
            Self::InsufficientDeposit => write!(
                f,
                "Editions: Requires attached deposit of exactly 1 yoctoNEAR"
            ),
            Self::TransferFailed => write!(f, "Editions: Transfer failed"),
            Self::InvalidInput(msg) => write!(f, "Editions: Invalid input: {}", msg),
        }
    }
}

impl FunctionError for EditionsError {
    fn panic(&self) -> ! {
        env::panic_str(&self.to_string())
    }
}
