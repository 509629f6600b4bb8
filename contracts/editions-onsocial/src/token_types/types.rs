use near_sdk::json_types::U128;
use near_sdk::near;

use crate::TypeIndex;

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct TokenType {
    pub price_per_copy: u128,
    pub max_supply: u64,
    pub current_supply: u64,
    pub metadata_uri: String,
}

impl TokenType {
    pub fn new(max_supply: u64, price_per_copy: u128, metadata_uri: String) -> Self {
        Self {
            price_per_copy,
            max_supply,
            current_supply: 0,
            metadata_uri,
        }
    }

    /// Also true when an update lowered the cap below the minted count.
    pub fn is_exhausted(&self) -> bool {
        self.current_supply >= self.max_supply
    }

    pub fn remaining(&self) -> u64 {
        self.max_supply.saturating_sub(self.current_supply)
    }

    pub(crate) fn view(&self, type_index: TypeIndex) -> TokenTypeView {
        TokenTypeView {
            type_index,
            price_per_copy: U128(self.price_per_copy),
            max_supply: self.max_supply,
            current_supply: self.current_supply,
            remaining: self.remaining(),
            metadata_uri: self.metadata_uri.clone(),
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct TokenTypeView {
    pub type_index: TypeIndex,
    pub price_per_copy: U128,
    pub max_supply: u64,
    pub current_supply: u64,
    /// Copies still mintable; zero for a locked type.
    pub remaining: u64,
    pub metadata_uri: String,
}
