use near_sdk::AccountId;

use super::builder::Nep245Event;
use crate::TypeIndex;

const VERSION: &str = "1.0.0";

pub fn emit_mt_mint(owner_id: &AccountId, type_index: TypeIndex, amount: u64) {
    Nep245Event::new("mt_mint", VERSION)
        .field("owner_id", owner_id)
        .field("token_ids", vec![type_index.to_string()])
        .field("amounts", vec![amount.to_string()])
        .emit();
}

pub fn emit_mt_burn(owner_id: &AccountId, type_index: TypeIndex, amount: u64, memo: &str) {
    Nep245Event::new("mt_burn", VERSION)
        .field("owner_id", owner_id)
        .field("token_ids", vec![type_index.to_string()])
        .field("amounts", vec![amount.to_string()])
        .field("memo", memo)
        .emit();
}
