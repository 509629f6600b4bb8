use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::{nep245, EDITION};
use crate::{TypeIndex, COPIES_PER_MINT};

pub fn emit_token_type_created(
    admin_id: &AccountId,
    type_index: TypeIndex,
    max_supply: u64,
    price_per_copy: u128,
) {
    EventBuilder::new(EDITION, "token_type_create", admin_id)
        .field("type_index", type_index)
        .field("max_supply", max_supply)
        .field("price_per_copy", price_per_copy)
        .emit();
}

pub fn emit_token_type_updated(
    admin_id: &AccountId,
    type_index: TypeIndex,
    max_supply: u64,
    price_per_copy: u128,
) {
    EventBuilder::new(EDITION, "token_type_update", admin_id)
        .field("type_index", type_index)
        .field("max_supply", max_supply)
        .field("price_per_copy", price_per_copy)
        .emit();
}

pub struct EditionMint<'a> {
    pub holder_id: &'a AccountId,
    pub type_index: TypeIndex,
    pub price: u128,
    pub refund: u128,
    pub current_supply: u64,
}

pub fn emit_mint(e: &EditionMint) {
    EventBuilder::new(EDITION, "mint", e.holder_id)
        .field("holder_id", e.holder_id)
        .field("type_index", e.type_index)
        .field("quantity", COPIES_PER_MINT)
        .field("price", e.price)
        .field("refund", e.refund)
        .field("current_supply", e.current_supply)
        .emit();
    nep245::emit_mt_mint(e.holder_id, e.type_index, COPIES_PER_MINT);
}

pub fn emit_mint_reverted(holder_id: &AccountId, type_index: TypeIndex, unclaimed: u128) {
    EventBuilder::new(EDITION, "mint_revert", holder_id)
        .field("holder_id", holder_id)
        .field("type_index", type_index)
        .field("quantity", COPIES_PER_MINT)
        .field("unclaimed", unclaimed)
        .emit();
    nep245::emit_mt_burn(holder_id, type_index, COPIES_PER_MINT, "refund failed");
}

pub fn emit_refund_parked(holder_id: &AccountId, type_index: TypeIndex, unclaimed: u128) {
    EventBuilder::new(EDITION, "refund_park", holder_id)
        .field("holder_id", holder_id)
        .field("type_index", type_index)
        .field("unclaimed", unclaimed)
        .emit();
}

pub fn emit_withdraw(admin_id: &AccountId, amount: u128) {
    EventBuilder::new(EDITION, "withdraw", admin_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_payment_claimed(holder_id: &AccountId, amount: u128) {
    EventBuilder::new(EDITION, "payment_claim", holder_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_transfer_failed(receiver_id: &AccountId, kind: &str, amount: u128) {
    EventBuilder::new(EDITION, "transfer_failed", receiver_id)
        .field("receiver_id", receiver_id)
        .field("kind", kind)
        .field("amount", amount)
        .emit();
}
