use near_sdk::near;
use near_sdk::BorshStorageKey;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    TokenTypes,
    Holdings,
    UnclaimedPayments,
}
