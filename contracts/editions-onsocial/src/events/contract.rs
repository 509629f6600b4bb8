use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::CONTRACT;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_admin_transferred(old_admin: &AccountId, new_admin: &AccountId) {
    EventBuilder::new(CONTRACT, "admin_transferred", old_admin)
        .field("old_admin", old_admin)
        .field("new_admin", new_admin)
        .emit();
}
