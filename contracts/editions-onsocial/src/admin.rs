use crate::*;

impl Contract {
    pub(crate) fn internal_transfer_admin(
        &mut self,
        actor_id: &AccountId,
        new_admin: AccountId,
    ) -> Result<(), EditionsError> {
        self.check_admin(actor_id)?;
        guards::check_one_yocto()?;

        let old_admin = std::mem::replace(&mut self.admin, new_admin);
        events::emit_admin_transferred(&old_admin, &self.admin);
        Ok(())
    }
}

#[near]
impl Contract {
    /// Seeds token type 0. `admin_id` defaults to the deploying account.
    #[init]
    pub fn new(
        admin_id: Option<AccountId>,
        max_supply: u64,
        price_per_copy: U128,
        metadata_uri: String,
    ) -> Self {
        let admin = admin_id.unwrap_or_else(env::predecessor_account_id);

        let mut token_types = Vector::new(StorageKey::TokenTypes);
        token_types.push(TokenType::new(max_supply, price_per_copy.0, metadata_uri));

        events::emit_token_type_created(&admin, DEFAULT_TYPE_INDEX, max_supply, price_per_copy.0);

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            admin,
            token_types,
            holdings: LookupSet::new(StorageKey::Holdings),
            accumulated_funds: 0,
            withdrawal_in_flight: 0,
            unclaimed_payments: LookupMap::new(StorageKey::UnclaimedPayments),
        }
    }

    /// No check that `new_admin` differs from the current admin.
    #[payable]
    #[handle_result]
    pub fn transfer_admin(&mut self, new_admin: AccountId) -> Result<(), EditionsError> {
        self.internal_transfer_admin(&env::predecessor_account_id(), new_admin)
    }

    pub fn get_admin(&self) -> AccountId {
        self.admin.clone()
    }

    pub fn get_version(&self) -> String {
        self.version.clone()
    }
}
