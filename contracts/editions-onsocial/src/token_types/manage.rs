use crate::*;

impl Contract {
    pub(crate) fn internal_create_token_type(
        &mut self,
        actor_id: &AccountId,
        max_supply: u64,
        price_per_copy: u128,
        metadata_uri: String,
    ) -> Result<TypeIndex, EditionsError> {
        self.check_admin(actor_id)?;
        guards::check_one_yocto()?;

        let type_index = self.token_types.len();
        self.token_types
            .push(TokenType::new(max_supply, price_per_copy, metadata_uri));

        events::emit_token_type_created(actor_id, type_index, max_supply, price_per_copy);
        Ok(type_index)
    }

    // The new cap is not checked against `current_supply`: lowering it below
    // the minted count locks the type for good.
    pub(crate) fn internal_update_token_type(
        &mut self,
        actor_id: &AccountId,
        type_index: TypeIndex,
        max_supply: u64,
        price_per_copy: u128,
        metadata_uri: String,
    ) -> Result<(), EditionsError> {
        self.check_admin(actor_id)?;
        guards::check_one_yocto()?;

        let token_type = self
            .token_types
            .get_mut(type_index)
            .ok_or(EditionsError::NotFound)?;
        token_type.max_supply = max_supply;
        token_type.price_per_copy = price_per_copy;
        token_type.metadata_uri = metadata_uri;
        let current_supply = token_type.current_supply;

        if current_supply > max_supply {
            near_sdk::log!(
                "Token type {} capped at {} below minted supply {}",
                type_index,
                max_supply,
                current_supply
            );
        }

        events::emit_token_type_updated(actor_id, type_index, max_supply, price_per_copy);
        Ok(())
    }
}

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn create_token_type(
        &mut self,
        max_supply: u64,
        price_per_copy: U128,
        metadata_uri: String,
    ) -> Result<TypeIndex, EditionsError> {
        self.internal_create_token_type(
            &env::predecessor_account_id(),
            max_supply,
            price_per_copy.0,
            metadata_uri,
        )
    }

    #[payable]
    #[handle_result]
    pub fn update_token_type(
        &mut self,
        type_index: TypeIndex,
        max_supply: u64,
        price_per_copy: U128,
        metadata_uri: String,
    ) -> Result<(), EditionsError> {
        self.internal_update_token_type(
            &env::predecessor_account_id(),
            type_index,
            max_supply,
            price_per_copy.0,
            metadata_uri,
        )
    }
}
