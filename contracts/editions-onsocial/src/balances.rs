use crate::*;

impl Contract {
    pub(crate) fn internal_balance_of(&self, account_id: &AccountId, type_index: TypeIndex) -> u64 {
        if self.holdings.contains(&(type_index, account_id.clone())) {
            COPIES_PER_MINT
        } else {
            0
        }
    }
}

#[near]
impl Contract {
    /// Unknown indices report zero rather than failing.
    pub fn balance_of(&self, account_id: AccountId, type_index: TypeIndex) -> U128 {
        U128(self.internal_balance_of(&account_id, type_index).into())
    }

    #[handle_result]
    pub fn balance_of_batch(
        &self,
        account_ids: Vec<AccountId>,
        type_indices: Vec<TypeIndex>,
    ) -> Result<Vec<U128>, EditionsError> {
        if account_ids.len() != type_indices.len() {
            return Err(EditionsError::InvalidInput(
                "account_ids and type_indices length mismatch".into(),
            ));
        }
        if account_ids.len() > MAX_PAGE_LIMIT as usize {
            return Err(EditionsError::InvalidInput(format!(
                "At most {} pairs per query",
                MAX_PAGE_LIMIT
            )));
        }

        Ok(account_ids
            .iter()
            .zip(type_indices)
            .map(|(account_id, type_index)| {
                U128(self.internal_balance_of(account_id, type_index).into())
            })
            .collect())
    }
}
