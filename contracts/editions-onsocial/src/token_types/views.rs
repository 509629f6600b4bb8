use crate::*;

#[near]
impl Contract {
    pub fn get_token_types_amount(&self) -> TypeIndex {
        self.token_types.len()
    }

    #[handle_result]
    pub fn get_token_type(&self, type_index: TypeIndex) -> Result<TokenTypeView, EditionsError> {
        self.token_type_or_err(type_index)
            .map(|token_type| token_type.view(type_index))
    }

    pub fn get_token_types(&self, from_index: Option<u32>, limit: Option<u32>) -> Vec<TokenTypeView> {
        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT);
        (start..self.token_types.len())
            .take(limit as usize)
            .filter_map(|i| self.token_types.get(i).map(|t| t.view(i)))
            .collect()
    }
}
