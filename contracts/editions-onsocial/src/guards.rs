use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), EditionsError> {
    if env::attached_deposit() != ONE_YOCTO {
        return Err(EditionsError::InsufficientDeposit);
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_admin(&self, actor_id: &AccountId) -> Result<(), EditionsError> {
        if actor_id != &self.admin {
            return Err(EditionsError::Unauthorized);
        }
        Ok(())
    }

    pub(crate) fn token_type_or_err(&self, type_index: TypeIndex) -> Result<&TokenType, EditionsError> {
        self.token_types.get(type_index).ok_or(EditionsError::NotFound)
    }
}
