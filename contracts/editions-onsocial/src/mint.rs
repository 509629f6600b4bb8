use crate::*;

/// Committed effects of a mint, kept until the overpayment refund settles.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MintReceipt {
    pub holder_id: AccountId,
    pub type_index: TypeIndex,
    pub price: u128,
    pub refund: u128,
}

impl Contract {
    pub(crate) fn internal_mint(
        &mut self,
        holder_id: &AccountId,
        type_index: TypeIndex,
        paid: u128,
    ) -> Result<MintReceipt, EditionsError> {
        let token_type = self.token_type_or_err(type_index)?;
        if token_type.is_exhausted() {
            return Err(EditionsError::SupplyExhausted);
        }
        if self.holdings.contains(&(type_index, holder_id.clone())) {
            return Err(EditionsError::AlreadyMinted);
        }
        let price = token_type.price_per_copy;
        if paid < price {
            return Err(EditionsError::InsufficientPayment);
        }
        let refund = paid - price;

        let token_type = self
            .token_types
            .get_mut(type_index)
            .ok_or(EditionsError::NotFound)?;
        token_type.current_supply += COPIES_PER_MINT;
        let current_supply = token_type.current_supply;

        self.holdings.insert((type_index, holder_id.clone()));
        self.accumulated_funds += price;

        events::emit_mint(&events::EditionMint {
            holder_id,
            type_index,
            price,
            refund,
            current_supply,
        });

        Ok(MintReceipt {
            holder_id: holder_id.clone(),
            type_index,
            price,
            refund,
        })
    }

    pub(crate) fn execute_mint(
        &mut self,
        holder_id: &AccountId,
        type_index: TypeIndex,
        paid: u128,
    ) -> Result<PromiseOrValue<bool>, EditionsError> {
        let receipt = self.internal_mint(holder_id, type_index, paid)?;
        if receipt.refund == 0 {
            return Ok(PromiseOrValue::Value(true));
        }

        Ok(PromiseOrValue::Promise(self.transfer_with_settlement(
            PendingTransfer::Refund {
                holder_id: receipt.holder_id,
                type_index: receipt.type_index,
                price: U128(receipt.price),
                paid: U128(paid),
            },
        )))
    }

    // Undoes a mint whose refund bounced and parks the whole payment for the
    // holder. If the price has already left through a withdrawal, the mint
    // stands and only the bounced refund is parked.
    pub(crate) fn revert_mint(
        &mut self,
        holder_id: &AccountId,
        type_index: TypeIndex,
        price: u128,
        paid: u128,
    ) {
        let refund = paid.saturating_sub(price);
        if self.accumulated_funds < price {
            self.credit_unclaimed(holder_id, refund);
            events::emit_refund_parked(holder_id, type_index, refund);
            return;
        }

        if let Some(token_type) = self.token_types.get_mut(type_index) {
            token_type.current_supply = token_type.current_supply.saturating_sub(COPIES_PER_MINT);
        }
        self.holdings.remove(&(type_index, holder_id.clone()));
        self.accumulated_funds -= price;
        self.credit_unclaimed(holder_id, paid);

        events::emit_mint_reverted(holder_id, type_index, paid);
    }
}

#[near]
impl Contract {
    /// Mints one copy of `type_index` to the caller for the attached deposit.
    /// Any excess over the price is refunded.
    #[payable]
    #[handle_result]
    pub fn mint(&mut self, type_index: TypeIndex) -> Result<PromiseOrValue<bool>, EditionsError> {
        self.execute_mint(
            &env::predecessor_account_id(),
            type_index,
            env::attached_deposit().as_yoctonear(),
        )
    }

    /// Bare payment entry point; mints the default token type.
    #[payable]
    #[handle_result]
    pub fn receive_default_payment(&mut self) -> Result<PromiseOrValue<bool>, EditionsError> {
        self.execute_mint(
            &env::predecessor_account_id(),
            DEFAULT_TYPE_INDEX,
            env::attached_deposit().as_yoctonear(),
        )
    }
}
