use crate::*;

/// An outbound transfer awaiting settlement, with what is needed to undo the
/// ledger effects committed before it was sent.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingTransfer {
    Refund {
        holder_id: AccountId,
        type_index: TypeIndex,
        price: U128,
        paid: U128,
    },
    Withdrawal {
        admin_id: AccountId,
        amount: U128,
    },
    Claim {
        holder_id: AccountId,
        amount: U128,
    },
}

impl PendingTransfer {
    pub fn receiver_id(&self) -> &AccountId {
        match self {
            Self::Refund { holder_id, .. } | Self::Claim { holder_id, .. } => holder_id,
            Self::Withdrawal { admin_id, .. } => admin_id,
        }
    }

    pub fn amount(&self) -> u128 {
        match self {
            Self::Refund { price, paid, .. } => paid.0.saturating_sub(price.0),
            Self::Withdrawal { amount, .. } | Self::Claim { amount, .. } => amount.0,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Refund { .. } => "refund",
            Self::Withdrawal { .. } => "withdrawal",
            Self::Claim { .. } => "claim",
        }
    }
}

impl Contract {
    pub(crate) fn transfer_with_settlement(&self, pending: PendingTransfer) -> Promise {
        Promise::new(pending.receiver_id().clone())
            .transfer(NearToken::from_yoctonear(pending.amount()))
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_TRANSFER_CALLBACK_TGAS))
                    .on_transfer_settled(pending),
            )
    }

    /// Returns whether the transfer landed. A failed transfer compensates the
    /// ledger effects committed before it was sent.
    pub(crate) fn settle_transfer(&mut self, pending: PendingTransfer, succeeded: bool) -> bool {
        if succeeded {
            if let PendingTransfer::Withdrawal { amount, .. } = &pending {
                self.withdrawal_in_flight = self.withdrawal_in_flight.saturating_sub(amount.0);
            }
            return true;
        }

        near_sdk::log!(
            "{}: {} of {} to {}",
            EditionsError::TransferFailed,
            pending.kind(),
            pending.amount(),
            pending.receiver_id()
        );
        events::emit_transfer_failed(pending.receiver_id(), pending.kind(), pending.amount());

        match pending {
            PendingTransfer::Refund {
                holder_id,
                type_index,
                price,
                paid,
            } => self.revert_mint(&holder_id, type_index, price.0, paid.0),
            PendingTransfer::Withdrawal { amount, .. } => {
                self.withdrawal_in_flight = self.withdrawal_in_flight.saturating_sub(amount.0);
                self.accumulated_funds += amount.0;
            }
            PendingTransfer::Claim { holder_id, amount } => {
                self.credit_unclaimed(&holder_id, amount.0);
            }
        }
        false
    }

    pub(crate) fn credit_unclaimed(&mut self, holder_id: &AccountId, amount: u128) {
        let current = self.unclaimed_payments.get(holder_id).copied().unwrap_or(0);
        self.unclaimed_payments.insert(holder_id.clone(), current + amount);
    }

    pub(crate) fn internal_withdraw(
        &mut self,
        actor_id: &AccountId,
    ) -> Result<PromiseOrValue<bool>, EditionsError> {
        self.check_admin(actor_id)?;
        guards::check_one_yocto()?;

        let amount = self.accumulated_funds;
        if amount == 0 {
            return Ok(PromiseOrValue::Value(true));
        }

        self.accumulated_funds = 0;
        self.withdrawal_in_flight += amount;
        events::emit_withdraw(actor_id, amount);

        Ok(PromiseOrValue::Promise(self.transfer_with_settlement(
            PendingTransfer::Withdrawal {
                admin_id: actor_id.clone(),
                amount: U128(amount),
            },
        )))
    }

    pub(crate) fn internal_claim_unclaimed_payment(
        &mut self,
        holder_id: &AccountId,
    ) -> Result<PromiseOrValue<bool>, EditionsError> {
        let amount = self.unclaimed_payments.remove(holder_id).unwrap_or(0);
        if amount == 0 {
            return Err(EditionsError::InvalidInput("No unclaimed payment".into()));
        }

        events::emit_payment_claimed(holder_id, amount);

        Ok(PromiseOrValue::Promise(self.transfer_with_settlement(
            PendingTransfer::Claim {
                holder_id: holder_id.clone(),
                amount: U128(amount),
            },
        )))
    }
}

#[near]
impl Contract {
    /// Transfers all accumulated funds to the admin.
    #[payable]
    #[handle_result]
    pub fn withdraw(&mut self) -> Result<PromiseOrValue<bool>, EditionsError> {
        self.internal_withdraw(&env::predecessor_account_id())
    }

    #[handle_result]
    pub fn claim_unclaimed_payment(&mut self) -> Result<PromiseOrValue<bool>, EditionsError> {
        self.internal_claim_unclaimed_payment(&env::predecessor_account_id())
    }

    #[private]
    pub fn on_transfer_settled(&mut self, pending: PendingTransfer) -> bool {
        let succeeded = env::promise_results_count() == 1
            && env::promise_result_checked(0, MAX_TRANSFER_RESULT_LEN).is_ok();
        self.settle_transfer(pending, succeeded)
    }

    pub fn get_accumulated_funds(&self) -> U128 {
        U128(self.accumulated_funds)
    }

    pub fn get_withdrawal_in_flight(&self) -> U128 {
        U128(self.withdrawal_in_flight)
    }

    pub fn get_unclaimed_payment(&self, account_id: AccountId) -> U128 {
        U128(self.unclaimed_payments.get(&account_id).copied().unwrap_or(0))
    }
}
