use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::clients::LedgerService;
use crate::models::{Account, LedgerEntry, OperationResult, ServiceError, TransactionKind};
use crate::storage::AccountStore;
use crate::types::{AccountId, Clock};

/// Deposit and withdrawal processing against the store and the external
/// ledger. Each call is a single-shot decision sequence; nothing serializes
/// concurrent movements on the same account.
pub struct TransactionProcessor<S, L, C> {
    store: Arc<S>,
    ledger: Arc<L>,
    clock: C,
}

impl<S: AccountStore, L: LedgerService, C: Clock> TransactionProcessor<S, L, C> {
    pub fn new(store: Arc<S>, ledger: Arc<L>, clock: C) -> Self {
        Self {
            store,
            ledger,
            clock,
        }
    }

    pub async fn deposit(
        &self,
        account_id: &AccountId,
        amount: Decimal,
    ) -> Result<OperationResult, ServiceError> {
        let Some(mut account) = self.store.find_by_id(account_id).await? else {
            return Ok(OperationResult::rejected("Account does not exist"));
        };

        match account.deposit(amount, self.clock.day_of_month()) {
            Ok(()) => {
                self.commit_movement(account, amount, TransactionKind::Deposito)
                    .await
            }
            Err(rejection) => Ok(OperationResult::rejected(rejection.to_string())),
        }
    }

    pub async fn withdraw(
        &self,
        account_id: &AccountId,
        amount: Decimal,
    ) -> Result<OperationResult, ServiceError> {
        let Some(mut account) = self.store.find_by_id(account_id).await? else {
            return Ok(OperationResult::rejected("Account does not exist"));
        };

        match account.withdraw(amount, self.clock.day_of_month()) {
            Ok(()) => {
                self.commit_movement(account, amount, TransactionKind::Retiro)
                    .await
            }
            Err(rejection) => Ok(OperationResult::rejected(rejection.to_string())),
        }
    }

    /// Persists the mutated account, then submits the ledger entry.
    ///
    /// The store mutation commits before the ledger call: a ledger failure
    /// fails this call after the balance change is already persisted.
    async fn commit_movement(
        &self,
        account: Account,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Result<OperationResult, ServiceError> {
        let account = self.store.save(account).await?;
        let entry = LedgerEntry::for_movement(&account, amount, kind, self.clock.now());

        self.ledger.create_transaction(entry).await?;

        debug!(
            "Movement [{kind}] of [{amount}] committed for account [{}]",
            account.account_number
        );

        Ok(OperationResult::accepted("Successful transaction", account))
    }
}
