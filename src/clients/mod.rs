mod directory;
mod ledger;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Customer, LedgerEntry};
use crate::types::CustomerId;

pub use directory::InMemoryCustomerDirectory;
pub use ledger::InMemoryLedger;

/// Downstream customer-records service.
///
/// Persons and companies live behind separate lookups; an absent customer is
/// `None`, a transport failure is `Err`.
#[async_trait]
pub trait CustomerDirectory: Send + Sync + 'static {
    async fn person_by_id(&self, customer_id: &CustomerId) -> Result<Option<Customer>>;
    async fn company_by_id(&self, customer_id: &CustomerId) -> Result<Option<Customer>>;
}

/// Downstream append-only movement log.
#[async_trait]
pub trait LedgerService: Send + Sync + 'static {
    async fn create_transaction(&self, entry: LedgerEntry) -> Result<LedgerEntry>;
}
