mod in_memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Account;
use crate::types::AccountId;

pub use in_memory::InMemoryAccountStore;

/// Keyed account persistence consumed by the lifecycle manager and the
/// transaction processor.
#[async_trait]
pub trait AccountStore: Send + Sync + 'static {
    async fn find_all(&self) -> Result<Vec<Account>>;
    async fn find_by_id(&self, account_id: &AccountId) -> Result<Option<Account>>;
    /// Persists the account, assigning an id on first save, and returns the
    /// stored record.
    async fn save(&self, account: Account) -> Result<Account>;
    async fn delete_by_id(&self, account_id: &AccountId) -> Result<()>;
}
