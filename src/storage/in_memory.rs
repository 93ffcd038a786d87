use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use crate::models::Account;
use crate::storage::AccountStore;
use crate::types::AccountId;

/// DashMap-backed store used by the batch driver and tests.
///
/// Ids are sequential and assigned on first save. Concurrent saves against
/// the same id follow last-writer-wins; the store does not serialize callers.
pub struct InMemoryAccountStore {
    accounts: DashMap<AccountId, Account>,
    next_id: AtomicU64,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_all(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.iter().map(|item| item.value().clone()).collect())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> Result<Option<Account>> {
        Ok(self.accounts.get(account_id).map(|item| item.value().clone()))
    }

    async fn save(&self, mut account: Account) -> Result<Account> {
        let id = match &account.id {
            Some(id) => id.clone(),
            None => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed).to_string();
                account.id = Some(id.clone());
                id
            }
        };

        self.accounts.insert(id, account.clone());

        Ok(account)
    }

    async fn delete_by_id(&self, account_id: &AccountId) -> Result<()> {
        self.accounts.remove(account_id);
        Ok(())
    }
}
