use std::sync::Mutex;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::clients::LedgerService;
use crate::models::LedgerEntry;

/// Ledger double that records every submitted movement in memory.
pub struct InMemoryLedger {
    entries: Mutex<Vec<LedgerEntry>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<LedgerEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerService for InMemoryLedger {
    async fn create_transaction(&self, entry: LedgerEntry) -> Result<LedgerEntry> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("ledger mutex poisoned"))?;

        entries.push(entry.clone());

        Ok(entry)
    }
}
