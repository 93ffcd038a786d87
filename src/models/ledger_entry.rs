use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::AccountTypeName;
use crate::models::{Account, TransactionKind};
use crate::types::{AccountId, CustomerId};

/// Write-once movement record submitted to the ledger service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub customer_id: CustomerId,
    pub product_id: AccountId,
    pub product_type: AccountTypeName,
    pub transaction_type: TransactionKind,
    pub amount: Decimal,
    pub transaction_date: DateTime<Utc>,
    pub customer_type: String,
}

impl LedgerEntry {
    /// Builds the entry for a committed movement.
    ///
    /// The account has always been through the store at this point, so its id
    /// is assigned.
    pub fn for_movement(
        account: &Account,
        amount: Decimal,
        kind: TransactionKind,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            customer_id: account.customer_id.clone(),
            product_id: account.id.clone().unwrap_or_default(),
            product_type: account.type_account_name,
            transaction_type: kind,
            amount,
            transaction_date: at,
            customer_type: account.customer_type.clone(),
        }
    }
}
