mod account;
mod errors;
mod ledger_entry;
mod request;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::types::CustomerId;

pub use account::Account;
pub use errors::{MovementRejection, ServiceError};
pub use ledger_entry::LedgerEntry;
pub use request::{AccountRequest, Message, OperationResult};

/// Movement kinds recorded against the ledger.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "DEPOSITO")]
    Deposito,
    #[serde(rename = "RETIRO")]
    Retiro,
}

impl Display for TransactionKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let kind = match self {
            TransactionKind::Deposito => "DEPOSITO",
            TransactionKind::Retiro => "RETIRO",
        };
        write!(formatter, "{kind}")
    }
}

/// Customer record returned by the directory, carrying its classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub customer_type: String,
}
