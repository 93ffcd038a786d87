use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Account;
use crate::types::{AccountId, CustomerId, TypeAccountId};

/// Inbound payload for creation, update, and movement operations.
///
/// Creation reads the customer, type, date, and number; the remaining fields
/// only matter for update, which overwrites the stored record with them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountRequest {
    pub id: Option<AccountId>,
    pub customer_id: CustomerId,
    pub type_account: TypeAccountId,
    pub amount: Decimal,
    pub maintenance: Decimal,
    pub transactions: i32,
    pub operation_day: Option<u32>,
    pub date_account: NaiveDate,
    pub number_account: String,
    pub type_customer: String,
}

/// Uniform outcome envelope: a message, plus the account when the operation
/// went through.
#[derive(Debug, Clone, Serialize)]
pub struct OperationResult {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
}

impl OperationResult {
    pub fn accepted(message: impl Into<String>, account: Account) -> Self {
        Self {
            message: message.into(),
            account: Some(account),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            account: None,
        }
    }
}

/// Plain confirmation for delete and reset outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
