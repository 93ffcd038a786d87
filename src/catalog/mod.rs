
use std::fmt;
use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::TypeAccountId;

/// Account categories offered by the bank.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum AccountTypeName {
    #[serde(rename = "AHORRO")]
    Ahorro,
    #[serde(rename = "C_CORRIENTE")]
    CCorriente,
    #[serde(rename = "PLAZO_FIJO")]
    PlazoFijo,
}

impl Display for AccountTypeName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountTypeName::Ahorro => "AHORRO",
            AccountTypeName::CCorriente => "C_CORRIENTE",
            AccountTypeName::PlazoFijo => "PLAZO_FIJO",
        };
        write!(formatter, "{name}")
    }
}

/// One row of the account-type reference table.
///
/// The values here are copied onto an `Account` at creation/update time, so a
/// later catalog change never reshapes an existing account.
#[derive(Debug, Clone)]
pub struct AccountType {
    pub id: TypeAccountId,
    pub name: AccountTypeName,
    pub maintenance_fee: Decimal,
    /// Movements allowed per monthly cycle.
    pub monthly_transactions: i32,
    /// Day of the month fixed-term accounts may operate on.
    pub operation_day: Option<u32>,
}

/// A catalog miss is a configuration fault, not a business outcome.
#[derive(Debug, Error)]
#[error("No account type is registered under id [{0}]")]
pub struct UnknownAccountType(pub TypeAccountId);

/// Read-only table of the account types and their movement rules.
pub struct AccountTypeCatalog {
    entries: Vec<AccountType>,
}

impl AccountTypeCatalog {
    pub fn new() -> Self {
        Self {
            entries: vec![
                AccountType {
                    id: 1,
                    name: AccountTypeName::Ahorro,
                    maintenance_fee: Decimal::ZERO,
                    monthly_transactions: 5,
                    operation_day: None,
                },
                AccountType {
                    id: 2,
                    name: AccountTypeName::CCorriente,
                    maintenance_fee: Decimal::new(500, 2),
                    monthly_transactions: 30,
                    operation_day: None,
                },
                AccountType {
                    id: 3,
                    name: AccountTypeName::PlazoFijo,
                    maintenance_fee: Decimal::ZERO,
                    monthly_transactions: 1,
                    operation_day: Some(25),
                },
            ],
        }
    }

    pub fn lookup(&self, type_id: TypeAccountId) -> Result<&AccountType, UnknownAccountType> {
        self.entries
            .iter()
            .find(|entry| entry.id == type_id)
            .ok_or(UnknownAccountType(type_id))
    }
}

impl Default for AccountTypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
