use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{AccountType, AccountTypeName};
use crate::models::AccountRequest;
use crate::models::errors::MovementRejection;
use crate::types::{AccountId, CustomerId, TypeAccountId};

/// A customer's bank account with its denormalized account-type snapshot.
///
/// Fee, allowance, and operation-day values are copied from the catalog when
/// the account is opened or updated; the movement rules read the snapshot,
/// never the live catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identifier; `None` until the first save.
    pub id: Option<AccountId>,
    pub customer_id: CustomerId,
    pub type_account: TypeAccountId,
    pub type_account_name: AccountTypeName,
    pub balance: Decimal,
    pub maintenance_fee: Decimal,
    /// Movements still permitted this monthly cycle; never negative.
    pub remaining_monthly_transactions: i32,
    /// Day of the month fixed-term accounts may operate on.
    pub operation_day: Option<u32>,
    pub opened_date: NaiveDate,
    pub account_number: String,
    pub customer_type: String,
}

impl Account {
    /// Builds a fresh account from a request and its catalog snapshot.
    pub fn open(request: &AccountRequest, entry: &AccountType, customer_type: String) -> Self {
        Self {
            id: None,
            customer_id: request.customer_id.clone(),
            type_account: entry.id,
            type_account_name: entry.name,
            balance: Decimal::ZERO,
            maintenance_fee: entry.maintenance_fee,
            remaining_monthly_transactions: entry.monthly_transactions,
            operation_day: entry.operation_day,
            opened_date: request.date_account,
            account_number: request.number_account.clone(),
            customer_type,
        }
    }

    /// Overwrites every mutable field from an update request.
    ///
    /// Update is a trusted overwrite: no movement or ownership rule is
    /// re-checked here. The type name is the caller's re-derived catalog entry.
    pub fn apply_update(&mut self, request: &AccountRequest, entry: &AccountType) {
        self.customer_id = request.customer_id.clone();
        self.type_account = request.type_account;
        self.type_account_name = entry.name;
        self.balance = request.amount;
        self.maintenance_fee = request.maintenance;
        self.remaining_monthly_transactions = request.transactions;
        self.operation_day = request.operation_day;
        self.opened_date = request.date_account;
        self.account_number = request.number_account.clone();
        self.customer_type = request.type_customer.clone();
    }

    /// Applies a deposit: allowance check, then the fixed-term day rule.
    pub fn deposit(&mut self, amount: Decimal, today: u32) -> Result<(), MovementRejection> {
        if self.remaining_monthly_transactions - 1 < 0 {
            return Err(MovementRejection::ExhaustedMonthlyLimit);
        }

        self.check_operation_day(today)?;

        self.balance += amount;
        self.remaining_monthly_transactions -= 1;

        Ok(())
    }

    /// Applies a withdrawal: allowance check, then balance, then the day rule.
    pub fn withdraw(&mut self, amount: Decimal, today: u32) -> Result<(), MovementRejection> {
        if self.remaining_monthly_transactions - 1 < 0 {
            return Err(MovementRejection::ExhaustedMonthlyLimit);
        }

        let new_balance = self.balance - amount;

        if new_balance < Decimal::ZERO {
            return Err(MovementRejection::InsufficientBalance);
        }

        self.check_operation_day(today)?;

        self.balance = new_balance;
        self.remaining_monthly_transactions -= 1;

        Ok(())
    }

    /// Resets the monthly allowance to the catalog value for a new cycle.
    pub fn restart_allowance(&mut self, entry: &AccountType) {
        self.remaining_monthly_transactions = entry.monthly_transactions;
    }

    fn check_operation_day(&self, today: u32) -> Result<(), MovementRejection> {
        if self.type_account_name == AccountTypeName::PlazoFijo
            && self.operation_day.is_some_and(|day| day != today)
        {
            return Err(MovementRejection::OperationDayNotAllowed);
        }

        Ok(())
    }
}
