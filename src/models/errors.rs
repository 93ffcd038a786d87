use thiserror::Error;

use crate::catalog::UnknownAccountType;
use crate::types::AccountId;

/// Business-rule rejections for a movement.
///
/// These never abort a call; the `Display` string becomes the outcome message
/// of the `OperationResult`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum MovementRejection {
    #[error("Exhausted monthly movements limit")]
    ExhaustedMonthlyLimit,
    #[error("You don't have enough balance")]
    InsufficientBalance,
    #[error("Day of the month not allowed for PLAZO_FIJO")]
    OperationDayNotAllowed,
}

/// Faults that fail an operation instead of producing an outcome message.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Account [{0}] was not found")]
    AccountNotFound(AccountId),
    #[error(transparent)]
    UnknownAccountType(#[from] UnknownAccountType),
    #[error(transparent)]
    Downstream(#[from] anyhow::Error),
}
