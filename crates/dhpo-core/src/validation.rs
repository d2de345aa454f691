//! Search parameter validation
//!
//! `SearchTransactions` accepts three enumerated codes with closed domains.
//! Conversions from raw integers live here so out-of-domain values are
//! rejected before any SOAP call is issued.

use crate::types::{Direction, TransactionStatus, TransactionType};
use thiserror::Error;

/// Errors that can occur while validating search parameters
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid direction {0}: expected 1 (sent) or 2 (received)")]
    InvalidDirection(i32),

    #[error("Invalid transaction type {0}: expected one of 2, 4, 8, 16, 32")]
    InvalidTransactionType(i32),

    #[error("Invalid transaction status {0}: expected 1 (new only) or 2 (already downloaded)")]
    InvalidTransactionStatus(i32),
}

impl TryFrom<i32> for Direction {
    type Error = ValidationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Direction::Sent),
            2 => Ok(Direction::Received),
            other => Err(ValidationError::InvalidDirection(other)),
        }
    }
}

impl TryFrom<i32> for TransactionType {
    type Error = ValidationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            2 => Ok(TransactionType::Claim),
            4 => Ok(TransactionType::Remittance),
            8 => Ok(TransactionType::PriorRequest),
            16 => Ok(TransactionType::PriorAuthorization),
            32 => Ok(TransactionType::Invoice),
            other => Err(ValidationError::InvalidTransactionType(other)),
        }
    }
}

impl TryFrom<i32> for TransactionStatus {
    type Error = ValidationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TransactionStatus::NewOnly),
            2 => Ok(TransactionStatus::AlreadyDownloaded),
            other => Err(ValidationError::InvalidTransactionStatus(other)),
        }
    }
}
