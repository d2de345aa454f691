//! DHPO Core Types
//!
//! Type definitions shared across the gateway: transaction code enums, the
//! search query, and one response record per backend operation. Wire names
//! in the records follow the backend's own casing, inconsistencies
//! included.

use dhpo_xml::Document;
use serde::Serialize;

/// Transfer direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Sent = 1,
    Received = 2,
}

/// Kind of document a transaction carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Claim = 2,
    Remittance = 4,
    PriorRequest = 8,
    PriorAuthorization = 16,
    Invoice = 32,
}

/// Download state filter for searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    NewOnly = 1,
    AlreadyDownloaded = 2,
}

impl Direction {
    /// Wire code sent to the backend
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TransactionType {
    /// Wire code sent to the backend
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TransactionStatus {
    /// Wire code sent to the backend
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Validated query for `SearchTransactions`
///
/// The three enumerated fields are closed domains checked at construction
/// time; the optional filters are opaque to this system and forwarded
/// exactly as given, dates included.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub direction: Direction,
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    pub min_record_count: i32,
    pub max_record_count: i32,
    pub caller_license: Option<String>,
    pub e_partner: Option<String>,
    pub transaction_file_name: Option<String>,
    pub transaction_from_date: Option<String>,
    pub transaction_to_date: Option<String>,
}

/// Response record for `GetNewTransactions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransactionsResponse {
    pub result: i64,
    pub xml_transaction: Option<Document>,
    pub error_message: Option<String>,
}

/// Response record for `GetNewPriorAuthorizationTransactions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPriorAuthorizationsResponse {
    pub result: i64,
    pub xml_transaction: Option<Document>,
    pub error_message: Option<String>,
}

/// Response record for `UploadTransaction`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadTransactionResponse {
    pub result: i64,
    pub error_message: Option<String>,
    pub error_report: Option<String>,
}

/// Response record for `DownloadTransactionFile`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadTransactionFileResponse {
    pub result: i64,
    pub file_name: Option<String>,
    pub file: Option<Document>,
    pub error_message: Option<String>,
}

/// Response record for `CheckForNewPriorAuthorizationTransactions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckNewPriorAuthorizationsResponse {
    pub result: i64,
    pub error_message: Option<String>,
}

/// Response record for `SetTransactionDownloaded`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetTransactionDownloadedResponse {
    pub result: i64,
    pub error_message: Option<String>,
}

/// Response record for `SearchTransactions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchTransactionsResponse {
    pub result: i64,
    pub found_transactions: Option<Document>,
    pub error_message: Option<String>,
}
