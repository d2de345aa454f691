//! # DHPO Core
//!
//! Core types for the DHPO eClaimLink gateway: the enumerated transaction
//! codes accepted by `SearchTransactions`, the validated search query, and
//! the response records produced by every backend operation.
//!
//! Records serialize with every field present; optional fields that the
//! backend left unset render as JSON `null`, matching the façade's
//! historical output.

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::*;
