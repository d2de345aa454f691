//! # DHPO SOAP
//!
//! SOAP transport for the DHPO eClaimLink `ValidateTransactions` service.
//!
//! This crate provides:
//! - `DhpoClient` with one async method per service operation
//! - `SharedDhpoClient`, a cloneable handle that builds the client once
//!   and shares it across tasks
//! - SOAP 1.1 envelope encoding and decoding for the ASMX response shape
//!
//! Business-level failures are data, not errors: a negative result code
//! or a populated `errorMessage` comes back inside the decoded record.
//! [`SoapError`] is reserved for the transport and the envelope.
//!
//! ## Example
//!
//! ```ignore
//! use dhpo_soap::{DhpoConfig, SharedDhpoClient};
//! use std::time::Duration;
//! use url::Url;
//!
//! let config = DhpoConfig {
//!     wsdl_url: Url::parse("https://dhpo.eclaimlink.ae/ValidateTransactions.asmx?WSDL")?,
//!     login: "clinic_login".to_string(),
//!     password: "clinic_password".to_string(),
//!     timeout: Duration::from_secs(60),
//! };
//! let shared = SharedDhpoClient::new(config);
//!
//! let client = shared.get().await?;
//! let new = client.get_new_transactions().await?;
//! println!("result code {}", new.result);
//! ```

mod client;
mod config;
mod envelope;
mod error;
mod shared;

pub use client::DhpoClient;
pub use config::{DhpoConfig, DEFAULT_WSDL_URL};
pub use error::SoapError;
pub use shared::SharedDhpoClient;
