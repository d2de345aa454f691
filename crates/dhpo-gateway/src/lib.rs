//! # DHPO Gateway
//!
//! REST façade over the DHPO eClaimLink SOAP service.
//!
//! This crate provides:
//! - One JSON endpoint per SOAP operation, same names, same fields
//! - Environment-driven configuration that fails fast at startup
//! - Error mapping that never reinterprets DHPO business codes
//!
//! The binary in `main.rs` wires the router to a listener. The library
//! surface exists so integration tests can stand up the exact app the
//! binary runs.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{ConfigError, GatewayConfig};
pub use error::{ErrorResponse, GatewayError};
pub use routes::create_router;
pub use state::AppState;
