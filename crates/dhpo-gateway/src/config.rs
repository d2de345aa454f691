//! Environment-driven configuration.
//!
//! Everything is read once at startup. A missing or malformed variable
//! aborts the process before the listener comes up; there is no point
//! serving requests that can only fail against the backend.

use std::net::SocketAddr;
use std::time::Duration;

use dhpo_soap::{DhpoConfig, DEFAULT_WSDL_URL};
use thiserror::Error;
use url::Url;

/// Default bind address of the HTTP listener.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration problems that abort startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set and non-empty")]
    MissingVar(&'static str),

    #[error("{var} is invalid: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

/// Complete gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub dhpo: DhpoConfig,
    pub bind: SocketAddr,
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through a lookup function.
    ///
    /// Tests pass closures here instead of mutating the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let login = require(&lookup, "DHPO_LOGIN")?;
        let password = require(&lookup, "DHPO_PASSWORD")?;

        let wsdl_raw = lookup("DHPO_WSDL_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WSDL_URL.to_string());
        let wsdl_url = Url::parse(&wsdl_raw).map_err(|err| ConfigError::InvalidVar {
            var: "DHPO_WSDL_URL",
            reason: err.to_string(),
        })?;

        let timeout = match lookup("DHPO_TIMEOUT_SECS") {
            Some(raw) if !raw.trim().is_empty() => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
                    var: "DHPO_TIMEOUT_SECS",
                    reason: format!("{:?} is not a whole number of seconds", raw),
                })?;
                Duration::from_secs(secs)
            }
            _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let bind_raw = lookup("DHPO_GATEWAY_BIND")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.parse().map_err(|_| ConfigError::InvalidVar {
            var: "DHPO_GATEWAY_BIND",
            reason: format!("{:?} is not a socket address", bind_raw),
        })?;

        Ok(Self {
            dhpo: DhpoConfig {
                wsdl_url,
                login,
                password,
                timeout,
            },
            bind,
        })
    }
}

fn require<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVar(name))
}
