//! Connection settings for the DHPO service.

use std::fmt;
use std::time::Duration;

use url::Url;

/// WSDL address of the production DHPO service.
pub const DEFAULT_WSDL_URL: &str = "https://dhpo.eclaimlink.ae/ValidateTransactions.asmx?WSDL";

/// Settings for one DHPO account.
///
/// The service is addressed by its WSDL URL; requests are posted to the
/// same URL with the query string removed.
#[derive(Clone)]
pub struct DhpoConfig {
    pub wsdl_url: Url,
    pub login: String,
    pub password: String,
    /// Deadline for a whole exchange, connect time included.
    pub timeout: Duration,
}

impl DhpoConfig {
    /// The HTTP endpoint requests are posted to.
    pub fn endpoint(&self) -> Url {
        let mut endpoint = self.wsdl_url.clone();
        endpoint.set_query(None);
        endpoint
    }
}

impl fmt::Debug for DhpoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DhpoConfig")
            .field("wsdl_url", &self.wsdl_url.as_str())
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
