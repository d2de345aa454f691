//! Shared handler state.

use dhpo_soap::SharedDhpoClient;

/// State cloned into every handler.
///
/// The client handle is lazy: holding state does not open any
/// connection, the first request that needs the backend does.
#[derive(Clone)]
pub struct AppState {
    pub client: SharedDhpoClient,
}

impl AppState {
    pub fn new(client: SharedDhpoClient) -> Self {
        Self { client }
    }
}
