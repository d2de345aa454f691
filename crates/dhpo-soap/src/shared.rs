//! Process-wide sharing of one lazily built client.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::client::DhpoClient;
use crate::config::DhpoConfig;
use crate::error::SoapError;

/// Lazily built, process-wide [`DhpoClient`] handle.
///
/// Handlers clone this freely: the first `get` builds the client and
/// every later call, concurrent ones included, gets the same instance.
/// A build failure is not cached, so the next call retries.
#[derive(Clone)]
pub struct SharedDhpoClient {
    inner: Arc<SharedInner>,
}

struct SharedInner {
    config: DhpoConfig,
    cell: OnceCell<Arc<DhpoClient>>,
}

impl SharedDhpoClient {
    /// Wrap connection settings without building anything yet.
    pub fn new(config: DhpoConfig) -> Self {
        Self {
            inner: Arc::new(SharedInner {
                config,
                cell: OnceCell::new(),
            }),
        }
    }

    /// The client, built on first use.
    pub async fn get(&self) -> Result<Arc<DhpoClient>, SoapError> {
        self.inner
            .cell
            .get_or_try_init(|| async { DhpoClient::new(&self.inner.config).map(Arc::new) })
            .await
            .cloned()
    }

    /// Settings the client is or will be built from.
    pub fn config(&self) -> &DhpoConfig {
        &self.inner.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use url::Url;

    fn test_config() -> DhpoConfig {
        DhpoConfig {
            wsdl_url: Url::parse("https://dhpo.example.test/ValidateTransactions.asmx?WSDL")
                .unwrap(),
            login: "clinic".to_string(),
            password: "secret".to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn test_sequential_gets_return_the_same_client() {
        let shared = SharedDhpoClient::new(test_config());
        let first = shared.get().await.unwrap();
        let second = shared.get().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_concurrent_gets_return_the_same_client() {
        let shared = SharedDhpoClient::new(test_config());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let shared = shared.clone();
                tokio::spawn(async move { shared.get().await.unwrap() })
            })
            .collect();

        let mut clients = Vec::new();
        for handle in handles {
            clients.push(handle.await.unwrap());
        }

        let first = &clients[0];
        assert!(clients.iter().all(|client| Arc::ptr_eq(first, client)));
    }

    #[tokio::test]
    async fn test_clones_share_one_cell() {
        let shared = SharedDhpoClient::new(test_config());
        let other = shared.clone();
        let a = shared.get().await.unwrap();
        let b = other.get().await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
