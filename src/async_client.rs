//! Async wrapper around [`CardSearchSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while the
//! blocking HTTP client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use card_search::{AsyncCardSearchSdk, CardSearchSdk, Credentials};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = CardSearchSdk::builder()
//!         .credentials(Credentials::new("id", "secret"))
//!         .build()
//!         .unwrap();
//!     let sdk = AsyncCardSearchSdk::new(sdk);
//!
//!     let featured = sdk.featured().await.unwrap();
//!     let metadata = sdk.run(|s| s.metadata().get()).await.unwrap();
//! }
//! ```

use std::sync::Arc;

use crate::error::{CardSearchError, Result};
use crate::models::{EnrichedCard, MetadataResult};
use crate::CardSearchSdk;

/// Async wrapper around [`CardSearchSdk`].
///
/// Cheap to clone; clones share one SDK and therefore one token cache.
#[derive(Clone)]
pub struct AsyncCardSearchSdk {
    inner: Arc<CardSearchSdk>,
}

impl AsyncCardSearchSdk {
    pub fn new(sdk: CardSearchSdk) -> Self {
        Self {
            inner: Arc::new(sdk),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CardSearchSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| CardSearchError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch the default showcase asynchronously.
    pub async fn featured(&self) -> Result<Vec<EnrichedCard>> {
        self.run(|s| s.featured()).await
    }

    /// Fetch metadata asynchronously.
    pub async fn metadata(&self) -> Result<MetadataResult> {
        self.run(|s| s.metadata().get()).await
    }

    /// Borrow the wrapped blocking SDK.
    pub fn blocking(&self) -> &CardSearchSdk {
        &self.inner
    }
}
