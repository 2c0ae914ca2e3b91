//! Card search SDK for Rust.
//!
//! Provides a high-level client for the Hearthstone game-data API. Handles the
//! OAuth2 client-credentials flow, card search and metadata requests with
//! rate-limit retry, resolution of card foreign keys into names, and random
//! sampling of cards for display.
//!
//! # Quick start
//!
//! ```no_run
//! use card_search::{CardSearchSdk, Credentials};
//! use card_search::queries::SearchCardsParams;
//!
//! let sdk = CardSearchSdk::builder()
//!     .credentials(Credentials::new("client-id", "client-secret"))
//!     .build()
//!     .unwrap();
//!
//! // Search cards
//! let params = SearchCardsParams {
//!     class: Some("mage".into()),
//!     rarity: Some("legendary".into()),
//!     ..Default::default()
//! };
//! let result = sdk.cards().search(&params).unwrap();
//!
//! // Resolve ids into names
//! let enriched = sdk.metadata().enrich(&result.cards).unwrap();
//!
//! // Ten random high-cost legendaries, sorted by id
//! let featured = sdk.featured().unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod enrich;
pub mod error;
pub mod featured;
pub mod lookup;
pub mod models;
pub mod queries;
pub mod sampler;
pub mod token;
pub mod transport;

#[cfg(feature = "async")]
pub use async_client::AsyncCardSearchSdk;
pub use client::ApiClient;
pub use config::{Credentials, RetryPolicy};
pub use enrich::enrich_cards;
pub use error::{CardSearchError, Result};
pub use featured::FeaturedQuery;
pub use lookup::{resolve_class, resolve_generic, resolve_rarity, resolve_set, MetadataIndex};
pub use sampler::sample_for_display;
pub use token::{Clock, SystemClock, Token, TokenManager};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use models::EnrichedCard;

// ---------------------------------------------------------------------------
// CardSearchSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CardSearchSdk`] instance.
///
/// Use [`CardSearchSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CardSearchSdkBuilder::build) to create the SDK.
pub struct CardSearchSdkBuilder {
    credentials: Option<Credentials>,
    api_base: String,
    token_url: String,
    locale: String,
    timeout: Duration,
    retry: RetryPolicy,
    transport: Option<Arc<dyn HttpTransport>>,
    clock: Option<Arc<dyn Clock>>,
}

impl Default for CardSearchSdkBuilder {
    fn default() -> Self {
        Self {
            credentials: None,
            api_base: config::API_BASE.to_string(),
            token_url: config::OAUTH_TOKEN_URL.to_string(),
            locale: config::DEFAULT_LOCALE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
            transport: None,
            clock: None,
        }
    }
}

impl CardSearchSdkBuilder {
    /// Set the OAuth client credentials.
    ///
    /// If not set, they are read from the `CLIENT_ID` and `CLIENT_SECRET`
    /// environment variables at build time.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Override the API host. Defaults to `https://us.api.blizzard.com`.
    pub fn api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Override the OAuth token endpoint.
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Locale used for metadata and for searches that do not set one.
    ///
    /// Defaults to `en_US`.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the HTTP request timeout. Ignored when a custom transport is given.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Use a custom transport instead of the default blocking `reqwest` client.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom clock for token expiry checks.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the SDK.
    ///
    /// Validates the credentials but does **not** contact the API; the first
    /// token is obtained lazily on the first request.
    pub fn build(self) -> Result<CardSearchSdk> {
        let credentials = match self.credentials {
            Some(c) => {
                c.validate()?;
                c
            }
            None => Credentials::from_env()?,
        };

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(self.timeout)?),
        };
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let tokens = TokenManager::new(credentials, self.token_url, clock);
        let client = ApiClient::new(transport, tokens, self.api_base, self.locale, self.retry);
        Ok(CardSearchSdk { client })
    }
}

// ---------------------------------------------------------------------------
// CardSearchSdk
// ---------------------------------------------------------------------------

/// The main entry point for the card search SDK.
///
/// Wraps an [`ApiClient`] (which owns the token cache) and exposes query
/// interfaces as lightweight borrowing wrappers. The SDK is `Send + Sync`;
/// share it behind an `Arc` to reuse one token across threads.
pub struct CardSearchSdk {
    client: ApiClient,
}

impl CardSearchSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CardSearchSdkBuilder {
        CardSearchSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the card search interface.
    pub fn cards(&self) -> queries::CardQuery<'_> {
        queries::CardQuery::new(&self.client)
    }

    /// Access the metadata interface.
    pub fn metadata(&self) -> queries::MetadataQuery<'_> {
        queries::MetadataQuery::new(&self.client)
    }

    // -- Showcase ----------------------------------------------------------

    /// Ten random legendary druid and warlock cards costing 7 to 12 mana,
    /// enriched and sorted by id.
    pub fn featured(&self) -> Result<Vec<EnrichedCard>> {
        FeaturedQuery::default().run(&self.client)
    }

    /// Run a customised showcase query.
    pub fn featured_with(&self, query: &FeaturedQuery) -> Result<Vec<EnrichedCard>> {
        query.run(&self.client)
    }

    // -- Utility -----------------------------------------------------------

    /// Force the next request to fetch a new access token.
    pub fn invalidate_token(&self) {
        self.client.tokens().invalidate();
    }

    /// Return a reference to the underlying [`ApiClient`] for advanced usage.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CardSearchSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.client.tokens().has_valid_token() {
            "valid"
        } else {
            "none"
        };
        write!(
            f,
            "CardSearchSdk(api_base={}, locale={}, token={})",
            self.client.api_base(),
            self.client.locale(),
            token
        )
    }
}
