//! Authenticated access to the Hearthstone game-data API.
//!
//! Every call obtains a bearer token from the [`TokenManager`] first, then
//! issues a GET against the configured API host. Responses with status 429 are
//! retried up to [`RetryPolicy::max_retries`] times; any other status or
//! transport failure is returned to the caller immediately.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{RetryPolicy, CARDS_PATH, METADATA_PATH};
use crate::error::{CardSearchError, Result};
use crate::models::{CardSearchResult, MetadataResult};
use crate::queries::cards::SearchCardsParams;
use crate::token::TokenManager;
use crate::transport::{Authorization, HttpRequest, HttpResponse, HttpTransport};

/// Low-level API client. Owns the token cache for its credentials.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    tokens: TokenManager,
    api_base: String,
    locale: String,
    retry: RetryPolicy,
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        tokens: TokenManager,
        api_base: impl Into<String>,
        locale: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        let api_base: String = api_base.into();
        Self {
            transport,
            tokens,
            api_base: api_base.trim_end_matches('/').to_string(),
            locale: locale.into(),
            retry,
        }
    }

    /// Search cards with the given filters.
    ///
    /// When no locale filter is given the client locale is sent, so names come
    /// back as plain strings rather than per-locale maps.
    pub fn search_cards(&self, params: &SearchCardsParams) -> Result<CardSearchResult> {
        let mut query = params.to_query()?;
        if !query.iter().any(|(k, _)| k == "locale") {
            query.insert(0, ("locale".into(), self.locale.clone()));
        }
        self.get_json(CARDS_PATH, query)
    }

    /// Fetch every metadata collection for the client locale.
    pub fn get_metadata(&self) -> Result<MetadataResult> {
        self.get_json(METADATA_PATH, vec![("locale".into(), self.locale.clone())])
    }

    /// Make sure a valid token is cached, refreshing it if necessary.
    pub fn ensure_token(&self) -> Result<String> {
        self.tokens.ensure_token(self.transport.as_ref())
    }

    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: Vec<(String, String)>) -> Result<T> {
        let request = HttpRequest::get(format!("{}{}", self.api_base, path)).query(query);

        let resp = self.send_with_retry(request)?;
        if !resp.is_success() {
            return Err(CardSearchError::Upstream {
                status: resp.status,
                body: resp.body,
            });
        }

        Ok(serde_json::from_str(&resp.body)?)
    }

    /// Send `request`, retrying on 429. The bearer token is re-checked before
    /// every attempt so a retry never goes out with a token that expired
    /// during the previous round trip or backoff.
    fn send_with_retry(&self, mut request: HttpRequest) -> Result<HttpResponse> {
        let mut retries = 0u32;
        loop {
            request.auth = Authorization::Bearer(self.ensure_token()?);

            debug!(url = %request.url, attempt = retries + 1, "GET");
            let resp = self.transport.send(&request)?;

            if resp.is_rate_limited() && retries < self.retry.max_retries {
                retries += 1;
                let wait = self.retry.delay_for(retries);
                warn!(
                    url = %request.url,
                    retry = retries,
                    wait_ms = wait.as_millis() as u64,
                    "API returned 429, retrying"
                );
                if !wait.is_zero() {
                    std::thread::sleep(wait);
                }
                continue;
            }

            return Ok(resp);
        }
    }
}
