//! OAuth2 client-credentials token lifecycle.
//!
//! [`TokenManager`] holds at most one bearer token. [`ensure_token`](TokenManager::ensure_token)
//! hands back the cached token while it is still valid and performs a fresh
//! client-credentials exchange otherwise. The whole check-and-refresh sequence
//! runs under one mutex, so concurrent callers racing an expired token trigger a
//! single exchange and all reuse its result.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Credentials;
use crate::error::{CardSearchError, Result};
use crate::transport::{Authorization, HttpRequest, HttpTransport};

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Source of the current time, injectable so expiry can be tested.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// Body returned by the OAuth token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthResponse {
    pub access_token: String,
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub sub: String,
}

/// A bearer token and the instant it stops being usable.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// `true` if the token is non-empty and `now` is strictly before expiry.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.access_token.is_empty() && now < self.expires_at
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// TokenManager
// ---------------------------------------------------------------------------

/// Owns the cached bearer token for one set of client credentials.
pub struct TokenManager {
    credentials: Credentials,
    token_url: String,
    clock: Arc<dyn Clock>,
    state: Mutex<Option<Token>>,
}

impl TokenManager {
    pub fn new(credentials: Credentials, token_url: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            credentials,
            token_url: token_url.into(),
            clock,
            state: Mutex::new(None),
        }
    }

    /// Return a valid access token, exchanging credentials for a new one if
    /// none is cached or the cached one has expired.
    ///
    /// Exchange failures surface as [`CardSearchError::Auth`] and leave any
    /// previously cached token untouched. No retry happens here.
    pub fn ensure_token(&self, transport: &dyn HttpTransport) -> Result<String> {
        let mut state = self.lock();

        if let Some(token) = state.as_ref() {
            if token.is_valid_at(self.clock.now()) {
                debug!(expires_at = %token.expires_at, "reusing cached access token");
                return Ok(token.access_token.clone());
            }
            debug!(expires_at = %token.expires_at, "cached access token expired");
        }

        let token = self.exchange(transport)?;
        let access_token = token.access_token.clone();
        *state = Some(token);
        Ok(access_token)
    }

    /// Drop the cached token so the next call performs a fresh exchange.
    pub fn invalidate(&self) {
        *self.lock() = None;
    }

    /// Snapshot of the cached token, if any.
    pub fn current(&self) -> Option<Token> {
        self.lock().clone()
    }

    /// Whether a token is cached and still valid right now.
    pub fn has_valid_token(&self) -> bool {
        let now = self.clock.now();
        self.lock().as_ref().is_some_and(|t| t.is_valid_at(now))
    }

    fn lock(&self) -> MutexGuard<'_, Option<Token>> {
        // The slot is only assigned after a successful exchange, so a panic
        // elsewhere cannot leave it half-written.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn exchange(&self, transport: &dyn HttpTransport) -> Result<Token> {
        let request = HttpRequest::post(&self.token_url)
            .auth(Authorization::Basic {
                username: self.credentials.client_id.clone(),
                password: self.credentials.client_secret.clone(),
            })
            .form(vec![("grant_type".into(), "client_credentials".into())]);

        let resp = transport
            .send(&request)
            .map_err(|e| CardSearchError::Auth(format!("token exchange failed: {e}")))?;

        if !resp.is_success() {
            return Err(CardSearchError::Auth(format!(
                "token endpoint returned {}: {}",
                resp.status, resp.body
            )));
        }

        let parsed: OAuthResponse = serde_json::from_str(&resp.body)
            .map_err(|e| CardSearchError::Auth(format!("malformed token response: {e}")))?;

        if parsed.access_token.is_empty() {
            return Err(CardSearchError::Auth(
                "token endpoint returned an empty access token".into(),
            ));
        }

        let issued_at = self.clock.now();
        let lifetime = Duration::try_seconds(parsed.expires_in.max(0)).unwrap_or(Duration::MAX);
        let expires_at = issued_at
            .checked_add_signed(lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        info!(
            expires_at = %expires_at,
            token_type = %parsed.token_type,
            "obtained new access token"
        );

        Ok(Token {
            access_token: parsed.access_token,
            expires_at,
        })
    }
}
