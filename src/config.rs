use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{CardSearchError, Result};

pub const API_BASE: &str = "https://us.api.blizzard.com";
pub const OAUTH_TOKEN_URL: &str = "https://us.battle.net/oauth/token";

pub const CARDS_PATH: &str = "/hearthstone/cards";
pub const METADATA_PATH: &str = "/hearthstone/metadata";

pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Retries allowed after the first attempt when the API answers 429.
pub const MAX_RETRIES: u32 = 3;

/// Upper bound on a single backoff sleep between rate-limited attempts.
pub const MAX_BACKOFF: Duration = Duration::from_secs(8);

/// Number of cards picked for display by the sampler.
pub const DISPLAY_SAMPLE_SIZE: usize = 10;

pub const CLIENT_ID_ENV: &str = "CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "CLIENT_SECRET";

/// OAuth client credentials issued by the Blizzard developer portal.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read credentials from the `CLIENT_ID` and `CLIENT_SECRET` environment variables.
    pub fn from_env() -> Result<Self> {
        let creds = Self::new(
            env::var(CLIENT_ID_ENV).unwrap_or_default(),
            env::var(CLIENT_SECRET_ENV).unwrap_or_default(),
        );
        creds.validate()?;
        Ok(creds)
    }

    /// Reject blank credentials before any request is attempted.
    pub fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(CardSearchError::InvalidArgument(
                "Required API client-id missing".into(),
            ));
        }
        if self.client_secret.trim().is_empty() {
            return Err(CardSearchError::InvalidArgument(
                "Required API client-secret missing".into(),
            ));
        }
        Ok(())
    }
}

// Keep the secret out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Retry behaviour for rate-limited (HTTP 429) responses.
///
/// Only 429 is retried. `base_delay` of zero retries immediately; otherwise the
/// delay doubles per attempt, capped at [`MAX_BACKOFF`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            base_delay: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    /// Sleep duration before retry number `retry` (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        if self.base_delay.is_zero() {
            return Duration::ZERO;
        }
        let factor = 1u32 << retry.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(factor).min(MAX_BACKOFF)
    }
}
