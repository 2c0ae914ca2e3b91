//! Configuration and builder tests.

mod common;

use std::time::Duration;

use card_search::config::MAX_BACKOFF;
use card_search::{CardSearchError, CardSearchSdk, Credentials, RetryPolicy};

#[test]
fn blank_credentials_are_rejected() {
    let err = Credentials::new("", "secret").validate().unwrap_err();
    assert!(matches!(err, CardSearchError::InvalidArgument(ref m) if m.contains("client-id")));

    let err = Credentials::new("id", "  ").validate().unwrap_err();
    assert!(matches!(err, CardSearchError::InvalidArgument(ref m) if m.contains("client-secret")));
}

#[test]
fn builder_validates_explicit_credentials() {
    let result = CardSearchSdk::builder()
        .credentials(Credentials::new("id", ""))
        .transport(common::ScriptedTransport::new())
        .build();
    assert!(matches!(result, Err(CardSearchError::InvalidArgument(_))));
}

#[test]
fn build_does_not_contact_the_api() {
    let (sdk, transport, _clock) = common::setup_sdk();
    assert!(transport.requests().is_empty());
    assert_eq!(
        sdk.to_string(),
        "CardSearchSdk(api_base=https://api.test, locale=en_US, token=none)"
    );
}

#[test]
fn display_reports_cached_token() {
    let (sdk, _transport, _clock) = common::setup_sdk();
    sdk.client().ensure_token().unwrap();
    assert!(sdk.to_string().ends_with("token=valid)"));

    sdk.invalidate_token();
    assert!(sdk.to_string().ends_with("token=none)"));
}

#[test]
fn debug_output_hides_secrets() {
    let creds = Credentials::new("visible-id", "hidden-secret");
    let out = format!("{creds:?}");
    assert!(out.contains("visible-id"));
    assert!(!out.contains("hidden-secret"));
}

#[test]
fn default_retry_policy_is_three_immediate_retries() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.max_retries, 3);
    assert_eq!(policy.delay_for(1), Duration::ZERO);
    assert_eq!(policy.delay_for(3), Duration::ZERO);
}

#[test]
fn backoff_doubles_and_is_capped() {
    let policy = RetryPolicy {
        max_retries: 10,
        base_delay: Duration::from_millis(500),
    };
    assert_eq!(policy.delay_for(1), Duration::from_millis(500));
    assert_eq!(policy.delay_for(2), Duration::from_secs(1));
    assert_eq!(policy.delay_for(3), Duration::from_secs(2));
    assert_eq!(policy.delay_for(10), MAX_BACKOFF);
}

#[test]
fn response_status_checks() {
    use card_search::HttpResponse;

    assert!(HttpResponse::new(204, "").is_success());
    assert!(!HttpResponse::new(302, "").is_success());
    assert!(HttpResponse::new(429, "").is_rate_limited());
    assert!(!HttpResponse::new(503, "").is_rate_limited());
    assert_eq!(HttpResponse::new(42, "").status_code(), None);
    assert!(!HttpResponse::new(42, "").is_success());
}
