//! Shared test fixtures for the card search integration tests.
//!
//! Provides a scripted [`HttpTransport`] that records every request and answers
//! from queued responses, a manually advanced clock, and JSON payload builders.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use card_search::models::{Card, CardSetMeta, Class, GenericMetadata, MetadataResult, Rarity};
use card_search::transport::Authorization;
use card_search::{
    CardSearchError, CardSearchSdk, Clock, Credentials, HttpRequest, HttpResponse, HttpTransport,
    Result,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;

pub const TOKEN_URL: &str = "https://oauth.test/token";
pub const API_BASE: &str = "https://api.test";

// ---------------------------------------------------------------------------
// ScriptedTransport
// ---------------------------------------------------------------------------

/// Answers token requests and API requests from two independent queues.
///
/// Token requests with an empty queue get a fresh one-hour token. API requests
/// with an empty queue get a 500 so a missing script shows up as a failure.
#[derive(Default)]
pub struct ScriptedTransport {
    requests: Mutex<Vec<HttpRequest>>,
    token_responses: Mutex<VecDeque<HttpResponse>>,
    api_responses: Mutex<VecDeque<HttpResponse>>,
    token_unreachable: Mutex<bool>,
    issued: Mutex<u32>,
    on_rate_limit: Mutex<Option<(Arc<ManualClock>, Duration)>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_token(&self, resp: HttpResponse) {
        self.token_responses.lock().unwrap().push_back(resp);
    }

    pub fn push_api(&self, resp: HttpResponse) {
        self.api_responses.lock().unwrap().push_back(resp);
    }

    pub fn push_api_json(&self, body: serde_json::Value) {
        self.push_api(HttpResponse::new(200, body.to_string()));
    }

    pub fn push_rate_limited(&self, times: usize) {
        for _ in 0..times {
            self.push_api(HttpResponse::new(429, "Too Many Requests"));
        }
    }

    /// Make the token endpoint fail without any HTTP response.
    pub fn make_token_unreachable(&self) {
        *self.token_unreachable.lock().unwrap() = true;
    }

    /// Move `clock` forward by `by` every time a 429 is answered.
    pub fn advance_clock_on_rate_limit(&self, clock: Arc<ManualClock>, by: Duration) {
        *self.on_rate_limit.lock().unwrap() = Some((clock, by));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn token_requests(&self) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.url == TOKEN_URL)
            .collect()
    }

    pub fn api_requests(&self) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.url != TOKEN_URL)
            .collect()
    }

    fn next_token(&self) -> HttpResponse {
        if let Some(resp) = self.token_responses.lock().unwrap().pop_front() {
            return resp;
        }
        let mut issued = self.issued.lock().unwrap();
        *issued += 1;
        token_ok(&format!("token-{}", *issued), 3600)
    }
}

impl HttpTransport for ScriptedTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        if request.url == TOKEN_URL {
            if *self.token_unreachable.lock().unwrap() {
                return Err(CardSearchError::InvalidArgument(
                    "connection refused".into(),
                ));
            }
            return Ok(self.next_token());
        }
        let resp = self
            .api_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpResponse::new(500, "unscripted request"));
        if resp.is_rate_limited() {
            if let Some((clock, by)) = self.on_rate_limit.lock().unwrap().as_ref() {
                clock.advance(*by);
            }
        }
        Ok(resp)
    }
}

// ---------------------------------------------------------------------------
// ManualClock
// ---------------------------------------------------------------------------

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()),
        })
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ---------------------------------------------------------------------------
// SDK setup
// ---------------------------------------------------------------------------

pub fn credentials() -> Credentials {
    Credentials::new("test-client", "test-secret")
}

/// Build an SDK wired to the scripted transport and manual clock.
pub fn setup_sdk() -> (CardSearchSdk, Arc<ScriptedTransport>, Arc<ManualClock>) {
    let transport = ScriptedTransport::new();
    let clock = ManualClock::new();
    let sdk = CardSearchSdk::builder()
        .credentials(credentials())
        .api_base(API_BASE)
        .token_url(TOKEN_URL)
        .transport(transport.clone())
        .clock(clock.clone())
        .build()
        .unwrap();
    (sdk, transport, clock)
}

pub fn bearer(request: &HttpRequest) -> Option<&str> {
    match &request.auth {
        Authorization::Bearer(token) => Some(token.as_str()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

pub fn token_ok(access_token: &str, expires_in: i64) -> HttpResponse {
    HttpResponse::new(
        200,
        json!({
            "access_token": access_token,
            "token_type": "bearer",
            "expires_in": expires_in,
            "sub": "test-client"
        })
        .to_string(),
    )
}

pub fn card(id: i64, name: &str, class_id: i64, rarity_id: i64, set_id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "collectible": 1,
        "slug": format!("{id}-{}", name.to_lowercase().replace(' ', "-")),
        "classId": class_id,
        "multiClassIds": [],
        "cardTypeId": 4,
        "cardSetId": set_id,
        "rarityId": rarity_id,
        "artistName": null,
        "health": 8,
        "attack": 8,
        "manaCost": 8,
        "name": name,
        "text": "",
        "image": format!("https://img.test/{id}.png"),
        "imageGold": "",
        "flavorText": "",
        "cropImage": null,
        "parentId": 0
    })
}

pub fn search_page(cards: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "cardCount": cards.len(),
        "cards": cards,
        "page": 1,
        "pageCount": 1
    })
}

pub fn metadata_json() -> serde_json::Value {
    json!({
        "sets": [
            { "id": 1635, "name": "Legacy", "slug": "legacy", "type": "base",
              "aliasSetIds": [2, 3, 4, 12, 13], "collectibleCount": 385 },
            { "id": 1466, "name": "Ashes of Outland", "slug": "ashes-of-outland",
              "type": "expansion", "aliasSetIds": [] }
        ],
        "setGroups": [
            { "slug": "standard", "name": "Standard", "standard": true,
              "cardSets": ["ashes-of-outland"], "year": null }
        ],
        "types": [
            { "id": 4, "name": "Minion", "slug": "minion" },
            { "id": 5, "name": "Spell", "slug": "spell" }
        ],
        "rarities": [
            { "id": 1, "name": "Common", "slug": "common",
              "craftingCost": [40, 400], "dustValue": [5, 50] },
            { "id": 5, "name": "Legendary", "slug": "legendary",
              "craftingCost": [1600, 3200], "dustValue": [400, 1600] }
        ],
        "classes": [
            { "id": 2, "name": "Druid", "slug": "druid", "cardId": 274,
              "heroPowerCardId": 1123, "alternateHeroCardIds": [] },
            { "id": 9, "name": "Warlock", "slug": "warlock", "cardId": 893,
              "heroPowerCardId": 1165, "alternateHeroCardIds": [] },
            { "id": 12, "name": "Neutral", "slug": "neutral", "cardId": null }
        ],
        "minionTypes": [{ "id": 15, "name": "Demon", "slug": "demon" }],
        "spellSchools": [],
        "gameModes": [{ "id": 1, "name": "Constructed", "slug": "constructed" }],
        "cardBackCategories": [],
        "keywords": [
            { "id": 1, "name": "Taunt", "slug": "taunt", "refText": "Taunt",
              "text": "Enemies must attack this minion.", "gameModes": [1] }
        ],
        "arenaIds": [1, 2],
        "filterableFields": ["attack", "health"],
        "numericFields": ["manaCost"]
    })
}

pub fn metadata() -> MetadataResult {
    serde_json::from_value(metadata_json()).unwrap()
}

// -- Typed builders for pure (no network) tests ------------------------------

pub fn generic(id: i64, name: &str) -> GenericMetadata {
    GenericMetadata {
        id,
        name: name.into(),
        slug: name.to_lowercase(),
    }
}

pub fn rarity(id: i64, name: &str) -> Rarity {
    Rarity {
        id,
        name: name.into(),
        slug: name.to_lowercase(),
        ..Default::default()
    }
}

pub fn class(id: i64, name: &str) -> Class {
    Class {
        id,
        name: name.into(),
        slug: name.to_lowercase(),
        ..Default::default()
    }
}

pub fn set(id: i64, aliases: &[i64], name: &str) -> CardSetMeta {
    CardSetMeta {
        id,
        name: name.into(),
        slug: name.to_lowercase(),
        alias_set_ids: aliases.to_vec(),
        ..Default::default()
    }
}

pub fn raw_card(id: i64, name: &str) -> Card {
    Card {
        id,
        name: name.into(),
        ..Default::default()
    }
}
