//! Card search queries against `/hearthstone/cards`.

use std::collections::BTreeMap;

use crate::client::ApiClient;
use crate::error::{CardSearchError, Result};
use crate::models::{Card, CardSearchResult};

// ---------------------------------------------------------------------------
// SearchCardsParams
// ---------------------------------------------------------------------------

/// Filters for the card search endpoint.
///
/// All fields are optional. When `None`, the corresponding filter is not sent.
/// `extra` is passed through verbatim for filters not modelled here
/// (e.g. `attack`, `health`, `textFilter`, `sort`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCardsParams {
    pub locale: Option<String>,
    pub class: Option<String>,
    pub rarity: Option<String>,
    pub set: Option<String>,
    pub card_type: Option<String>,
    pub mana_cost: Option<Vec<u32>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub extra: BTreeMap<String, String>,
}

impl SearchCardsParams {
    /// Validate the filters and render them as query-string pairs.
    ///
    /// Mana costs are de-duplicated, sorted and joined with commas.
    pub fn to_query(&self) -> Result<Vec<(String, String)>> {
        let mut query: Vec<(String, String)> = Vec::new();

        if let Some(locale) = &self.locale {
            if !is_locale(locale) {
                return Err(invalid(format!(
                    "locale must look like 'en_US', got '{locale}'"
                )));
            }
            query.push(("locale".into(), locale.clone()));
        }

        for (key, value) in [
            ("class", &self.class),
            ("rarity", &self.rarity),
            ("set", &self.set),
            ("type", &self.card_type),
        ] {
            if let Some(v) = value {
                let v = v.trim();
                if v.is_empty() {
                    return Err(invalid(format!("'{key}' filter must not be blank")));
                }
                query.push((key.into(), v.to_string()));
            }
        }

        if let Some(costs) = &self.mana_cost {
            if costs.is_empty() {
                return Err(invalid("'manaCost' filter must list at least one cost"));
            }
            let mut costs = costs.clone();
            costs.sort_unstable();
            costs.dedup();
            let joined = costs
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(",");
            query.push(("manaCost".into(), joined));
        }

        for (key, value) in [("page", self.page), ("pageSize", self.page_size)] {
            if let Some(n) = value {
                if n == 0 {
                    return Err(invalid(format!("'{key}' must be at least 1")));
                }
                query.push((key.into(), n.to_string()));
            }
        }

        for (key, value) in &self.extra {
            if key.trim().is_empty() {
                return Err(invalid("extra filter keys must not be blank"));
            }
            if query.iter().any(|(k, _)| k == key) {
                return Err(invalid(format!(
                    "extra filter '{key}' conflicts with a typed filter"
                )));
            }
            query.push((key.clone(), value.clone()));
        }

        Ok(query)
    }
}

fn invalid(msg: impl Into<String>) -> CardSearchError {
    CardSearchError::InvalidArgument(msg.into())
}

fn is_locale(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 5
        && b[0].is_ascii_lowercase()
        && b[1].is_ascii_lowercase()
        && b[2] == b'_'
        && b[3].is_ascii_uppercase()
        && b[4].is_ascii_uppercase()
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for card search, borrowing an [`ApiClient`].
pub struct CardQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Run one search and return the full response (cards plus counts).
    pub fn search(&self, params: &SearchCardsParams) -> Result<CardSearchResult> {
        self.client.search_cards(params)
    }

    /// Run several searches in order and concatenate their cards.
    ///
    /// Stops at the first failing search.
    pub fn search_merged(&self, searches: &[SearchCardsParams]) -> Result<Vec<Card>> {
        let mut cards = Vec::new();
        for params in searches {
            cards.extend(self.search(params)?.cards);
        }
        Ok(cards)
    }
}
