//! Metadata queries against `/hearthstone/metadata`.

use crate::client::ApiClient;
use crate::enrich::enrich_cards;
use crate::error::Result;
use crate::lookup::MetadataIndex;
use crate::models::{Card, EnrichedCard, MetadataResult};

/// Query interface for the metadata endpoint, borrowing an [`ApiClient`].
pub struct MetadataQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> MetadataQuery<'a> {
    /// Create a new `MetadataQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all metadata collections for the client locale.
    pub fn get(&self) -> Result<MetadataResult> {
        self.client.get_metadata()
    }

    /// Fetch metadata and hand a [`MetadataIndex`] over it to `f`.
    ///
    /// The index borrows the fetched snapshot, so it only lives for the call.
    pub fn with_index<T>(&self, f: impl FnOnce(&MetadataIndex<'_>) -> T) -> Result<T> {
        let metadata = self.get()?;
        Ok(f(&MetadataIndex::new(&metadata)))
    }

    /// Fetch metadata and use it to enrich `cards` in one step.
    pub fn enrich(&self, cards: &[Card]) -> Result<Vec<EnrichedCard>> {
        let metadata = self.get()?;
        Ok(enrich_cards(cards, &metadata))
    }
}
