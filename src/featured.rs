//! The "featured legendaries" showcase.
//!
//! Searches a fixed list of classes, fetches metadata once, enriches the merged
//! results and samples a display-sized subset.

use rand::{Rng, SeedableRng};
use tracing::info;

use crate::client::ApiClient;
use crate::config::DISPLAY_SAMPLE_SIZE;
use crate::enrich::enrich_cards;
use crate::error::Result;
use crate::models::EnrichedCard;
use crate::queries::{CardQuery, SearchCardsParams};
use crate::sampler;

/// Search criteria for the showcase. The default picks high-cost legendary
/// druid and warlock cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedQuery {
    pub classes: Vec<String>,
    pub rarity: String,
    pub mana_costs: Vec<u32>,
    pub sample_size: usize,
}

impl Default for FeaturedQuery {
    fn default() -> Self {
        Self {
            classes: vec!["druid".into(), "warlock".into()],
            rarity: "legendary".into(),
            mana_costs: (7..=12).collect(),
            sample_size: DISPLAY_SAMPLE_SIZE,
        }
    }
}

impl FeaturedQuery {
    /// One search per class, in class order.
    pub fn searches(&self) -> Vec<SearchCardsParams> {
        self.classes
            .iter()
            .map(|class| SearchCardsParams {
                class: Some(class.clone()),
                rarity: Some(self.rarity.clone()),
                mana_cost: Some(self.mana_costs.clone()),
                ..Default::default()
            })
            .collect()
    }

    /// Run the searches, then metadata, then enrich and sample.
    pub fn run(&self, client: &ApiClient) -> Result<Vec<EnrichedCard>> {
        let mut rng = rand::rngs::StdRng::from_entropy();
        self.run_with_rng(client, &mut rng)
    }

    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        client: &ApiClient,
        rng: &mut R,
    ) -> Result<Vec<EnrichedCard>> {
        let cards = CardQuery::new(client).search_merged(&self.searches())?;
        let metadata = client.get_metadata()?;
        let enriched = enrich_cards(&cards, &metadata);
        info!(
            candidates = enriched.len(),
            sample_size = self.sample_size,
            "sampling featured cards"
        );
        Ok(sampler::sample_with_rng(enriched, self.sample_size, rng))
    }
}
