//! Joins raw cards with metadata into display records.

use crate::lookup::MetadataIndex;
use crate::models::{Card, EnrichedCard, MetadataResult};

/// Enrich every card against `metadata`.
///
/// Produces exactly one record per input card, in input order. Nothing is
/// filtered out, even when every lookup comes back empty.
pub fn enrich_cards(cards: &[Card], metadata: &MetadataResult) -> Vec<EnrichedCard> {
    let index = MetadataIndex::new(metadata);
    cards.iter().map(|card| enrich_card(card, &index)).collect()
}

pub fn enrich_card(card: &Card, index: &MetadataIndex<'_>) -> EnrichedCard {
    EnrichedCard {
        id: card.id.to_string(),
        name: card.name.clone(),
        card_type: index.type_name(card.card_type_id),
        image: card.image.clone(),
        rarity: index.rarity_name(card.rarity_id),
        set: index.set_name(card.card_set_id),
        class: index.class_name(card.class_id),
    }
}
