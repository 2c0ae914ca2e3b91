use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Card -- A single record from the card search endpoint
// ---------------------------------------------------------------------------

/// Raw card as returned by `/hearthstone/cards`.
///
/// Foreign keys (`card_type_id`, `rarity_id`, `card_set_id`, `class_id`) point
/// into the collections of a [`MetadataResult`](super::MetadataResult).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub id: i64,
    pub collectible: i64,
    pub slug: String,
    pub class_id: i64,
    pub multi_class_ids: Vec<i64>,
    pub card_type_id: i64,
    pub card_set_id: i64,
    pub rarity_id: i64,
    pub artist_name: Option<String>,
    pub health: Option<i64>,
    pub attack: Option<i64>,
    pub mana_cost: i64,
    pub name: String,
    pub text: String,
    pub image: String,
    pub image_gold: Option<String>,
    pub flavor_text: Option<String>,
    pub crop_image: Option<String>,
    pub parent_id: i64,
}

// ---------------------------------------------------------------------------
// CardSearchResult -- Top-level card search response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardSearchResult {
    pub card_count: i64,
    pub cards: Vec<Card>,
    pub page: i64,
    pub page_count: i64,
}

// ---------------------------------------------------------------------------
// EnrichedCard -- Display projection with foreign keys resolved to names
// ---------------------------------------------------------------------------

/// A [`Card`] with its numeric references replaced by names.
///
/// Lookups that found nothing are left as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedCard {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub image: String,
    pub rarity: String,
    pub set: String,
    pub class: String,
}
