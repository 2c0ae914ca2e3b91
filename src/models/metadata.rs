use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MetadataResult -- Every reference collection from `/hearthstone/metadata`
// ---------------------------------------------------------------------------

/// Snapshot of the metadata endpoint for one locale.
///
/// Only `types`, `rarities`, `sets` and `classes` are consumed by enrichment;
/// the remaining collections are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataResult {
    pub sets: Vec<CardSetMeta>,
    pub set_groups: Vec<SetGroup>,
    pub types: Vec<GenericMetadata>,
    pub rarities: Vec<Rarity>,
    pub classes: Vec<Class>,
    pub minion_types: Vec<GenericMetadata>,
    pub spell_schools: Vec<GenericMetadata>,
    pub game_modes: Vec<GenericMetadata>,
    pub card_back_categories: Vec<GenericMetadata>,
    pub keywords: Vec<Keyword>,
    pub arena_ids: Vec<i64>,
    pub filterable_fields: Vec<String>,
    pub numeric_fields: Vec<String>,
}

/// Any grouping that only carries `{id, name, slug}` (types, minion types,
/// spell schools, game modes, card back categories).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenericMetadata {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// A card set. Older sets can also be referenced through `alias_set_ids`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardSetMeta {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub type_field: String,
    pub alias_set_ids: Vec<i64>,
    pub collectible_count: i64,
    pub collectible_revealed_count: i64,
    pub non_collectible_count: i64,
    pub non_collectible_revealed_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetGroup {
    pub slug: String,
    pub name: String,
    pub year: Option<i64>,
    pub year_range: Option<String>,
    pub icon: Option<String>,
    pub svg: Option<String>,
    pub standard: bool,
    pub card_sets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rarity {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub crafting_cost: Vec<Option<i64>>,
    pub dust_value: Vec<Option<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub card_id: Option<i64>,
    pub hero_power_card_id: Option<i64>,
    pub alternate_hero_card_ids: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Keyword {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub ref_text: String,
    pub text: String,
    pub game_modes: Vec<i64>,
}
