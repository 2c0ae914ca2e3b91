//! Foreign-key resolution against a [`MetadataResult`].
//!
//! Every resolver is total: an id with no matching entry resolves to `""`.
//! Lookups are linear scans; the collections are a few dozen entries and the
//! number of lookups is bounded by the cards enriched per request.

use crate::models::{CardSetMeta, Class, GenericMetadata, MetadataResult, Rarity};

/// A metadata entry addressable by numeric id.
pub trait NamedEntry {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
}

macro_rules! impl_named_entry {
    ($($ty:ty),*) => {
        $(
            impl NamedEntry for $ty {
                fn id(&self) -> i64 {
                    self.id
                }
                fn name(&self) -> &str {
                    &self.name
                }
            }
        )*
    };
}

impl_named_entry!(GenericMetadata, Rarity, Class);

fn find_name<T: NamedEntry>(id: i64, entries: &[T]) -> String {
    entries
        .iter()
        .find(|e| e.id() == id)
        .map(|e| e.name().to_string())
        .unwrap_or_default()
}

/// Name of the `{id, name}` entry with the given id (types, minion types, ...).
pub fn resolve_generic(id: i64, collection: &[GenericMetadata]) -> String {
    find_name(id, collection)
}

pub fn resolve_rarity(id: i64, rarities: &[Rarity]) -> String {
    find_name(id, rarities)
}

pub fn resolve_class(id: i64, classes: &[Class]) -> String {
    find_name(id, classes)
}

/// Name of the set reachable through `id`.
///
/// Each entry is checked for `id` among its alias ids first and then against
/// its primary id, before moving on to the next entry.
pub fn resolve_set(id: i64, sets: &[CardSetMeta]) -> String {
    sets.iter()
        .find(|s| s.alias_set_ids.contains(&id) || s.id == id)
        .map(|s| s.name.clone())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// MetadataIndex
// ---------------------------------------------------------------------------

/// Borrowing view over one metadata snapshot that resolves card foreign keys.
#[derive(Debug, Clone, Copy)]
pub struct MetadataIndex<'a> {
    metadata: &'a MetadataResult,
}

impl<'a> MetadataIndex<'a> {
    pub fn new(metadata: &'a MetadataResult) -> Self {
        Self { metadata }
    }

    pub fn type_name(&self, id: i64) -> String {
        resolve_generic(id, &self.metadata.types)
    }

    pub fn rarity_name(&self, id: i64) -> String {
        resolve_rarity(id, &self.metadata.rarities)
    }

    pub fn set_name(&self, id: i64) -> String {
        resolve_set(id, &self.metadata.sets)
    }

    pub fn class_name(&self, id: i64) -> String {
        resolve_class(id, &self.metadata.classes)
    }

    pub fn metadata(&self) -> &'a MetadataResult {
        self.metadata
    }
}
