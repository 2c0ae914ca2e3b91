//! Query modules for the card search SDK.
//!
//! Each module provides a query struct that borrows from an
//! [`ApiClient`](crate::client::ApiClient) and exposes methods returning
//! `Result<T>` with typed payloads from [`models`](crate::models).

pub mod cards;
pub mod metadata;

pub use cards::{CardQuery, SearchCardsParams};
pub use metadata::MetadataQuery;
