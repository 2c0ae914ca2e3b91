pub mod card;
pub mod metadata;

pub use card::*;
pub use metadata::*;
