//! City catalog and suggestion engine for Pogoda
//!
//! Ranks a fixed set of city names against a partial user query and
//! returns the best candidates for autocomplete.

pub mod catalog;
pub mod suggest;

pub use catalog::{CatalogError, CityCatalog};
pub use suggest::{MatchPriority, SuggestionEngine, MAX_SUGGESTIONS, MIN_QUERY_CHARS};
