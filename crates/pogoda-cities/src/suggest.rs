//! Ranking logic for city-name autocomplete.
//!
//! Each catalog entry is classified once against the query into a match
//! priority (or discarded), then the candidates are sorted with a single
//! stable sort. Priority is decided on case-folded text; results keep the
//! catalog's original casing.

use crate::catalog::CityCatalog;

/// Maximum number of suggestions returned for one query.
pub const MAX_SUGGESTIONS: usize = 10;

/// Queries shorter than this (in characters, after trimming) return nothing.
///
/// Guards against overly broad, low-precision matches and bounds the
/// matching work per request.
pub const MIN_QUERY_CHARS: usize = 2;

/// Prefix lengths tried by the near-prefix rule, in characters.
const NEAR_PREFIX_CHARS: [usize; 2] = [3, 4];

/// How well a catalog entry matches the query. Lower is better.
///
/// Ordering of the variants is the sort precedence, so the derived `Ord`
/// is the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchPriority {
    /// The city name starts with the query.
    Prefix,
    /// The query occurs somewhere inside the city name.
    Substring,
    /// The city name starts with the query's first 3 or 4 characters.
    ///
    /// Only considered for queries longer than 2 characters; catches
    /// queries whose tail has drifted from any real name.
    NearPrefix,
}

/// Classify one case-folded city name against a case-folded query.
///
/// Returns the best priority the name qualifies for, or `None` when it
/// matches no rule. `query_chars` is the query's character count, passed
/// in so callers fold and measure the query once per request.
fn classify(name: &str, query: &str, query_chars: usize) -> Option<MatchPriority> {
    if name.starts_with(query) {
        return Some(MatchPriority::Prefix);
    }

    if name.contains(query) {
        return Some(MatchPriority::Substring);
    }

    if query_chars > 2 {
        // Character-based prefixes: the catalog is Cyrillic, byte slicing
        // would split code points.
        let near = NEAR_PREFIX_CHARS.iter().any(|&len| {
            let prefix: String = query.chars().take(len).collect();
            name.starts_with(prefix.as_str())
        });
        if near {
            return Some(MatchPriority::NearPrefix);
        }
    }

    None
}

/// Ranks city names from an immutable catalog against partial queries.
///
/// The engine is stateless per call and never fails: malformed or
/// too-short input yields an empty list, not an error. It only reads the
/// injected catalog, so one instance can serve any number of concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    catalog: CityCatalog,
}

impl SuggestionEngine {
    pub fn new(catalog: CityCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CityCatalog {
        &self.catalog
    }

    /// Return up to [`MAX_SUGGESTIONS`] city names ranked for `query`.
    ///
    /// Candidates are ordered by match priority, then by name length
    /// (shorter first), then by catalog order. Returned names use the
    /// catalog's original casing.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        let query = query.trim().to_lowercase();
        let query_chars = query.chars().count();
        if query_chars < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let mut candidates: Vec<(MatchPriority, usize, &str)> = Vec::new();
        for name in self.catalog.names() {
            let folded = name.to_lowercase();
            if let Some(priority) = classify(&folded, &query, query_chars) {
                candidates.push((priority, name.chars().count(), name.as_str()));
            }
        }

        // Stable sort: catalog order survives for full ties.
        candidates.sort_by_key(|&(priority, len, _)| (priority, len));

        candidates
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, _, name)| name.to_string())
            .collect()
    }
}
