use pogoda_cities::SuggestionEngine;
use pogoda_core::Theme;
use std::sync::Arc;

/// Shared application state handed to every request handler.
///
/// The engine only reads its immutable catalog, so cloning the state per
/// request needs no locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: Arc<SuggestionEngine>,
    pub default_theme: Theme,
}

impl AppState {
    pub fn new(engine: SuggestionEngine, default_theme: Theme) -> Self {
        Self {
            engine: Arc::new(engine),
            default_theme,
        }
    }
}
