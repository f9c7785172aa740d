//! Route table and request handlers.
//!
//! Handlers for the core endpoints are infallible: a query that matches
//! nothing is an empty JSON array, never an error status.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use pogoda_core::Theme;
use serde::Deserialize;
use std::path::Path;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::state::AppState;
use crate::theme::{theme_cookie, SetThemeResponse, ThemeRequest, ThemeResponse, THEME_COOKIE};

/// Build the application router.
///
/// `static_dir` holds the front end: `index.html` at its root is served
/// for `/`, everything else under `/static`.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/cities", get(suggest_cities))
        .route("/api/theme", get(get_theme).post(set_theme))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct CitiesQuery {
    #[serde(default)]
    q: String,
}

/// `GET /api/cities?q=<text>` — ranked autocomplete candidates.
///
/// The raw query is forwarded to the engine verbatim; trimming, case
/// folding and the minimum-length guard all happen there.
async fn suggest_cities(
    State(state): State<AppState>,
    Query(params): Query<CitiesQuery>,
) -> Json<Vec<String>> {
    let suggestions = state.engine.suggest(&params.q);
    tracing::debug!(query = %params.q, hits = suggestions.len(), "city suggestion");
    Json(suggestions)
}

/// `GET /api/theme` — the theme for this client, from its cookie.
async fn get_theme(State(state): State<AppState>, jar: CookieJar) -> Json<ThemeResponse> {
    let theme = jar
        .get(THEME_COOKIE)
        .and_then(|cookie| Theme::from_cookie_value(cookie.value()))
        .unwrap_or(state.default_theme);

    Json(ThemeResponse { theme })
}

/// `POST /api/theme` — persist the client's choice in the cookie.
async fn set_theme(
    jar: CookieJar,
    Json(request): Json<ThemeRequest>,
) -> (CookieJar, Json<SetThemeResponse>) {
    tracing::debug!(theme = request.theme.as_str(), "theme changed");
    let jar = jar.add(theme_cookie(request.theme));

    (
        jar,
        Json(SetThemeResponse {
            status: "success",
            theme: request.theme,
        }),
    )
}
