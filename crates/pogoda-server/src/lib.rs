//! HTTP layer for Pogoda
//!
//! Thin axum glue around the suggestion engine: routing, JSON
//! serialization, the theme cookie, and static file serving. All
//! decision logic lives in `pogoda-cities`.

pub mod routes;
pub mod state;
pub mod theme;

pub use routes::router;
pub use state::AppState;
