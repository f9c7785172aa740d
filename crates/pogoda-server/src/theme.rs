//! The theme cookie: names, lifetimes, and request/response bodies.

use axum_extra::extract::cookie::{Cookie, SameSite};
use pogoda_core::Theme;
use serde::{Deserialize, Serialize};
use time::Duration;

/// Cookie carrying the client's theme choice.
pub const THEME_COOKIE: &str = "theme";

/// The cookie lives for a week; the front end re-posts on every toggle.
const THEME_COOKIE_MAX_AGE_DAYS: i64 = 7;

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct SetThemeResponse {
    pub status: &'static str,
    pub theme: Theme,
}

/// Build the persistent theme cookie.
///
/// `HttpOnly` keeps scripts away from it (the front end reads the theme
/// back through `GET /api/theme`, not from the cookie itself).
pub fn theme_cookie(theme: Theme) -> Cookie<'static> {
    Cookie::build((THEME_COOKIE, theme.as_str()))
        .path("/")
        .max_age(Duration::days(THEME_COOKIE_MAX_AGE_DAYS))
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cookie_attributes() {
        let cookie = theme_cookie(Theme::Dark);
        assert_eq!(cookie.name(), "theme");
        assert_eq!(cookie.value(), "dark");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
