//! The city catalog: an ordered, immutable list of known city names.
//!
//! The catalog is built once at startup and injected into the
//! [`SuggestionEngine`](crate::suggest::SuggestionEngine); nothing mutates
//! it afterwards, so it can be shared freely across request handlers.

use std::path::Path;
use thiserror::Error;

/// Cities of the default deployment, in their canonical casing.
const DEFAULT_CITIES: &[&str] = &[
    "Владивосток",
    "Санкт-Петербург",
    "Москва",
    "Благовещенск",
    "Хабаровск",
    "Артем",
];

/// Errors raised while loading a catalog from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog file contains no cities")]
    Empty,
}

/// An ordered list of city names, fixed for the process lifetime.
///
/// Order matters: it is the tie-break of last resort when ranking
/// suggestions, so the list is kept exactly as provided.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    names: Vec<String>,
}

impl CityCatalog {
    /// Create a catalog from an injected list of names.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// The built-in city list used when no catalog file is configured.
    pub fn default_cities() -> Self {
        Self::new(DEFAULT_CITIES.iter().map(|s| (*s).to_string()).collect())
    }

    /// Load a catalog from a JSON file containing an array of strings.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read, is not a JSON
    /// array of strings, or lists no cities at all.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        let names: Vec<String> = serde_json::from_str(&contents)?;

        if names.is_empty() {
            return Err(CatalogError::Empty);
        }

        tracing::info!("Loaded {} cities from {}", names.len(), path.display());
        Ok(Self::new(names))
    }

    /// City names in catalog order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::default_cities()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_is_populated() {
        let catalog = CityCatalog::default_cities();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.names().iter().any(|n| n == "Москва"));
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["Москва", "Казань"]"#).unwrap();

        let catalog = CityCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.names(), ["Москва", "Казань"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CityCatalog::from_json_file(Path::new("/nonexistent/cities.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cities": []}}"#).unwrap();

        let err = CityCatalog::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_empty_array_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = CityCatalog::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }
}
