use std::path::PathBuf;

/// Catalog configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// JSON file holding the profile's key/value storage. Env var: `RECIPEBOOK_STORE`.
    pub store_path: PathBuf,
    /// Optional byte quota for the store. Env var: `RECIPEBOOK_STORE_QUOTA`.
    pub store_quota: Option<usize>,
    /// Directory of static pages and assets. Env var: `SITE_ROOT`.
    pub site_root: PathBuf,
    /// TCP port for the HTTP server (default 3000). Env var: `PORT`.
    pub port: u16,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; unset or unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            store_path: lookup("RECIPEBOOK_STORE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("recipebook-store.json")),
            store_quota: lookup("RECIPEBOOK_STORE_QUOTA").and_then(|v| v.parse().ok()),
            site_root: lookup("SITE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}
