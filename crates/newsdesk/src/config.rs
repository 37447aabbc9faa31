//! Configuration for loading the catalog.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{
    Catalog, CatalogSource, DEFAULT_TIMEOUT_SECS, FileCatalogSource, GroupResolver,
    HttpCatalogSource,
};
use crate::error::{NewsdeskError, Result};

/// Where the catalog lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    /// Backend endpoint returning `{ "categories": [...] }`.
    Url(String),
    /// JSON file on disk.
    File(PathBuf),
}

impl CatalogLocation {
    /// `http://` and `https://` values are URLs, anything else is a path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            CatalogLocation::Url(value.to_string())
        } else {
            CatalogLocation::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogLocation::Url(url) => write!(f, "{}", url),
            CatalogLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Library configuration.
#[derive(Debug, Clone)]
pub struct NewsdeskConfig {
    /// Catalog location; required before a catalog can be loaded.
    pub catalog: Option<CatalogLocation>,
    /// HTTP timeout for URL catalogs.
    pub timeout_secs: u64,
    /// Bearer token for URL catalogs.
    pub api_token: Option<String>,
    /// Resolve groups from `<group>-…` slugs when `parent` is missing.
    pub slug_prefixes: bool,
}

impl Default for NewsdeskConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_token: None,
            slug_prefixes: false,
        }
    }
}

impl NewsdeskConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from `NEWSDESK_*` environment variables.
    ///
    /// - `NEWSDESK_CATALOG_URL` or `NEWSDESK_CATALOG` (URL or path; the URL
    ///   variable wins when both are set)
    /// - `NEWSDESK_TIMEOUT_SECS`
    /// - `NEWSDESK_API_TOKEN`
    /// - `NEWSDESK_SLUG_PREFIXES` (`1`, `true`, `yes`)
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = var("NEWSDESK_CATALOG_URL").filter(|v| !v.trim().is_empty()) {
            config.catalog = Some(CatalogLocation::Url(url.trim().to_string()));
        } else if let Some(location) = var("NEWSDESK_CATALOG").filter(|v| !v.trim().is_empty()) {
            config.catalog = Some(CatalogLocation::parse(&location));
        }

        if let Some(timeout) = var("NEWSDESK_TIMEOUT_SECS") {
            config.timeout_secs = timeout.trim().parse().map_err(|_| {
                NewsdeskError::Config(format!(
                    "NEWSDESK_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }

        config.api_token = var("NEWSDESK_API_TOKEN").filter(|v| !v.is_empty());

        if let Some(flag) = var("NEWSDESK_SLUG_PREFIXES") {
            config.slug_prefixes = matches!(
                flag.trim().to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        Ok(config)
    }

    pub fn with_catalog(mut self, location: CatalogLocation) -> Self {
        self.catalog = Some(location);
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_slug_prefixes(mut self, enabled: bool) -> Self {
        self.slug_prefixes = enabled;
        self
    }

    /// Group resolver matching this configuration.
    pub fn resolver(&self) -> Result<GroupResolver> {
        if self.slug_prefixes {
            GroupResolver::new().with_slug_prefixes()
        } else {
            Ok(GroupResolver::new())
        }
    }

    /// Catalog source for the configured location.
    pub fn open_source(&self) -> Result<Box<dyn CatalogSource>> {
        match &self.catalog {
            Some(CatalogLocation::Url(url)) => {
                let mut source =
                    HttpCatalogSource::with_timeout(url, Duration::from_secs(self.timeout_secs))?;
                if let Some(token) = &self.api_token {
                    source = source.with_api_token(token);
                }
                Ok(Box::new(source))
            }
            Some(CatalogLocation::File(path)) => Ok(Box::new(FileCatalogSource::new(path))),
            None => Err(NewsdeskError::Config(
                "No catalog configured. Pass --catalog or set NEWSDESK_CATALOG".to_string(),
            )),
        }
    }

    /// Load and index the configured catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        self.open_source()?.load_catalog(&self.resolver()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_location_parse() {
        assert_eq!(
            CatalogLocation::parse("https://cms.example.com/api/categories"),
            CatalogLocation::Url("https://cms.example.com/api/categories".to_string())
        );
        assert_eq!(
            CatalogLocation::parse("data/categories.json"),
            CatalogLocation::File(PathBuf::from("data/categories.json"))
        );
    }

    #[test]
    fn test_from_vars_defaults() {
        let config = NewsdeskConfig::from_vars(vars(&[])).unwrap();
        assert!(config.catalog.is_none());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!config.slug_prefixes);
        assert!(config.open_source().is_err());
    }

    #[test]
    fn test_url_variable_wins() {
        let config = NewsdeskConfig::from_vars(vars(&[
            ("NEWSDESK_CATALOG", "local.json"),
            ("NEWSDESK_CATALOG_URL", "http://localhost:5000/api/categories"),
            ("NEWSDESK_TIMEOUT_SECS", "5"),
            ("NEWSDESK_SLUG_PREFIXES", "true"),
        ]))
        .unwrap();

        assert_eq!(
            config.catalog,
            Some(CatalogLocation::Url("http://localhost:5000/api/categories".to_string()))
        );
        assert_eq!(config.timeout_secs, 5);
        assert!(config.slug_prefixes);
        assert_eq!(config.resolver().unwrap().slug_rules().len(), 9);
    }

    #[test]
    fn test_bad_timeout() {
        let err = NewsdeskConfig::from_vars(vars(&[("NEWSDESK_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("NEWSDESK_TIMEOUT_SECS"));
    }
}
