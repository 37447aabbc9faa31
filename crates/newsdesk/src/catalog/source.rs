//! Where catalogs come from: the CMS backend or a JSON file on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::error::{NewsdeskError, Result};

use super::catalog::Catalog;
use super::category::{Category, CatalogResponse};
use super::resolver::GroupResolver;

/// Default timeout for catalog requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// A source of category records.
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw category list.
    fn load(&self) -> Result<Vec<Category>>;

    /// Short description used in logs and catalog stats.
    fn describe(&self) -> String;

    /// Fetch and index the catalog in one step.
    fn load_catalog(&self, resolver: &GroupResolver) -> Result<Catalog> {
        let categories = self.load()?;
        tracing::debug!(source = %self.describe(), count = categories.len(), "catalog loaded");
        Ok(Catalog::new(categories, resolver)?.with_source(self.describe()))
    }
}

/// Accepted body shapes: `{ "categories": [...] }` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogBody {
    Wrapped(CatalogResponse),
    Bare(Vec<Category>),
}

/// Parse a catalog body.
pub fn parse_catalog_body(body: &str) -> Result<Vec<Category>> {
    let parsed: CatalogBody = serde_json::from_str(body)?;
    Ok(match parsed {
        CatalogBody::Wrapped(response) => response.categories,
        CatalogBody::Bare(categories) => categories,
    })
}

/// Loads the catalog with a blocking GET request.
pub struct HttpCatalogSource {
    client: Client,
    url: String,
    api_token: Option<String>,
}

impl HttpCatalogSource {
    /// Create a source for `url` with the default timeout.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a source with a custom request timeout.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NewsdeskError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            api_token: None,
        })
    }

    /// Send a bearer token with each request.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// The endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.api_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| NewsdeskError::Config(format!("Invalid API token: {}", e)))?,
            );
        }
        Ok(headers)
    }
}

impl CatalogSource for HttpCatalogSource {
    fn load(&self) -> Result<Vec<Category>> {
        let response = self
            .client
            .get(&self.url)
            .headers(self.build_headers()?)
            .send()
            .map_err(|e| NewsdeskError::Http(format!("Request to {} failed: {}", self.url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(NewsdeskError::Http(format!(
                "Failed to fetch categories ({}): {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .map_err(|e| NewsdeskError::Http(format!("Failed to read response body: {}", e)))?;

        parse_catalog_body(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Loads the catalog from a JSON file.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> Result<Vec<Category>> {
        let body = fs::read_to_string(&self.path).map_err(|source| NewsdeskError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_catalog_body(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_wrapped_and_bare_bodies() {
        let wrapped = r#"{"categories": [{"category_id": 1, "name": "A", "slug": "a"}]}"#;
        assert_eq!(parse_catalog_body(wrapped).unwrap().len(), 1);

        let bare = r#"[{"category_id": 1, "name": "A", "slug": "a"},
                       {"category_id": 2, "name": "B", "slug": "b"}]"#;
        assert_eq!(parse_catalog_body(bare).unwrap().len(), 2);

        assert!(parse_catalog_body("not json").is_err());
    }

    #[test]
    fn test_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"categories": [
                {"category_id": 10, "name": "Parliament", "slug": "parliament", "parent": "politics"}
            ]}"#,
        )
        .unwrap();

        let source = FileCatalogSource::new(file.path());
        let catalog = source.load_catalog(&GroupResolver::new()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.stats().source, file.path().display().to_string());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = FileCatalogSource::new("/nonexistent/catalog.json");
        match source.load() {
            Err(NewsdeskError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/catalog.json"))
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
