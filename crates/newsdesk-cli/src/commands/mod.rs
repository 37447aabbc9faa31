//! CLI command implementations.

pub mod classify;
pub mod filter;
pub mod groups;
pub mod serve;
pub mod status;

use std::sync::Arc;

use newsdesk::{Catalog, CatalogLocation, NewsdeskConfig};

/// Load the catalog from `--catalog`, falling back to the environment.
pub fn load_catalog(catalog: Option<&str>) -> Result<Arc<Catalog>, Box<dyn std::error::Error>> {
    let mut config = NewsdeskConfig::from_env()?;
    if let Some(location) = catalog {
        config = config.with_catalog(CatalogLocation::parse(location));
    }

    let catalog = config.load_catalog()?;
    tracing::debug!(
        categories = catalog.len(),
        ungrouped = catalog.stats().ungrouped,
        fingerprint = catalog.fingerprint(),
        "catalog ready"
    );
    Ok(Arc::new(catalog))
}
