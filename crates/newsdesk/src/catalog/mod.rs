//! Category catalog: records, main groups, group resolution and sources.
//!
//! A catalog is loaded once per session and never changes afterwards.
//!
//! ```no_run
//! use newsdesk::catalog::{CatalogSource, GroupResolver, HttpCatalogSource};
//!
//! let source = HttpCatalogSource::new("https://cms.example.com/api/categories").unwrap();
//! let catalog = source.load_catalog(&GroupResolver::new()).unwrap();
//! println!("{} categories", catalog.len());
//! ```

#[allow(clippy::module_inception)]
mod catalog;
mod category;
mod group;
mod resolver;
mod source;

pub use catalog::{Catalog, CatalogStats};
pub use category::{CatalogResponse, Category, CategoryId};
pub use group::MainGroup;
pub use resolver::{GroupResolver, SlugRule};
pub use source::{
    CatalogSource, DEFAULT_TIMEOUT_SECS, FileCatalogSource, HttpCatalogSource, parse_catalog_body,
};
