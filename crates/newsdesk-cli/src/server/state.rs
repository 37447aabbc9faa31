//! Application state for the web server.

use std::sync::Arc;

use newsdesk::Catalog;

/// Shared application state.
///
/// Only the catalog is shared. Selections arrive with each request and each
/// handler builds its own engine, so there is nothing to lock.
#[derive(Clone)]
pub struct AppState {
    /// The catalog loaded at startup.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}
