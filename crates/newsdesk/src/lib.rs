//! Newsdesk: category classification for a news CMS.
//!
//! Content is classified against a two-tier taxonomy: nine fixed main groups,
//! each holding several sub-categories. Authoring forms need exactly one main
//! group and one to four sub-categories; listing and sharing filters select
//! freely across groups.
//!
//! # Core Pieces
//!
//! - **Catalog**: immutable, loaded once, shared by reference
//! - **Selection**: owned by the caller, edit or filter mode by type
//! - **Engine**: pure queries and commands over a `(catalog, selection)` pair
//!
//! # Example
//!
//! ```no_run
//! use newsdesk::{Engine, MainGroup, NewsdeskConfig, Selection};
//!
//! let catalog = NewsdeskConfig::from_env()?.load_catalog()?;
//!
//! let selection = Selection::edit(Some(MainGroup::Politics));
//! let engine = Engine::new(&catalog, &selection);
//! for category in engine.sub_categories_for(MainGroup::Politics) {
//!     println!("{} disabled={}", category.name, engine.is_disabled(category.category_id));
//! }
//! # Ok::<(), newsdesk::NewsdeskError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod selection;
pub mod session;
pub mod submission;

pub use catalog::{Catalog, CatalogSource, Category, CategoryId, GroupResolver, MainGroup};
pub use config::{CatalogLocation, NewsdeskConfig};
pub use engine::{
    CategoryState, CommandResult, DisabledReason, Engine, GroupChange, GroupSummary, Toggle,
};
pub use error::{NewsdeskError, Result};
pub use selection::{EditSelection, FilterSelection, MAX_SUB_CATEGORIES, Selection};
pub use session::{ClassificationSession, Draft, Notice};
pub use submission::{FilterQuery, Submission};
