//! API request handlers.

mod engine;
mod groups;

pub use engine::*;
pub use groups::*;
