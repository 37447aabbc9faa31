//! HTTP API over the classification engine.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
