// logtally - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app, or touch the filesystem directly.

pub mod export;
pub mod filter;
pub mod model;
pub mod parser;
pub mod summary;
