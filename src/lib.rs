// logtally - lib.rs
//
// Library entry point, exposing the loading, aggregation, filtering and
// reporting pipeline for the binary and for integration tests.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
