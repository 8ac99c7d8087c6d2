// logtally - ui/mod.rs
//
// Presentation layer: text rendering of pipeline results.

pub mod report;
