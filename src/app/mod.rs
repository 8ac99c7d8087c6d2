// logtally - app/mod.rs
//
// Application layer: orchestration of the load pipeline.
// Dependencies: core and platform layers.

pub mod load;
