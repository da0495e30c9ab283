//! Platform-agnostic building blocks: loading, filtering, aggregation and scales.

pub mod aggregate;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod filters;
pub mod format;
pub mod palette;
pub mod platform;
pub mod scale;
