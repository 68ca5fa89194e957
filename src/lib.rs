//! lutviz - color LUT grid inspection
//!
//! Builds a coarse 3-D lookup-table grid, records color-checker samples into
//! it and reports which vertices each sample depends on.
//! This library exposes modules for the CLI and integration testing.

pub mod error;
pub mod models;
pub mod report;
pub mod services;
