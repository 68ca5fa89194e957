//! Shared grid shapes, config files and report helpers for the lutviz
//! integration tests.
//!
//! `grid_properties_test` never loads a config file or renders a report, so
//! the allows below keep it from warning about those helpers.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
