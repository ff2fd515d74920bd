//! Validators for registries, attribute tables and built artifacts.

pub mod artifact;
pub mod registry;
pub mod tables;
