//! Command implementations for the bootvars CLI

pub mod bundle;
pub mod cache_buster;
pub mod completions;
pub mod routes;
pub mod version;
