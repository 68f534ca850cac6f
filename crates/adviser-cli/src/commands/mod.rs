//! CLI commands

pub mod build_crd;
pub mod query_versions;
