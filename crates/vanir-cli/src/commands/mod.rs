//! CLI command implementations.

pub mod common;
pub mod submit;
pub mod targets;
pub mod version;
