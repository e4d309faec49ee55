//! CLI command implementations

pub mod definition;
pub mod export;
pub mod paths;

pub use definition::{Cli, Commands};
