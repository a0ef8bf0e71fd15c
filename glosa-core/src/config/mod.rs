//! Configuration types.

pub mod compose_config;

pub use compose_config::ComposeConfig;
