//! Shared utilities for quill-rs
//!
//! This crate provides common functionality used across the quill-rs
//! workspace, including logging setup and settings namespace helpers.

pub mod config;
pub mod logging;

pub use config::{SETTINGS_ROOT, provider_namespace};
pub use logging::{init_tracing, init_tracing_json};
