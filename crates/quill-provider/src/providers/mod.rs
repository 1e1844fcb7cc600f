//! Concrete provider adapters
//!
//! This module contains implementations of the ModelProvider trait for
//! external model services.

#[cfg(feature = "googleai")]
pub mod googleai;

#[cfg(feature = "googleai")]
pub use googleai::GoogleAiProvider;
