//! Core domain types and utilities for integration-loader.
//!
//! This crate provides the integration catalogue (which external services can
//! be loaded and which backend endpoint serves each of them) and the shared
//! error-handling foundation used by the other crates.

pub mod error;
pub mod integration;

pub use error::Result;
pub use integration::{IntegrationType, UnknownIntegration};
