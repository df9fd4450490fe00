//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the HTTP transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Documents, requests and responses
//! - **store**: Content store clients and payload normalization
//! - **search**: Scoring, filtering, sorting and pagination
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod store;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{NewsdeskError, Result};
pub use services::Services;
