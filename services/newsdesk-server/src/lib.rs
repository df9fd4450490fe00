//! Newsdesk - relevance search for a headless-CMS news site
//!
//! Aggregates articles, opinion pieces and external links from the
//! CMS content API, scores them against a free-text query, filters,
//! sorts and paginates the result.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - store (content API client, payload normalization)
//!   - search (scoring, filtering, sorting, pagination)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware, error mapping
//!
//! # Key Features
//!
//! - Additive lexical relevance scoring with fixed field weights
//! - Per-domain category rules behind one trait
//! - Concurrent multi-source fetches; failing sources degrade to empty
//! - Engine-side filtering and pagination (upstream paging ignored)

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{NewsdeskError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;
