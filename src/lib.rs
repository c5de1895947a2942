//! # Commissioner
//!
//! A fantasy league dashboard aggregator with caching and graceful fallback.
//!
//! ## Architecture
//!
//! - **models**: Dashboard wire types (league, matchups, quick stats)
//! - **provider**: Upstream API client and normalization pipeline
//! - **cache**: TTL-based in-memory dashboard cache
//! - **fallback**: Synthetic dashboard served when the provider fails
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod cache;
pub mod config;
pub mod fallback;
pub mod models;
pub mod provider;

pub use models::*;
