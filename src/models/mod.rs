//! Core data models for the dashboard service.
//!
//! Everything here is wire format: these structs serialize to the exact
//! JSON shape clients receive, camelCase keys included.

mod dashboard;
mod league;
mod matchup;
mod stats;
mod team;

pub use dashboard::*;
pub use league::*;
pub use matchup::*;
pub use stats::*;
pub use team::*;
