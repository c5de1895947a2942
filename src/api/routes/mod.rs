//! Route handlers, one module per resource.

pub mod dashboard;
pub mod health;
