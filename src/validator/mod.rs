//! Validation subsystem
//!
//! # Design Principles
//!
//! - Mismatches accumulate as errors; validation never aborts on bad data
//! - Deterministic: identical (value, schema) inputs yield identical verdicts
//! - The async engine mirrors the sync recursion with strictly sequential awaits
//! - Validation does not mutate values or schemas

mod async_engine;
mod engine;
mod result;

pub use async_engine::validate_async;
pub use engine::{validate, SchemaValidator};
pub use result::ValidationResult;
