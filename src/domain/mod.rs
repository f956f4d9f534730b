//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `survey` - Question catalog, answer accumulator, flow controller, scoring

pub mod foundation;
pub mod survey;
