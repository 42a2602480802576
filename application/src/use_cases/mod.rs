//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod fetch_trending;
pub mod run_analysis;
