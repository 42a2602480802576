//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Please enter a valid Polymarket URL (got: {0:?})")]
    InvalidMarketUrl(String),
}
