//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — available completion models (Gemini variants, custom ids)
//! - [`question::MarketQuestion`] — the canonical binary question of a run
//! - [`market_url::MarketUrl`] — a checked Polymarket URL
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod market_url;
pub mod model;
pub mod question;
pub mod string;
