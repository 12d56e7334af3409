//! Template fetching and materialization
//!
//! This module provides:
//! - Archive fetching from the template's source URL
//! - Materialization: staging-directory extraction with an atomic rename into
//!   the final destination, so a failed fetch never leaves a half-populated
//!   project behind

pub mod fetcher;
pub mod materializer;

pub use fetcher::TemplateFetcher;
pub use materializer::{create, materialize_archive, MaterializedProject};
