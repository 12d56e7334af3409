//! Local build/run lifecycle for an actor project
//!
//! This module provides:
//! - Toolchain detection from well-known marker files
//! - The per-language build/run command table
//! - `auto_run`: build the project in a directory, then run it, streaming
//!   child output and propagating the child's exit code

pub mod detect;
pub mod toolchain;

pub use detect::detect_language;
pub use toolchain::{for_language, run_toolchain, Toolchain};

use crate::error::Error;
use colored::Colorize;
use std::path::Path;

/// Detect the project in `dir` and run its toolchain's build and run steps.
///
/// Steps are sequential and blocking: a non-zero build exit aborts with
/// `BuildFailed` and the run step is never reached. On success the run step's
/// exit code (zero) is returned; a non-zero run exit surfaces as `RunFailed`.
/// No step is retried. The tool imposes no timeout of its own, and children
/// share the foreground process group so an interrupt reaches them directly.
pub async fn auto_run(dir: &Path) -> Result<i32, Error> {
    let language = detect_language(dir)?;
    let toolchain = for_language(language);

    println!(
        "{} {} project in {}",
        "Detected".cyan().bold(),
        language,
        dir.display()
    );

    run_toolchain(toolchain, dir).await
}
