//! Scrapeless Core - Shared library for the Scrapeless actor CLI
//!
//! This library provides the core functionality for scaffolding actor projects
//! from templates and for building/running an actor project locally. It is
//! designed so the CLI binary stays a thin flag-parsing layer on top.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template registry, name validation, archive
//!   fetching/materialization, toolchain detection and execution
//! - **Layer 2: Workflow Orchestration** - `TemplatePrompt` trait and the
//!   `interactive_create` flow for custom UIs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scrapeless_core::templates;
//!
//! let project = templates::create("golang-template", "my-actor", Path::new(".")).await?;
//! println!("created {} ({})", project.path.display(), project.language);
//! ```

pub mod error;
pub mod project;
pub mod prompt;
pub mod registry;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::Error;
pub use project::ProjectName;
pub use prompt::{interactive_create, TemplatePrompt};
pub use registry::{Language, Template, TemplateEntry};
pub use runtime::{auto_run, Toolchain};
pub use templates::{create, MaterializedProject};

/// Default folder name for a generated actor project
pub const DEFAULT_ACTOR_NAME: &str = "my-actor";
