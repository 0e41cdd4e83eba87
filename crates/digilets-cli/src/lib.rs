//! DigiLeTs CLI crate
//!
//! Purpose:
//! - Provide a CLI-first interface to the DigiLeTs handwriting corpus tooling.
//! - Expose user-facing commands to scaffold workspaces, inspect recordings,
//!   export preprocessed datasets, summarize pen dynamics, and serve a minimal
//!   visualization UI backed by simple JSON endpoints.
//!
//! Public responsibilities (library view):
//! - Re-export the primary CLI entry (DigiletsCli) for integration in binary
//!   and testing contexts.
//! - Expose command modules as a library so they can be invoked
//!   programmatically in tests or downstream automation if desired.
//!
//! Major commands (see [commands]):
//! - init: scaffold a workspace (digilets.toml, data/, exports/, sample data).
//! - inspect: report on the workspace, the corpus, or a single recording file.
//! - export: run the preprocessing pipeline over the corpus and write a
//!   training dataset (JSON or bincode).
//! - dynamics: aggregate velocity and pressure curves for one symbol.
//! - viz: serve a minimal SPA (static files) and JSON endpoints
//!   (/api/health, /api/list, /api/trajectories) or export a symbol grid as SVG.
//!
//! Integration points:
//! - digilets_format: line classification and trajectory parsing.
//! - digilets_pipeline: augmentation, resampling, labeling, dynamics, grids.
//!
//! Notes:
//! - The binary (src/main.rs) wires up logging and argument parsing, calling
//!   DigiletsCli::execute().
//! - The library surface re-exports command modules to support integration
//!   testing without invoking an external process.

pub mod commands;
pub mod config;
pub mod error;
pub mod workspace;

pub use commands::DigiletsCli;
