//! Export run orchestration.
//!
//! One run is a fixed sequence: authenticate, reset the output root,
//! export sponsor logos, export sponsor-news images. Stages run
//! strictly in order; there is no checkpointing, every run rebuilds
//! the tree from scratch.

mod runner;
mod types;

pub use runner::{export_with, run};
pub use types::{RunOutcome, RunReport, RunnerError, SkipReason};
