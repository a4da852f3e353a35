//! Per-archive extraction steps.
//!
//! Each archive goes through the same sequence:
//!
//! 1. [`plan`]: pick the output directory and the tool command for its extension
//! 2. [`ensure_dir`]: create the output directory
//! 3. [`ExtractionExecutor`]: run the tool and classify how it exited
//! 4. [`OutcomeHandler`]: delete the archive on success, report on failure
//!
//! Output directories are never removed, even after a failed extraction,
//! so partial results stay available for inspection.

mod executor;
mod outcome;
mod plan;
mod prepare;

pub use executor::{ExtractionExecutor, ExtractionOutcome};
pub use outcome::{ItemStatus, OutcomeHandler};
pub use plan::{ExtractionPlan, Tool, ToolTable, output_dir, plan};
pub use prepare::ensure_dir;
