//! Export pipeline orchestration.
//!
//! - [`PipelineBuilder`]: Fluent builder for constructing an export pipeline
//! - [`ExportPipeline`]: build, layout, render and save for one content source
//! - [`export_batch`]: many inputs at once, in parallel with `rayon-executor`
//!
//! # Example
//!
//! ```ignore
//! use edumind_print::{BuildMode, PipelineBuilder};
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_config_file("layout.json")?
//!     .build()?;
//!
//! pipeline.export(&quiz, BuildMode::Key, out_dir)?;
//! ```

mod builder;
pub(crate) mod concurrency;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use concurrency::export_batch;
#[cfg(feature = "rayon-executor")]
pub use concurrency::configure_rayon_pool;
pub use orchestrator::{ExportOutcome, ExportPipeline, SharedMeasurer};
