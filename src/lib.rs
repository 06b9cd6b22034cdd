//! Printable exports for generated study material.
//!
//! A quiz or test paper is mapped to a document model, laid out into pages
//! and rendered to PDF:
//!
//! ```ignore
//! use edumind_print::{BuildMode, PipelineBuilder, StudyMaterial, InputKind};
//!
//! let quiz = StudyMaterial::load(InputKind::Quiz, "quiz.json")?;
//! let pipeline = PipelineBuilder::new().build()?;
//! pipeline.export(&quiz, BuildMode::Paper, "out".as_ref())?;
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod pipeline;

pub use config::load_layout_config;
pub use error::PipelineError;
pub use input::{InputKind, StudyMaterial};
pub use pipeline::{ExportOutcome, ExportPipeline, PipelineBuilder, SharedMeasurer};

pub use edumind_document::{
    BuildMode, BuildOptions, ContentSource, DocumentModel, ExportKind, QuizData, TestPaper, derive_filename,
};
pub use edumind_layout::{LayoutConfig, LayoutEngine, StandardFontMetrics, TextMeasurer};
pub use edumind_render_core::{DocumentRenderer, RenderedDocument};
pub use edumind_render_lopdf::LopdfRenderer;
pub use edumind_types::{LengthUnit, PageGeometry, PagePlan};
