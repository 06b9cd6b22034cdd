//! Document model for printable study material.
//!
//! Domain objects (`QuizData`, `TestPaper`) are mapped into a `DocumentModel`
//! by a `ContentSource` in one of two `BuildMode`s. The model carries no
//! layout information; the layout engine turns it into pages.

mod builder;
mod error;
mod filename;
mod model;
mod source;

pub use builder::{BuildMode, BuildOptions, ContentSource, ExportKind};
pub use error::ContentError;
pub use filename::{derive_filename, sanitize_stem};
pub use model::{Block, DocumentModel, HeaderStyle, Numbering, MAX_OPTIONS, MIN_OPTIONS, option_label};
pub use source::{QuestionType, QuizData, QuizQuestion, SourceLink, TestPaper, TestQuestion, TestSection};
