use edumind_document::ContentError;
use edumind_layout::LayoutError;
use edumind_render_core::RenderError;
use std::path::PathBuf;
use thiserror::Error;

/// A comprehensive error type for the entire export pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid content: {0}")]
    Content(#[from] ContentError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "Output '{}' of '{}' is already written by '{}'",
        .path.display(),
        .input.display(),
        .claimed_by.display()
    )]
    DuplicateOutput {
        path: PathBuf,
        input: PathBuf,
        claimed_by: PathBuf,
    },
}
