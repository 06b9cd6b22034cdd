#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use edumind_print::{BuildMode, ContentSource, ExportOutcome, PipelineBuilder, PipelineError};
use lopdf::Document as LopdfDocument;
use std::path::Path;
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of one page (1-based), one drawn line per text line.
    pub fn page_text(&self, page_num: u32) -> String {
        pdf_assertions::extract_page_text(&self.doc, page_num)
    }
}

/// An export written into a fresh temporary directory.
pub struct ExportedPdf {
    pub dir: TempDir,
    pub outcome: ExportOutcome,
    pub pdf: GeneratedPdf,
}

/// Export `source` with the default pipeline and load the result back.
pub fn export_with_defaults<S: ContentSource>(source: &S, mode: BuildMode) -> Result<ExportedPdf, PipelineError> {
    export_with(PipelineBuilder::new(), source, mode)
}

pub fn export_with<S: ContentSource>(
    builder: PipelineBuilder,
    source: &S,
    mode: BuildMode,
) -> Result<ExportedPdf, PipelineError> {
    let dir = tempfile::tempdir()?;
    let pipeline = builder.build()?;
    let outcome = pipeline.export(source, mode, dir.path())?;
    let pdf = GeneratedPdf::from_path(&outcome.path).map_err(|e| PipelineError::Config(e.to_string()))?;
    Ok(ExportedPdf { dir, outcome, pdf })
}
