use crate::error::PipelineError;
use edumind_document::{BuildMode, BuildOptions, ContentError, ContentSource, DocumentModel, ExportKind, QuizData, TestPaper};
use std::fs;
use std::io;
use std::path::Path;

/// Which input shape a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Quiz,
    Test,
}

/// A loaded quiz or test paper.
#[derive(Debug, Clone, PartialEq)]
pub enum StudyMaterial {
    Quiz(QuizData),
    Test(TestPaper),
}

impl StudyMaterial {
    pub fn from_json_str(kind: InputKind, source: &str) -> Result<Self, PipelineError> {
        Ok(match kind {
            InputKind::Quiz => StudyMaterial::Quiz(serde_json::from_str(source)?),
            InputKind::Test => StudyMaterial::Test(serde_json::from_str(source)?),
        })
    }

    pub fn load<P: AsRef<Path>>(kind: InputKind, path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read input from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json_str(kind, &source)
    }

    fn as_source(&self) -> &dyn ContentSource {
        match self {
            StudyMaterial::Quiz(quiz) => quiz,
            StudyMaterial::Test(test) => test,
        }
    }
}

impl ContentSource for StudyMaterial {
    fn title(&self) -> &str {
        self.as_source().title()
    }

    fn export_kind(&self, mode: BuildMode) -> ExportKind {
        self.as_source().export_kind(mode)
    }

    fn build(&self, mode: BuildMode, options: &BuildOptions) -> Result<DocumentModel, ContentError> {
        self.as_source().build(mode, options)
    }
}
