//! Input shapes produced by the content-generation service.
//!
//! These are deserialized at the boundary and only checked for what the
//! builders need; anything malformed beyond that is rejected by `serde`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizData {
    pub title: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "MCQ")]
    Mcq,
    Short,
    Long,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestQuestion {
    pub id: u32,
    pub text: String,
    pub marks: f64,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl TestQuestion {
    /// Options to print under the question; empty for written-answer questions.
    pub fn printable_options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSection {
    pub section_title: String,
    pub questions: Vec<TestQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceLink {
    pub title: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestPaper {
    pub title: String,
    pub duration: String,
    pub total_marks: f64,
    pub sections: Vec<TestSection>,
    #[serde(default)]
    pub sources: Vec<SourceLink>,
}

/// Prints whole marks without a fractional part (`5`, but `2.5`).
pub(crate) fn format_marks(marks: f64) -> String {
    if marks.fract() == 0.0 && marks.abs() < 1e15 {
        format!("{}", marks as i64)
    } else {
        format!("{}", marks)
    }
}
