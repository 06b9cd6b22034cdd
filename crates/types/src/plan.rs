//! The paginated output of the layout engine.
//!
//! A `PagePlan` is a list of pages, each holding text lines that have already
//! been positioned. Renderers only draw what is here; no layout decisions are
//! left to them.

use crate::geometry::PageGeometry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub bold: bool,
    /// Font size in points.
    pub size: f32,
}

impl TextStyle {
    pub fn regular(size: f32) -> Self {
        Self { bold: false, size }
    }
}

/// What a positioned line represents in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    Title,
    Subtitle,
    Aside,
    SectionHeading,
    /// A wrapped line of a numbered item; `first` marks the line carrying the number.
    ItemBody { first: bool },
    SideLabel,
    /// A wrapped line of one option; `first` marks the line carrying the letter label.
    Option { ordinal: usize, first: bool },
    AnswerLabel,
    AnswerBody,
    Explanation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedLine {
    pub x: f32,
    /// Baseline of the line.
    pub y: f32,
    pub text: String,
    pub style: TextStyle,
    pub role: LineRole,
    /// Index of the source block in the document model, if any.
    pub block: Option<usize>,
}

/// A horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
}

/// Document heading drawn above the body area of the first page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderBand {
    pub lines: Vec<PositionedLine>,
    pub rule: Option<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub header: Option<HeaderBand>,
    pub lines: Vec<PositionedLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePlan {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl PagePlan {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All body lines in reading order, paired with their page index.
    pub fn body_lines(&self) -> impl Iterator<Item = (usize, &PositionedLine)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(index, page)| page.lines.iter().map(move |line| (index, line)))
    }
}
