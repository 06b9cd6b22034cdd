use crate::LayoutError;
use edumind_document::ExportKind;
use edumind_types::{PageGeometry, TextStyle};
use serde::{Deserialize, Serialize};

/// Font and spacing for one kind of block.
///
/// All lengths are in the geometry's unit; `size` is in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockStyle {
    pub size: f32,
    pub bold: bool,
    /// Cursor advance after each wrapped line.
    pub line_height: f32,
    /// Extra space added after the block.
    pub gap_after: f32,
    /// Extra space added before the block unless it opens a page. Not
    /// applied to option lists, which always follow their item.
    pub gap_before: f32,
    /// Horizontal offset from the left margin.
    pub indent: f32,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            size: 11.0,
            bold: false,
            line_height: 7.0,
            gap_after: 0.0,
            gap_before: 0.0,
            indent: 0.0,
        }
    }
}

impl BlockStyle {
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            bold: self.bold,
            size: self.size,
        }
    }
}

/// Placement of the document heading on the first page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderSettings {
    /// Baseline of the first title line.
    pub top: f32,
    pub title: BlockStyle,
    pub subtitle: BlockStyle,
    /// Distance from the last header baseline to the rule.
    pub rule_gap: f32,
    /// Minimum distance from the header (or its rule) to the first body line.
    pub body_gap: f32,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            top: 20.0,
            title: BlockStyle {
                size: 22.0,
                line_height: 8.0,
                ..Default::default()
            },
            subtitle: BlockStyle {
                size: 10.0,
                line_height: 7.0,
                ..Default::default()
            },
            rule_gap: 5.0,
            body_gap: 5.0,
        }
    }
}

/// Where right-hand item tags (marks) go.
///
/// Items carrying a side label wrap `reserve` narrower; the label is drawn at
/// `left_margin + usable_width - reserve + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SideLabelSettings {
    pub reserve: f32,
    pub offset: f32,
    pub size: f32,
}

impl Default for SideLabelSettings {
    fn default() -> Self {
        Self {
            reserve: 20.0,
            offset: 15.0,
            size: 11.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleSheet {
    pub section_heading: BlockStyle,
    pub item: BlockStyle,
    /// Style of each option; `gap_after` is applied once after the whole list.
    pub option: BlockStyle,
    pub answer_label: BlockStyle,
    pub answer_text: BlockStyle,
    /// Style of the explanation; its `gap_after` closes the answer block.
    pub explanation: BlockStyle,
}

impl StyleSheet {
    /// Test papers: regular item text, tighter option gaps, space between sections.
    pub fn test_paper() -> Self {
        let base = Self::default();
        Self {
            section_heading: BlockStyle {
                gap_before: 5.0,
                ..base.section_heading
            },
            item: BlockStyle {
                bold: false,
                ..base.item
            },
            option: BlockStyle {
                gap_after: 5.0,
                ..base.option
            },
            ..base
        }
    }

    /// Marking schemes: compact headings and 10pt answer labels.
    pub fn marking_scheme() -> Self {
        let base = Self::default();
        Self {
            section_heading: BlockStyle {
                line_height: 8.0,
                ..base.section_heading
            },
            answer_label: BlockStyle {
                size: 10.0,
                line_height: 5.0,
                ..base.answer_label
            },
            ..base
        }
    }

    /// The largest line advance of any block style.
    pub fn tallest_line(&self) -> f32 {
        self.named()
            .iter()
            .map(|(_, style)| style.line_height)
            .fold(0.0, f32::max)
    }

    fn named(&self) -> [(&'static str, &BlockStyle); 6] {
        [
            ("sectionHeading", &self.section_heading),
            ("item", &self.item),
            ("option", &self.option),
            ("answerLabel", &self.answer_label),
            ("answerText", &self.answer_text),
            ("explanation", &self.explanation),
        ]
    }
}

impl Default for StyleSheet {
    /// Quiz papers and answer keys.
    fn default() -> Self {
        Self {
            section_heading: BlockStyle {
                size: 14.0,
                bold: true,
                line_height: 10.0,
                ..Default::default()
            },
            item: BlockStyle {
                size: 11.0,
                bold: true,
                line_height: 7.0,
                gap_after: 5.0,
                ..Default::default()
            },
            option: BlockStyle {
                size: 11.0,
                line_height: 6.0,
                gap_after: 6.0,
                indent: 5.0,
                ..Default::default()
            },
            answer_label: BlockStyle {
                size: 11.0,
                bold: true,
                line_height: 6.0,
                ..Default::default()
            },
            answer_text: BlockStyle {
                size: 10.0,
                line_height: 5.0,
                ..Default::default()
            },
            explanation: BlockStyle {
                size: 10.0,
                line_height: 5.0,
                gap_after: 8.0,
                ..Default::default()
            },
        }
    }
}

/// Everything the layout engine needs besides the document and a measurer.
///
/// Defaults reproduce the A4 export look of the web application.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub geometry: PageGeometry,
    pub header: HeaderSettings,
    /// Quiz papers and answer keys, and models without an export kind.
    pub styles: StyleSheet,
    pub test_paper_styles: StyleSheet,
    pub marking_scheme_styles: StyleSheet,
    pub side_label: SideLabelSettings,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),
            header: HeaderSettings::default(),
            styles: StyleSheet::default(),
            test_paper_styles: StyleSheet::test_paper(),
            marking_scheme_styles: StyleSheet::marking_scheme(),
            side_label: SideLabelSettings::default(),
        }
    }
}

impl LayoutConfig {
    pub fn styles_for(&self, kind: Option<ExportKind>) -> &StyleSheet {
        match kind {
            Some(ExportKind::TestQuestions) => &self.test_paper_styles,
            Some(ExportKind::MarkingScheme) => &self.marking_scheme_styles,
            Some(ExportKind::QuizQuestions | ExportKind::QuizAnswerKey) | None => &self.styles,
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let g = &self.geometry;
        if !(g.page_width > 0.0 && g.page_height > 0.0) {
            return Err(LayoutError::Config(format!(
                "page size {}x{} is not positive",
                g.page_width, g.page_height
            )));
        }
        for page_index in [0, 1] {
            if g.top_margin_for(page_index) >= g.content_bottom() {
                return Err(LayoutError::Config(format!(
                    "top margin {} leaves no body area above {}",
                    g.top_margin_for(page_index),
                    g.content_bottom()
                )));
            }
        }
        let sheets = [
            ("styles", &self.styles),
            ("testPaperStyles", &self.test_paper_styles),
            ("markingSchemeStyles", &self.marking_scheme_styles),
        ];
        let body = sheets.iter().flat_map(|(sheet, styles)| {
            styles
                .named()
                .into_iter()
                .map(move |(name, style)| (format!("{}.{}", sheet, name), style))
        });
        let header = [
            ("header.title".to_string(), &self.header.title),
            ("header.subtitle".to_string(), &self.header.subtitle),
        ];
        for (name, style) in body.chain(header) {
            if !(style.line_height > 0.0) || style.gap_after < 0.0 || style.gap_before < 0.0 {
                return Err(LayoutError::Config(format!(
                    "style '{}' needs a positive line height and non-negative gaps",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_export_kind_gets_its_own_sheet() {
        let config = LayoutConfig::default();
        assert!(config.styles_for(Some(ExportKind::QuizQuestions)).item.bold);
        assert!(!config.styles_for(Some(ExportKind::TestQuestions)).item.bold);
        assert_eq!(config.styles_for(Some(ExportKind::TestQuestions)).option.gap_after, 5.0);
        assert_eq!(config.styles_for(Some(ExportKind::MarkingScheme)).answer_label.size, 10.0);
        assert_eq!(config.styles_for(None), &config.styles);
    }

    #[test]
    fn negative_gap_in_any_sheet_is_rejected() {
        let mut config = LayoutConfig::default();
        config.marking_scheme_styles.section_heading.gap_before = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("markingSchemeStyles.sectionHeading"), "{}", err);
    }

    #[test]
    fn tallest_line_spans_all_block_styles() {
        assert_eq!(StyleSheet::default().tallest_line(), 10.0);
        assert_eq!(StyleSheet::marking_scheme().tallest_line(), 8.0);
    }
}
