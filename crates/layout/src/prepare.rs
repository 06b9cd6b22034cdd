//! Measurement pass: turns each block into wrapped, styled lines.
//!
//! Every block is measured before anything is written, so an adapter failure
//! aborts the layout before a single page exists.

use crate::config::{BlockStyle, LayoutConfig};
use crate::measure::TextMeasurer;
use crate::LayoutError;
use edumind_document::{option_label, Block, DocumentModel};
use edumind_types::{LineRole, TextStyle};

/// A wrapped line waiting for a page position.
#[derive(Debug, Clone)]
pub(crate) struct PendingLine {
    pub x: f32,
    pub text: String,
    pub style: TextStyle,
    pub role: LineRole,
    /// Cursor advance after this line.
    pub advance: f32,
    /// Tag drawn on the same baseline at its own x.
    pub side_label: Option<(f32, String, TextStyle)>,
}

/// Lines that must land on the same page when at all possible.
#[derive(Debug, Clone, Default)]
pub(crate) struct Unit {
    pub lines: Vec<PendingLine>,
}

impl Unit {
    pub fn extent(&self) -> f32 {
        self.lines.iter().map(|l| l.advance).sum()
    }

    pub fn first_advance(&self) -> f32 {
        self.lines.first().map(|l| l.advance).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PreparedKind {
    Heading,
    Item,
    Options,
    Answer,
}

#[derive(Debug, Clone)]
pub(crate) struct PreparedBlock {
    pub block: usize,
    pub kind: PreparedKind,
    /// One unit per block, except option lists which get one per option.
    pub units: Vec<Unit>,
    pub gap_before: f32,
    pub gap_after: f32,
}

impl PreparedBlock {
    pub fn extent(&self) -> f32 {
        self.units.iter().map(Unit::extent).sum()
    }

    pub fn first_advance(&self) -> f32 {
        self.units.first().map(Unit::first_advance).unwrap_or(0.0)
    }
}

struct LinePreparer<'a, M: TextMeasurer + ?Sized> {
    measurer: &'a M,
    config: &'a LayoutConfig,
}

impl<M: TextMeasurer + ?Sized> LinePreparer<'_, M> {
    fn wrapped(
        &self,
        lines: &mut Vec<PendingLine>,
        text: &str,
        style: &BlockStyle,
        width: f32,
        role: impl Fn(bool) -> LineRole,
    ) -> Result<(), LayoutError> {
        let geometry = &self.config.geometry;
        let mut wrapped = self.measurer.wrap(text, width, style.size, style.bold)?;
        if wrapped.is_empty() {
            wrapped.push(String::new());
        }
        for (i, text) in wrapped.into_iter().enumerate() {
            lines.push(PendingLine {
                x: geometry.left_margin + style.indent,
                text,
                style: style.text_style(),
                role: role(i == 0),
                advance: style.line_height,
                side_label: None,
            });
        }
        Ok(())
    }

    fn prepare(&self, model: &DocumentModel, index: usize, block: &Block) -> Result<PreparedBlock, LayoutError> {
        let geometry = &self.config.geometry;
        let styles = self.config.styles_for(model.export_kind());
        let usable = geometry.usable_width();

        let prepared = match block {
            Block::SectionHeading { text } => {
                let mut unit = Unit::default();
                let style = &styles.section_heading;
                self.wrapped(&mut unit.lines, text, style, usable - style.indent, |_| {
                    LineRole::SectionHeading
                })?;
                PreparedBlock {
                    block: index,
                    kind: PreparedKind::Heading,
                    units: vec![unit],
                    gap_before: style.gap_before,
                    gap_after: style.gap_after,
                }
            }
            Block::NumberedItem {
                index: number,
                body_text,
                side_label,
            } => {
                let style = &styles.item;
                let reserve = if side_label.is_some() {
                    self.config.side_label.reserve
                } else {
                    0.0
                };
                let text = model.numbering().format(*number, body_text);
                let mut unit = Unit::default();
                self.wrapped(&mut unit.lines, &text, style, usable - style.indent - reserve, |first| {
                    LineRole::ItemBody { first }
                })?;
                if let (Some(label), Some(first)) = (side_label, unit.lines.first_mut()) {
                    let settings = &self.config.side_label;
                    let x = geometry.left_margin + usable - settings.reserve + settings.offset;
                    first.side_label = Some((x, label.clone(), TextStyle::regular(settings.size)));
                }
                PreparedBlock {
                    block: index,
                    kind: PreparedKind::Item,
                    units: vec![unit],
                    gap_before: style.gap_before,
                    gap_after: style.gap_after,
                }
            }
            Block::OptionList {
                options,
                correct_index,
            } => {
                let units = options
                    .iter()
                    .enumerate()
                    .map(|(ordinal, option)| {
                        let label = option_label(ordinal).ok_or_else(|| {
                            LayoutError::InvalidContent(format!("option {} has no letter label", ordinal))
                        })?;
                        let mut style = styles.option;
                        if *correct_index == Some(ordinal) {
                            style.bold = true;
                        }
                        let mut unit = Unit::default();
                        self.wrapped(
                            &mut unit.lines,
                            &format!("{}) {}", label, option),
                            &style,
                            usable - style.indent,
                            |first| LineRole::Option { ordinal, first },
                        )?;
                        Ok(unit)
                    })
                    .collect::<Result<Vec<_>, LayoutError>>()?;
                PreparedBlock {
                    block: index,
                    kind: PreparedKind::Options,
                    units,
                    gap_before: 0.0,
                    gap_after: styles.option.gap_after,
                }
            }
            Block::AnswerBlock {
                label,
                answer_text,
                explanation_text,
            } => {
                let mut unit = Unit::default();
                let label_style = &styles.answer_label;
                self.wrapped(&mut unit.lines, label, label_style, usable - label_style.indent, |_| {
                    LineRole::AnswerLabel
                })?;
                if !answer_text.trim().is_empty() {
                    let style = &styles.answer_text;
                    self.wrapped(&mut unit.lines, answer_text, style, usable - style.indent, |_| {
                        LineRole::AnswerBody
                    })?;
                }
                if let Some(explanation) = explanation_text.as_deref().filter(|e| !e.trim().is_empty()) {
                    let style = &styles.explanation;
                    self.wrapped(&mut unit.lines, explanation, style, usable - style.indent, |_| {
                        LineRole::Explanation
                    })?;
                }
                PreparedBlock {
                    block: index,
                    kind: PreparedKind::Answer,
                    units: vec![unit],
                    gap_before: label_style.gap_before,
                    gap_after: styles.explanation.gap_after,
                }
            }
        };
        Ok(prepared)
    }
}

pub(crate) fn prepare_blocks<M: TextMeasurer + ?Sized>(
    measurer: &M,
    config: &LayoutConfig,
    model: &DocumentModel,
) -> Result<Vec<PreparedBlock>, LayoutError> {
    let preparer = LinePreparer { measurer, config };
    model
        .blocks()
        .iter()
        .enumerate()
        .map(|(index, block)| preparer.prepare(model, index, block))
        .collect()
}
