use crate::builder::ExportKind;
use crate::error::ContentError;
use serde::{Deserialize, Serialize};

/// Fewest options an option list may carry.
pub const MIN_OPTIONS: usize = 2;
/// Most options an option list may carry; one per letter `A`..=`Z`.
pub const MAX_OPTIONS: usize = 26;

/// The letter label of an option at `ordinal` (`0 -> 'A'`).
pub fn option_label(ordinal: usize) -> Option<char> {
    if ordinal < MAX_OPTIONS {
        Some((b'A' + ordinal as u8) as char)
    } else {
        None
    }
}

/// One structural unit of a document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    SectionHeading {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    NumberedItem {
        index: u32,
        body_text: String,
        side_label: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    OptionList {
        options: Vec<String>,
        /// Only set for answer-revealing renderings.
        correct_index: Option<usize>,
    },
    #[serde(rename_all = "camelCase")]
    AnswerBlock {
        label: String,
        answer_text: String,
        explanation_text: Option<String>,
    },
}

impl Block {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::SectionHeading { .. } => "SectionHeading",
            Block::NumberedItem { .. } => "NumberedItem",
            Block::OptionList { .. } => "OptionList",
            Block::AnswerBlock { .. } => "AnswerBlock",
        }
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if let Block::OptionList {
            options,
            correct_index,
        } = self
        {
            if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()) {
                return Err(ContentError::invalid(format!(
                    "option list has {} options, expected between {} and {}",
                    options.len(),
                    MIN_OPTIONS,
                    MAX_OPTIONS
                )));
            }
            if let Some(correct) = correct_index {
                if *correct >= options.len() {
                    return Err(ContentError::invalid(format!(
                        "correct option {} is out of range for {} options",
                        correct,
                        options.len()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// How the number of a `NumberedItem` is printed in front of its body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Numbering {
    /// `Q3: body`
    #[default]
    Question,
    /// `3. body`
    Dotted,
}

impl Numbering {
    pub fn format(self, index: u32, body: &str) -> String {
        match self {
            Numbering::Question => format!("Q{}: {}", index, body),
            Numbering::Dotted => format!("{}. {}", index, body),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderStyle {
    pub centered_title: bool,
    /// Draw a horizontal rule under the header band.
    pub rule: bool,
}

/// Render-agnostic description of one exportable document.
///
/// Built once per export and never mutated afterwards: fields are private and
/// every `with_*` method consumes the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentModel {
    title: String,
    subtitle: Option<String>,
    aside: Option<String>,
    header: HeaderStyle,
    numbering: Numbering,
    export_kind: Option<ExportKind>,
    blocks: Vec<Block>,
}

impl DocumentModel {
    /// Creates a model, rejecting a blank title, an empty body, or a malformed block.
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Result<Self, ContentError> {
        let model = Self {
            title: title.into(),
            subtitle: None,
            aside: None,
            header: HeaderStyle::default(),
            numbering: Numbering::default(),
            export_kind: None,
            blocks,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_aside(mut self, aside: Option<String>) -> Self {
        self.aside = aside.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_header(mut self, header: HeaderStyle) -> Self {
        self.header = header;
        self
    }

    pub fn with_numbering(mut self, numbering: Numbering) -> Self {
        self.numbering = numbering;
        self
    }

    /// Tags the model with the export it renders, which selects its style sheet.
    pub fn with_export_kind(mut self, kind: ExportKind) -> Self {
        self.export_kind = Some(kind);
        self
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.title.trim().is_empty() {
            return Err(ContentError::invalid("document has no title"));
        }
        if self.blocks.is_empty() {
            return Err(ContentError::invalid("document has no blocks"));
        }
        for (index, block) in self.blocks.iter().enumerate() {
            block.validate().map_err(|ContentError::InvalidContent(msg)| {
                ContentError::invalid(format!("block {} ({}): {}", index, block.kind_name(), msg))
            })?;
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn aside(&self) -> Option<&str> {
        self.aside.as_deref()
    }

    pub fn header(&self) -> HeaderStyle {
        self.header
    }

    pub fn numbering(&self) -> Numbering {
        self.numbering
    }

    pub fn export_kind(&self) -> Option<ExportKind> {
        self.export_kind
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks of the given kind (see [`Block::kind_name`]).
    pub fn count_of(&self, kind: &str) -> usize {
        self.blocks.iter().filter(|b| b.kind_name() == kind).count()
    }
}
