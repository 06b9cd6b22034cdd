use crate::error::ContentError;
use crate::model::{Block, DocumentModel, HeaderStyle, Numbering};
use crate::source::{QuizData, TestPaper, format_marks};
use chrono::NaiveDate;
use serde::Serialize;

/// Which of the two complementary renderings to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    /// Questions and options, no answers.
    Paper,
    /// Answers and explanations only.
    Key,
}

/// The four printable exports, each with its own filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExportKind {
    QuizQuestions,
    QuizAnswerKey,
    TestQuestions,
    MarkingScheme,
}

impl ExportKind {
    pub fn suffix(self) -> &'static str {
        match self {
            ExportKind::QuizQuestions => "_Questions",
            ExportKind::QuizAnswerKey => "_AnswerKey",
            ExportKind::TestQuestions => "_Test_Questions",
            ExportKind::MarkingScheme => "_MarkingScheme",
        }
    }

    pub fn mode(self) -> BuildMode {
        match self {
            ExportKind::QuizQuestions | ExportKind::TestQuestions => BuildMode::Paper,
            ExportKind::QuizAnswerKey | ExportKind::MarkingScheme => BuildMode::Key,
        }
    }
}

/// Inputs to a build that do not come from the content itself.
///
/// The issue date is passed in rather than read from the clock so a build
/// stays a pure function of its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    pub brand: String,
    pub issued_on: Option<NaiveDate>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            brand: "EduMind AI".to_string(),
            issued_on: None,
        }
    }
}

impl BuildOptions {
    pub fn issued_on(mut self, date: NaiveDate) -> Self {
        self.issued_on = Some(date);
        self
    }
}

/// A domain object that can be turned into a document model.
pub trait ContentSource {
    fn title(&self) -> &str;

    fn export_kind(&self, mode: BuildMode) -> ExportKind;

    fn build(&self, mode: BuildMode, options: &BuildOptions) -> Result<DocumentModel, ContentError>;
}

fn require_title(title: &str, what: &str) -> Result<(), ContentError> {
    if title.trim().is_empty() {
        return Err(ContentError::invalid(format!("{} has no title", what)));
    }
    Ok(())
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl ContentSource for QuizData {
    fn title(&self) -> &str {
        &self.title
    }

    fn export_kind(&self, mode: BuildMode) -> ExportKind {
        match mode {
            BuildMode::Paper => ExportKind::QuizQuestions,
            BuildMode::Key => ExportKind::QuizAnswerKey,
        }
    }

    fn build(&self, mode: BuildMode, options: &BuildOptions) -> Result<DocumentModel, ContentError> {
        require_title(&self.title, "quiz")?;
        if self.questions.is_empty() {
            return Err(ContentError::invalid("quiz has no questions"));
        }

        let model = match mode {
            BuildMode::Paper => {
                let mut blocks = Vec::with_capacity(self.questions.len() * 2);
                for (i, q) in self.questions.iter().enumerate() {
                    blocks.push(Block::NumberedItem {
                        index: i as u32 + 1,
                        body_text: q.question.clone(),
                        side_label: None,
                    });
                    blocks.push(Block::OptionList {
                        options: q.options.clone(),
                        correct_index: None,
                    });
                }
                let subtitle = options.issued_on.map(|date| {
                    format!("{} Question Paper - {}", options.brand, date.format("%-m/%-d/%Y"))
                });
                DocumentModel::new(self.title.clone(), blocks)?
                    .with_subtitle(subtitle)
                    .with_numbering(Numbering::Question)
            }
            BuildMode::Key => {
                let blocks = self
                    .questions
                    .iter()
                    .enumerate()
                    .map(|(i, q)| Block::AnswerBlock {
                        label: format!("Q{} Correct Answer:", i + 1),
                        answer_text: q.correct_answer.clone(),
                        explanation_text: non_blank(&q.explanation)
                            .map(|e| format!("Explanation: {}", e)),
                    })
                    .collect();
                DocumentModel::new(format!("{} - Answer Key", self.title), blocks)?
            }
        };
        let model = model.with_export_kind(self.export_kind(mode));
        log::debug!(
            "Built {:?} model for quiz '{}' with {} blocks",
            mode,
            self.title,
            model.blocks().len()
        );
        Ok(model)
    }
}

impl ContentSource for TestPaper {
    fn title(&self) -> &str {
        &self.title
    }

    fn export_kind(&self, mode: BuildMode) -> ExportKind {
        match mode {
            BuildMode::Paper => ExportKind::TestQuestions,
            BuildMode::Key => ExportKind::MarkingScheme,
        }
    }

    fn build(&self, mode: BuildMode, _options: &BuildOptions) -> Result<DocumentModel, ContentError> {
        require_title(&self.title, "test paper")?;

        let mut blocks = Vec::new();
        for section in &self.sections {
            if section.questions.is_empty() {
                continue;
            }
            blocks.push(Block::SectionHeading {
                text: section.section_title.clone(),
            });
            for q in &section.questions {
                match mode {
                    BuildMode::Paper => {
                        blocks.push(Block::NumberedItem {
                            index: q.id,
                            body_text: q.text.clone(),
                            side_label: Some(format!("[{}]", format_marks(q.marks))),
                        });
                        let printable = q.printable_options();
                        if !printable.is_empty() {
                            blocks.push(Block::OptionList {
                                options: printable.to_vec(),
                                correct_index: None,
                            });
                        }
                    }
                    BuildMode::Key => blocks.push(Block::AnswerBlock {
                        label: format!("Q{} Answer:", q.id),
                        answer_text: q.answer.clone(),
                        explanation_text: q
                            .explanation
                            .as_deref()
                            .and_then(non_blank)
                            .map(|e| format!("Explanation: {}", e)),
                    }),
                }
            }
        }
        if blocks.is_empty() {
            return Err(ContentError::invalid("test paper has no questions"));
        }

        let header = HeaderStyle {
            centered_title: true,
            rule: true,
        };
        let model = match mode {
            BuildMode::Paper => DocumentModel::new(self.title.clone(), blocks)?
                .with_subtitle(Some(format!("Duration: {}", self.duration)))
                .with_aside(Some(format!("Max Marks: {}", format_marks(self.total_marks)))),
            BuildMode::Key => DocumentModel::new(format!("{} - Marking Scheme", self.title), blocks)?,
        };
        Ok(model
            .with_header(header)
            .with_numbering(Numbering::Dotted)
            .with_export_kind(self.export_kind(mode)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{QuestionType, QuizQuestion, TestQuestion, TestSection};

    fn quiz(n: usize) -> QuizData {
        QuizData {
            title: "Cell Biology".into(),
            questions: (0..n)
                .map(|i| QuizQuestion {
                    question: format!("Question {}", i + 1),
                    options: vec!["Nucleus".into(), "Ribosome".into(), "Golgi".into(), "Vacuole".into()],
                    correct_answer: "Ribosome".into(),
                    explanation: "Ribosomes synthesise proteins.".into(),
                })
                .collect(),
        }
    }

    fn test_paper() -> TestPaper {
        let mcq = TestQuestion {
            id: 1,
            text: "Unit of force?".into(),
            marks: 1.0,
            kind: QuestionType::Mcq,
            options: Some(vec!["Newton".into(), "Joule".into(), "Watt".into(), "Pascal".into()]),
            answer: "Newton".into(),
            explanation: None,
        };
        let long = TestQuestion {
            id: 5,
            text: "Derive the lens formula.".into(),
            marks: 5.0,
            kind: QuestionType::Long,
            options: None,
            answer: "1/f = 1/v - 1/u".into(),
            explanation: Some("Use similar triangles.".into()),
        };
        TestPaper {
            title: "Physics Mock".into(),
            duration: "3 Hours".into(),
            total_marks: 70.0,
            sections: vec![
                TestSection { section_title: "Section A".into(), questions: vec![mcq] },
                TestSection { section_title: "Section B".into(), questions: vec![long] },
            ],
            sources: Vec::new(),
        }
    }

    #[test]
    fn quiz_paper_has_no_answers() {
        let model = quiz(3).build(BuildMode::Paper, &BuildOptions::default()).unwrap();
        assert_eq!(model.count_of("NumberedItem"), 3);
        assert_eq!(model.count_of("OptionList"), 3);
        assert_eq!(model.count_of("AnswerBlock"), 0);
        assert!(model.blocks().iter().all(|b| !matches!(
            b,
            Block::OptionList { correct_index: Some(_), .. }
        )));
        assert_eq!(model.subtitle(), None);
    }

    #[test]
    fn quiz_paper_subtitle_carries_issue_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        let model = quiz(1)
            .build(BuildMode::Paper, &BuildOptions::default().issued_on(date))
            .unwrap();
        assert_eq!(model.subtitle(), Some("EduMind AI Question Paper - 3/4/2026"));
    }

    #[test]
    fn quiz_key_has_only_answers() {
        let model = quiz(2).build(BuildMode::Key, &BuildOptions::default()).unwrap();
        assert_eq!(model.title(), "Cell Biology - Answer Key");
        assert_eq!(model.export_kind(), Some(ExportKind::QuizAnswerKey));
        assert_eq!(model.count_of("AnswerBlock"), 2);
        assert_eq!(model.count_of("NumberedItem"), 0);
        assert_eq!(model.count_of("OptionList"), 0);
        match &model.blocks()[1] {
            Block::AnswerBlock { label, answer_text, explanation_text } => {
                assert_eq!(label, "Q2 Correct Answer:");
                assert_eq!(answer_text, "Ribosome");
                assert_eq!(explanation_text.as_deref(), Some("Explanation: Ribosomes synthesise proteins."));
            }
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn empty_quiz_is_invalid() {
        let err = quiz(0).build(BuildMode::Paper, &BuildOptions::default()).unwrap_err();
        assert!(matches!(err, ContentError::InvalidContent(_)));
        assert!(quiz(0).build(BuildMode::Key, &BuildOptions::default()).is_err());
    }

    #[test]
    fn quiz_with_single_option_is_invalid() {
        let mut data = quiz(1);
        data.questions[0].options.truncate(1);
        assert!(data.build(BuildMode::Paper, &BuildOptions::default()).is_err());
    }

    #[test]
    fn test_paper_keeps_source_numbering_and_marks() {
        let model = test_paper().build(BuildMode::Paper, &BuildOptions::default()).unwrap();
        let kinds: Vec<_> = model.blocks().iter().map(Block::kind_name).collect();
        assert_eq!(
            kinds,
            ["SectionHeading", "NumberedItem", "OptionList", "SectionHeading", "NumberedItem"]
        );
        match &model.blocks()[4] {
            Block::NumberedItem { index, side_label, .. } => {
                assert_eq!(*index, 5);
                assert_eq!(side_label.as_deref(), Some("[5]"));
            }
            other => panic!("unexpected block {:?}", other),
        }
        assert_eq!(model.subtitle(), Some("Duration: 3 Hours"));
        assert_eq!(model.aside(), Some("Max Marks: 70"));
        assert!(model.header().centered_title);
        assert_eq!(model.numbering(), Numbering::Dotted);
        assert_eq!(model.export_kind(), Some(ExportKind::TestQuestions));
    }

    #[test]
    fn marking_scheme_lists_answers_per_section() {
        let model = test_paper().build(BuildMode::Key, &BuildOptions::default()).unwrap();
        assert_eq!(model.title(), "Physics Mock - Marking Scheme");
        let kinds: Vec<_> = model.blocks().iter().map(Block::kind_name).collect();
        assert_eq!(kinds, ["SectionHeading", "AnswerBlock", "SectionHeading", "AnswerBlock"]);
        assert_eq!(model.aside(), None);
    }

    #[test]
    fn builds_are_deterministic() {
        let paper = test_paper();
        let options = BuildOptions::default();
        assert_eq!(
            paper.build(BuildMode::Paper, &options).unwrap(),
            paper.build(BuildMode::Paper, &options).unwrap()
        );
    }

    #[test]
    fn export_kinds_pair_with_modes() {
        assert_eq!(quiz(1).export_kind(BuildMode::Key), ExportKind::QuizAnswerKey);
        assert_eq!(test_paper().export_kind(BuildMode::Paper), ExportKind::TestQuestions);
        assert_eq!(ExportKind::MarkingScheme.mode(), BuildMode::Key);
        assert_eq!(ExportKind::TestQuestions.suffix(), "_Test_Questions");
    }
}
