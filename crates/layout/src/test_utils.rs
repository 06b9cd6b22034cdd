use crate::config::{BlockStyle, LayoutConfig};
use crate::measure::{MeasureError, TextMeasurer};
use crate::metrics::StandardFontMetrics;
use crate::LayoutEngine;
use edumind_document::{BuildMode, BuildOptions, ContentSource, DocumentModel, QuizData, QuizQuestion};
use edumind_types::{LengthUnit, LineRole, PageGeometry, PagePlan};

/// Geometry of the worked examples: A4 height, body between 40 and 287.
pub fn example_geometry() -> PageGeometry {
    PageGeometry {
        unit: LengthUnit::Millimetre,
        page_width: 210.0,
        page_height: 297.0,
        top_margin: 40.0,
        continuation_top_margin: None,
        bottom_margin: 10.0,
        left_margin: 10.0,
        right_margin: 20.0,
    }
}

/// Every body style advances by `line_height`; only option lists and answers keep a gap.
pub fn uniform_config(line_height: f32, gap: f32) -> LayoutConfig {
    let mut config = LayoutConfig {
        geometry: example_geometry(),
        ..Default::default()
    };
    let uniform = |style: &mut BlockStyle, gap_after: f32| {
        style.line_height = line_height;
        style.gap_after = gap_after;
    };
    uniform(&mut config.styles.section_heading, 0.0);
    uniform(&mut config.styles.item, gap);
    uniform(&mut config.styles.option, gap);
    uniform(&mut config.styles.answer_label, 0.0);
    uniform(&mut config.styles.answer_text, 0.0);
    uniform(&mut config.styles.explanation, gap);
    config
}

pub fn create_test_engine(config: LayoutConfig) -> LayoutEngine<StandardFontMetrics> {
    LayoutEngine::new(StandardFontMetrics::new(config.geometry.unit), config).unwrap()
}

pub fn quiz(questions: usize) -> QuizData {
    QuizData {
        title: "Cell Biology".into(),
        questions: (0..questions)
            .map(|i| QuizQuestion {
                question: format!("Which organelle is number {}?", i + 1),
                options: vec!["Nucleus".into(), "Ribosome".into(), "Golgi body".into(), "Vacuole".into()],
                correct_answer: "Ribosome".into(),
                explanation: "Ribosomes assemble proteins from amino acids.".into(),
            })
            .collect(),
    }
}

pub fn quiz_model(questions: usize, mode: BuildMode) -> DocumentModel {
    quiz(questions).build(mode, &BuildOptions::default()).unwrap()
}

/// Asserts every body line sits inside the body area of its page.
pub fn assert_no_overflow(plan: &PagePlan) {
    for (page, line) in plan.body_lines() {
        assert!(
            plan.geometry.contains_baseline(page, line.y),
            "line '{}' at y={} overflows page {}",
            line.text,
            line.y,
            page + 1
        );
    }
}

/// Page index of every line carrying `role` for `block`.
pub fn pages_of(plan: &PagePlan, block: usize, role: impl Fn(&LineRole) -> bool) -> Vec<usize> {
    plan.body_lines()
        .filter(|(_, l)| l.block == Some(block) && role(&l.role))
        .map(|(page, _)| page)
        .collect()
}

/// A measurer that rejects every request.
pub struct RejectingMeasurer;

impl TextMeasurer for RejectingMeasurer {
    fn wrap(&self, _: &str, _: f32, _: f32, _: bool) -> Result<Vec<String>, MeasureError> {
        Err(MeasureError::Backend("font backend unavailable".into()))
    }

    fn text_width(&self, _: &str, _: f32, _: bool) -> Result<f32, MeasureError> {
        Err(MeasureError::Backend("font backend unavailable".into()))
    }
}

/// Never wraps: one line per text, regardless of width.
pub struct SingleLineMeasurer;

impl TextMeasurer for SingleLineMeasurer {
    fn wrap(&self, text: &str, _: f32, _: f32, _: bool) -> Result<Vec<String>, MeasureError> {
        Ok(vec![text.to_string()])
    }

    fn text_width(&self, text: &str, font_size: f32, _: bool) -> Result<f32, MeasureError> {
        Ok(text.chars().count() as f32 * font_size * 0.2)
    }
}
