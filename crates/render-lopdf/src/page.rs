use crate::encoding::to_win_ansi;
use edumind_render_core::utils::{flip_y, styled_font_name};
use edumind_types::{Page, PageGeometry, PositionedLine, Rule, TextStyle};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub(crate) const BASE_FONT: &str = "Helvetica";
const RULE_WIDTH_PT: f32 = 0.5;

/// Resource names of the two fonts, keyed by PostScript name.
pub(crate) static FONT_RESOURCES: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (styled_font_name(BASE_FONT, false), "F1"),
        (styled_font_name(BASE_FONT, true), "F2"),
    ])
});

fn font_resource(bold: bool) -> &'static str {
    FONT_RESOURCES
        .get(&styled_font_name(BASE_FONT, bold))
        .copied()
        .unwrap_or("F1")
}

/// Builds the content stream of one page, tracking the selected font.
pub(crate) struct PageContext {
    scale: f32,
    page_height_pt: f32,
    content: Content,
    font: Option<(&'static str, f32)>,
}

impl PageContext {
    pub fn new(geometry: &PageGeometry) -> Self {
        let scale = geometry.unit.points_per_unit();
        Self {
            scale,
            page_height_pt: geometry.page_height * scale,
            content: Content { operations: vec![] },
            font: None,
        }
    }

    pub fn draw_page(mut self, page: &Page) -> Content {
        if let Some(header) = &page.header {
            for line in &header.lines {
                self.draw_line(line);
            }
            if let Some(rule) = &header.rule {
                self.draw_rule(rule);
            }
        }
        for line in &page.lines {
            self.draw_line(line);
        }
        self.content
    }

    fn set_font(&mut self, style: &TextStyle) {
        let resource = font_resource(style.bold);
        if self.font != Some((resource, style.size)) {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(resource.as_bytes().to_vec()), style.size.into()],
            ));
            self.font = Some((resource, style.size));
        }
    }

    fn draw_line(&mut self, line: &PositionedLine) {
        if line.text.trim().is_empty() {
            return;
        }
        self.content.operations.push(Operation::new("BT", vec![]));
        self.set_font(&line.style);
        let x = line.x * self.scale;
        let y = flip_y(line.y * self.scale, self.page_height_pt);
        self.content.operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        self.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(&line.text), StringFormat::Literal)],
        ));
        self.content.operations.push(Operation::new("ET", vec![]));
    }

    fn draw_rule(&mut self, rule: &Rule) {
        let y = flip_y(rule.y * self.scale, self.page_height_pt);
        self.content.operations.push(Operation::new("w", vec![RULE_WIDTH_PT.into()]));
        self.content
            .operations
            .push(Operation::new("m", vec![(rule.x1 * self.scale).into(), y.into()]));
        self.content
            .operations
            .push(Operation::new("l", vec![(rule.x2 * self.scale).into(), y.into()]));
        self.content.operations.push(Operation::new("S", vec![]));
    }
}
