use crate::algorithms::pagination::check_fit;
use crate::prepare::{PendingLine, Unit};
use edumind_types::{HeaderBand, LineRole, Page, PageGeometry, PositionedLine};

/// The composing state of one layout call: the open page and its cursor.
///
/// Created for a single document and consumed by [`PageComposer::finish`],
/// which flushes the open page. Nothing here outlives the call.
pub(crate) struct PageComposer {
    geometry: PageGeometry,
    pages: Vec<Page>,
    current: Page,
    page_index: usize,
    cursor_y: f32,
}

impl PageComposer {
    pub fn new(geometry: PageGeometry, header: Option<HeaderBand>, body_top: f32) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: Page {
                header,
                lines: Vec::new(),
            },
            page_index: 0,
            cursor_y: body_top.max(geometry.top_margin_for(0)),
        }
    }

    pub fn is_at_page_top(&self) -> bool {
        self.current.lines.is_empty()
    }

    /// Height available on a page that has just been started.
    pub fn fresh_page_height(&self) -> f32 {
        self.geometry.usable_height_for(self.page_index + 1)
    }

    /// Starts a new page unless `required` fits below the cursor.
    ///
    /// Never breaks at the top margin of an empty page, so an oversized request
    /// still makes progress. An empty first page whose header pushed the
    /// cursor down does break.
    pub fn ensure_room(&mut self, required: f32) {
        if self.is_at_page_top() && self.cursor_y <= self.geometry.top_margin_for(self.page_index) + 0.01 {
            return;
        }
        if check_fit(self.cursor_y, required, self.geometry.content_bottom()).should_break {
            self.break_page();
        }
    }

    pub fn break_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        log::debug!(
            "Flushing page {} with {} lines",
            self.page_index + 1,
            page.lines.len()
        );
        self.pages.push(page);
        self.page_index += 1;
        self.cursor_y = self.geometry.top_margin_for(self.page_index);
    }

    pub fn write_unit(&mut self, unit: &Unit, block: usize) {
        for line in &unit.lines {
            self.write_line(line, block);
        }
    }

    fn write_line(&mut self, line: &PendingLine, block: usize) {
        self.ensure_room(line.advance);
        let y = self.cursor_y;
        self.current.lines.push(PositionedLine {
            x: line.x,
            y,
            text: line.text.clone(),
            style: line.style,
            role: line.role,
            block: Some(block),
        });
        if let Some((x, text, style)) = &line.side_label {
            self.current.lines.push(PositionedLine {
                x: *x,
                y,
                text: text.clone(),
                style: *style,
                role: LineRole::SideLabel,
                block: Some(block),
            });
        }
        self.cursor_y += line.advance;
    }

    pub fn advance(&mut self, dy: f32) {
        self.cursor_y += dy;
    }

    /// Flushes the open page, even a nearly empty one, and returns all pages.
    pub fn finish(mut self) -> Vec<Page> {
        log::debug!(
            "Flushing final page {} with {} lines",
            self.page_index + 1,
            self.current.lines.len()
        );
        self.pages.push(self.current);
        self.pages
    }
}
