use crate::composer::PageComposer;
use crate::config::LayoutConfig;
use crate::measure::TextMeasurer;
use crate::prepare::{prepare_blocks, PreparedBlock, PreparedKind, Unit};
use crate::LayoutError;
use edumind_document::DocumentModel;
use edumind_types::{HeaderBand, LineRole, PagePlan, PositionedLine, Rule};

/// Lays document models out into pages.
///
/// The engine holds no per-document state; each [`LayoutEngine::layout`] call
/// owns its own composer, so one engine can serve any number of exports.
#[derive(Debug, Clone)]
pub struct LayoutEngine<M: TextMeasurer> {
    measurer: M,
    config: LayoutConfig,
}

impl<M: TextMeasurer> LayoutEngine<M> {
    pub fn new(measurer: M, config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { measurer, config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Produces the complete page plan for `model`, or an error and no pages.
    pub fn layout(&self, model: &DocumentModel) -> Result<PagePlan, LayoutError> {
        model.validate()?;

        let (header, body_top) = self.compose_header(model)?;
        let prepared = prepare_blocks(&self.measurer, &self.config, model)?;

        let mut composer = PageComposer::new(self.config.geometry, Some(header), body_top);
        let mut remaining = prepared.as_slice();
        let mut flow = false;
        while let Some((block, rest)) = remaining.split_first() {
            flow = self.place_block(&mut composer, block, rest, flow);
            remaining = rest;
        }

        let plan = PagePlan {
            geometry: self.config.geometry,
            pages: composer.finish(),
        };
        log::info!(
            "Laid out '{}': {} blocks on {} page(s)",
            model.title(),
            prepared.len(),
            plan.page_count()
        );
        Ok(plan)
    }

    /// Extent that has to fit below the cursor before `block` starts, and
    /// whether the next block must flow on directly below it.
    fn keep_extent(&self, fresh: f32, block: &PreparedBlock, rest: &[PreparedBlock]) -> (f32, bool) {
        let own = block.extent();
        match (block.kind, rest.first()) {
            // Never strand a heading at the foot of a page.
            (PreparedKind::Heading, Some(next)) => {
                let lead = own + block.gap_after + next.gap_before;
                let (next_keep, _) = self.keep_extent(fresh, next, &rest[1..]);
                if lead + next_keep <= fresh {
                    (lead + next_keep, false)
                } else {
                    // The pair cannot share a page; the next block starts right here instead.
                    (lead + next.first_advance(), true)
                }
            }
            // A question stays with its options when the pair fits on a page.
            (PreparedKind::Item, Some(next)) if next.kind == PreparedKind::Options => {
                let with_list = own + next.extent();
                if with_list <= fresh {
                    (with_list, false)
                } else {
                    (own + next.units.first().map(Unit::extent).unwrap_or(0.0), false)
                }
            }
            (PreparedKind::Options, _) => (block.units.first().map(Unit::extent).unwrap_or(0.0), false),
            _ => (own, false),
        }
    }

    /// Places one block. `flow` means the previous block already reserved
    /// room for this one's first line. Returns whether the next block must flow.
    fn place_block(
        &self,
        composer: &mut PageComposer,
        block: &PreparedBlock,
        rest: &[PreparedBlock],
        flow: bool,
    ) -> bool {
        let next = rest.first();
        let fresh = composer.fresh_page_height();
        let mut flow_next = false;
        match block.kind {
            PreparedKind::Options => {
                for (i, unit) in block.units.iter().enumerate() {
                    let required = if unit.extent() > fresh {
                        log::warn!(
                            "Option in block {} is taller than a page ({:.1} > {:.1}); it will flow across pages",
                            block.block,
                            unit.extent(),
                            fresh
                        );
                        unit.first_advance()
                    } else if flow && i == 0 {
                        unit.first_advance()
                    } else {
                        unit.extent()
                    };
                    composer.ensure_room(required);
                    composer.write_unit(unit, block.block);
                }
            }
            _ => {
                let (mut keep, glue) = self.keep_extent(fresh, block, rest);
                if flow {
                    keep = block.first_advance();
                } else if keep > fresh {
                    log::warn!(
                        "Block {} is taller than a page ({:.1} > {:.1}); it will flow across pages",
                        block.block,
                        keep,
                        fresh
                    );
                    // Flows from the current cursor.
                    keep = block.first_advance();
                }
                let gap_before = if composer.is_at_page_top() { 0.0 } else { block.gap_before };
                composer.ensure_room(gap_before + keep);
                if !composer.is_at_page_top() {
                    composer.advance(gap_before);
                }
                for unit in &block.units {
                    composer.write_unit(unit, block.block);
                }
                flow_next = glue;
            }
        }

        let options_follow = block.kind == PreparedKind::Item
            && next.is_some_and(|n| n.kind == PreparedKind::Options);
        if !options_follow {
            composer.advance(block.gap_after);
        }
        flow_next
    }

    /// Lays out the title band and returns it with the first body baseline.
    fn compose_header(&self, model: &DocumentModel) -> Result<(HeaderBand, f32), LayoutError> {
        let geometry = &self.config.geometry;
        let settings = &self.config.header;
        let centered = model.header().centered_title;
        let mut band = HeaderBand::default();
        let mut cursor = settings.top;

        let title_style = &settings.title;
        let mut title_lines = self.measurer.wrap(
            model.title(),
            geometry.usable_width(),
            title_style.size,
            title_style.bold,
        )?;

        // Whatever follows the last title baseline, down to the first body line.
        let has_row = model.subtitle().is_some() || model.aside().is_some();
        let below_title = if has_row { title_style.line_height } else { 0.0 }
            + if model.header().rule { settings.rule_gap } else { 0.0 }
            + settings.body_gap
            + self.config.styles_for(model.export_kind()).tallest_line();
        let room = geometry.content_bottom() - below_title - settings.top;
        let max_lines = ((room / title_style.line_height).floor() as usize + 1).max(1);
        if title_lines.len() > max_lines {
            log::warn!(
                "Title of '{}' wraps to {} lines; keeping the first {} so the body starts on page 1",
                model.title(),
                title_lines.len(),
                max_lines
            );
            title_lines.truncate(max_lines);
        }

        for text in title_lines {
            let x = if centered {
                let width = self.measurer.text_width(&text, title_style.size, title_style.bold)?;
                ((geometry.page_width - width) / 2.0).max(geometry.left_margin)
            } else {
                geometry.left_margin
            };
            band.lines.push(PositionedLine {
                x,
                y: cursor,
                text,
                style: title_style.text_style(),
                role: LineRole::Title,
                block: None,
            });
            cursor += title_style.line_height;
        }

        let subtitle_style = &settings.subtitle;
        if model.subtitle().is_some() || model.aside().is_some() {
            if let Some(subtitle) = model.subtitle() {
                band.lines.push(PositionedLine {
                    x: geometry.left_margin,
                    y: cursor,
                    text: subtitle.to_string(),
                    style: subtitle_style.text_style(),
                    role: LineRole::Subtitle,
                    block: None,
                });
            }
            if let Some(aside) = model.aside() {
                let width = self.measurer.text_width(aside, subtitle_style.size, subtitle_style.bold)?;
                band.lines.push(PositionedLine {
                    x: (geometry.page_width - geometry.right_margin - width).max(geometry.left_margin),
                    y: cursor,
                    text: aside.to_string(),
                    style: subtitle_style.text_style(),
                    role: LineRole::Aside,
                    block: None,
                });
            }
        }

        let last_baseline = band.lines.last().map(|l| l.y).unwrap_or(settings.top);
        let mut bottom = last_baseline;
        if model.header().rule {
            let y = last_baseline + settings.rule_gap;
            band.rule = Some(Rule {
                x1: geometry.left_margin,
                x2: geometry.page_width - geometry.left_margin,
                y,
            });
            bottom = y;
        }
        let body_top = (bottom + settings.body_gap).max(geometry.top_margin_for(0));
        Ok((band, body_top))
    }
}
