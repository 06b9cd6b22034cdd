use serde::{Deserialize, Serialize};

/// Unit the page geometry (and every coordinate in a page plan) is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Millimetre,
    Point,
}

impl LengthUnit {
    /// How many PDF points one unit spans.
    pub fn points_per_unit(self) -> f32 {
        match self {
            LengthUnit::Millimetre => 72.0 / 25.4,
            LengthUnit::Point => 1.0,
        }
    }

    /// Converts a length given in points (e.g. a font size) into this unit.
    pub fn from_points(self, points: f32) -> f32 {
        points / self.points_per_unit()
    }
}

/// Fixed page geometry used by the layout engine.
///
/// The first page keeps `top_margin` clear for the document header band;
/// continuation pages start at `continuation_top_margin` when set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageGeometry {
    pub unit: LengthUnit,
    pub page_width: f32,
    pub page_height: f32,
    pub top_margin: f32,
    pub continuation_top_margin: Option<f32>,
    pub bottom_margin: f32,
    pub left_margin: f32,
    pub right_margin: f32,
}

impl Default for PageGeometry {
    /// A4 portrait in millimetres.
    fn default() -> Self {
        Self {
            unit: LengthUnit::Millimetre,
            page_width: 210.0,
            page_height: 297.0,
            top_margin: 40.0,
            continuation_top_margin: Some(20.0),
            bottom_margin: 20.0,
            left_margin: 10.0,
            right_margin: 20.0,
        }
    }
}

impl PageGeometry {
    pub fn usable_width(&self) -> f32 {
        self.page_width - self.left_margin - self.right_margin
    }

    /// The lowest baseline a body line may sit on.
    pub fn content_bottom(&self) -> f32 {
        self.page_height - self.bottom_margin
    }

    pub fn top_margin_for(&self, page_index: usize) -> f32 {
        match (page_index, self.continuation_top_margin) {
            (0, _) | (_, None) => self.top_margin,
            (_, Some(top)) => top,
        }
    }

    /// Vertical space available to body content on the given page.
    pub fn usable_height_for(&self, page_index: usize) -> f32 {
        (self.content_bottom() - self.top_margin_for(page_index)).max(0.0)
    }

    /// Whether a baseline lies inside the body area of the given page.
    pub fn contains_baseline(&self, page_index: usize, y: f32) -> bool {
        const EPSILON: f32 = 0.01;
        y + EPSILON >= self.top_margin_for(page_index) && y <= self.content_bottom() + EPSILON
    }
}
