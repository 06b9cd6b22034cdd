pub mod geometry;
pub mod plan;

pub use geometry::{LengthUnit, PageGeometry};
pub use plan::{HeaderBand, LineRole, Page, PagePlan, PositionedLine, Rule, TextStyle};
