use edumind_document::ContentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid content: {0}")]
    InvalidContent(String),
    #[error("Text measurement adapter failed: {0}")]
    Adapter(#[from] MeasureError),
    #[error("Invalid layout configuration: {0}")]
    Config(String),
}

impl From<ContentError> for LayoutError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::InvalidContent(msg) => LayoutError::InvalidContent(msg),
        }
    }
}

pub mod algorithms;
pub mod config;
pub mod measure;
pub mod metrics;

mod composer;
mod engine;
mod prepare;

pub use self::config::{BlockStyle, HeaderSettings, LayoutConfig, SideLabelSettings, StyleSheet};
pub use self::engine::LayoutEngine;
pub use self::measure::{MeasureError, TextMeasurer};
pub use self::metrics::StandardFontMetrics;

// Re-export the page plan types so callers need only this crate to read a layout.
pub use edumind_types::{LengthUnit, Page, PageGeometry, PagePlan, PositionedLine};

#[cfg(test)]
mod test_utils;
