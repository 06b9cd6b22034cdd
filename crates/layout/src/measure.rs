//! The text measurement seam.
//!
//! The layout engine never computes glyph widths itself; it asks a
//! `TextMeasurer` to break text into display lines for a given width.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("Maximum line width {0:.2} is not a positive finite length.")]
    InvalidWidth(f32),
    #[error("Font size {0:.2} is not a positive finite size.")]
    InvalidFontSize(f32),
    #[error("Measurement backend error: {0}")]
    Backend(String),
}

/// Breaks text into lines and measures single-line widths.
///
/// Implementations must be deterministic: the same arguments always produce
/// the same lines. Widths are in the page geometry's unit, font sizes in points.
pub trait TextMeasurer {
    /// Wraps `text` into display lines no wider than `max_width`, except where a
    /// single character is wider than the limit.
    fn wrap(
        &self,
        text: &str,
        max_width: f32,
        font_size: f32,
        bold: bool,
    ) -> Result<Vec<String>, MeasureError>;

    /// Width of `text` set on one line.
    fn text_width(&self, text: &str, font_size: f32, bold: bool) -> Result<f32, MeasureError>;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn wrap(
        &self,
        text: &str,
        max_width: f32,
        font_size: f32,
        bold: bool,
    ) -> Result<Vec<String>, MeasureError> {
        (**self).wrap(text, max_width, font_size, bold)
    }

    fn text_width(&self, text: &str, font_size: f32, bold: bool) -> Result<f32, MeasureError> {
        (**self).text_width(text, font_size, bold)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for std::sync::Arc<T> {
    fn wrap(
        &self,
        text: &str,
        max_width: f32,
        font_size: f32,
        bold: bool,
    ) -> Result<Vec<String>, MeasureError> {
        (**self).wrap(text, max_width, font_size, bold)
    }

    fn text_width(&self, text: &str, font_size: f32, bold: bool) -> Result<f32, MeasureError> {
        (**self).text_width(text, font_size, bold)
    }
}
