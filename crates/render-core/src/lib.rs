//! Core rendering abstractions for page plans.
//!
//! This crate provides what every rendering backend shares:
//! - `DocumentRenderer` trait turning a `PagePlan` into a saved document
//! - Error types for rendering operations
//! - Coordinate and font-name helpers, plus atomic file output

mod document;
mod error;
mod traits;
pub mod utils;

pub use document::RenderedDocument;
pub use error::RenderError;
pub use traits::DocumentRenderer;
