//! PDF renderer for page plans using lopdf.
//!
//! Text is drawn with the standard Type1 fonts `Helvetica` and
//! `Helvetica-Bold`, which every PDF viewer ships, so nothing is embedded.

mod encoding;
mod page;
mod renderer;

pub use encoding::to_win_ansi;
pub use renderer::LopdfRenderer;
