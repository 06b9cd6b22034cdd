use crate::error::RenderError;
use edumind_types::PagePlan;
use std::path::Path;

/// A backend that draws a finished page plan and writes it out.
///
/// Rendering makes no layout decisions: positions, fonts and page breaks all
/// come from the plan. `render` is pure with respect to the filesystem, so a
/// failed render never touches the output location.
pub trait DocumentRenderer {
    /// The rendered, not yet saved document.
    type Handle;

    fn render(&self, plan: &PagePlan) -> Result<Self::Handle, RenderError>;

    fn save(&self, handle: &Self::Handle, path: &Path) -> Result<(), RenderError>;
}
