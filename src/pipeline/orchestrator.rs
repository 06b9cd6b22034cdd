use crate::error::PipelineError;
use edumind_document::{BuildMode, BuildOptions, ContentSource, ExportKind, derive_filename};
use edumind_layout::{LayoutEngine, TextMeasurer};
use edumind_render_core::utils::write_atomically;
use edumind_render_core::{DocumentRenderer, RenderedDocument};
use edumind_render_lopdf::LopdfRenderer;
use edumind_types::PagePlan;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The measurer type the pipeline shares across exports and threads.
pub type SharedMeasurer = Arc<dyn TextMeasurer + Send + Sync>;

/// What one export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub kind: ExportKind,
    pub path: PathBuf,
    pub page_count: usize,
    /// The page plan JSON, when plan dumps are enabled.
    pub plan_path: Option<PathBuf>,
}

/// Maps content sources to saved PDF files.
///
/// Holds no per-export state, so one pipeline can run any number of exports,
/// including concurrently.
pub struct ExportPipeline {
    engine: LayoutEngine<SharedMeasurer>,
    renderer: LopdfRenderer,
    build_options: BuildOptions,
    dump_plan: bool,
}

impl ExportPipeline {
    pub(crate) fn new(
        engine: LayoutEngine<SharedMeasurer>,
        renderer: LopdfRenderer,
        build_options: BuildOptions,
        dump_plan: bool,
    ) -> Self {
        Self {
            engine,
            renderer,
            build_options,
            dump_plan,
        }
    }

    pub fn engine(&self) -> &LayoutEngine<SharedMeasurer> {
        &self.engine
    }

    pub fn build_options(&self) -> &BuildOptions {
        &self.build_options
    }

    /// Builds the document model for `mode` and lays it out.
    pub fn layout<S: ContentSource + ?Sized>(&self, source: &S, mode: BuildMode) -> Result<PagePlan, PipelineError> {
        let model = source.build(mode, &self.build_options)?;
        Ok(self.engine.layout(&model)?)
    }

    pub fn render_plan(&self, plan: &PagePlan) -> Result<RenderedDocument, PipelineError> {
        Ok(self.renderer.render(plan)?)
    }

    /// Where [`ExportPipeline::export`] saves `source` in `mode`.
    pub fn output_path<S: ContentSource + ?Sized>(&self, source: &S, mode: BuildMode, out_dir: &Path) -> PathBuf {
        out_dir.join(derive_filename(source.title(), source.export_kind(mode)))
    }

    /// Runs one export into `out_dir`.
    ///
    /// Nothing is written unless the model, the plan and the PDF bytes were all
    /// produced; the file itself is replaced atomically.
    pub fn export<S: ContentSource + ?Sized>(
        &self,
        source: &S,
        mode: BuildMode,
        out_dir: &Path,
    ) -> Result<ExportOutcome, PipelineError> {
        let kind = source.export_kind(mode);
        let plan = self.layout(source, mode)?;
        let rendered = self.render_plan(&plan)?;

        let path = self.output_path(source, mode, out_dir);
        self.renderer.save(&rendered, &path)?;

        let plan_path = if self.dump_plan {
            let plan_path = path.with_extension("plan.json");
            write_atomically(&plan_path, &serde_json::to_vec_pretty(&plan)?)?;
            Some(plan_path)
        } else {
            None
        };

        log::info!(
            "Exported {:?} for '{}': {} page(s) -> {}",
            kind,
            source.title(),
            rendered.page_count,
            path.display()
        );
        Ok(ExportOutcome {
            kind,
            path,
            page_count: rendered.page_count,
            plan_path,
        })
    }

    /// Runs the paper and the key export for `source`.
    pub fn export_pair<S: ContentSource + ?Sized>(
        &self,
        source: &S,
        out_dir: &Path,
    ) -> Result<Vec<ExportOutcome>, PipelineError> {
        self.export_modes(source, &[BuildMode::Paper, BuildMode::Key], out_dir)
    }

    pub fn export_modes<S: ContentSource + ?Sized>(
        &self,
        source: &S,
        modes: &[BuildMode],
        out_dir: &Path,
    ) -> Result<Vec<ExportOutcome>, PipelineError> {
        modes.iter().map(|mode| self.export(source, *mode, out_dir)).collect()
    }
}
