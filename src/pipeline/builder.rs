use super::orchestrator::{ExportPipeline, SharedMeasurer};
use crate::config::load_layout_config;
use crate::error::PipelineError;
use edumind_document::BuildOptions;
use edumind_layout::{LayoutConfig, LayoutEngine, StandardFontMetrics, TextMeasurer};
use edumind_render_lopdf::LopdfRenderer;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating an `ExportPipeline`.
#[derive(Default)]
pub struct PipelineBuilder {
    config: LayoutConfig,
    measurer: Option<SharedMeasurer>,
    build_options: BuildOptions,
    dump_plan: bool,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with the default A4 layout.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads a JSON layout overlay; see [`load_layout_config`].
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = load_layout_config(path)?;
        Ok(self)
    }

    /// Replaces the built-in Helvetica metrics.
    ///
    /// The measurer must report widths in the unit of the configured geometry.
    pub fn with_measurer<M>(mut self, measurer: M) -> Self
    where
        M: TextMeasurer + Send + Sync + 'static,
    {
        let measurer: SharedMeasurer = Arc::new(measurer);
        self.measurer = Some(measurer);
        self
    }

    pub fn with_build_options(mut self, options: BuildOptions) -> Self {
        self.build_options = options;
        self
    }

    /// Writes each page plan as JSON next to its PDF.
    pub fn with_plan_dump(mut self, dump_plan: bool) -> Self {
        self.dump_plan = dump_plan;
        self
    }

    /// Consumes the builder and creates the `ExportPipeline`, validating the layout config.
    pub fn build(self) -> Result<ExportPipeline, PipelineError> {
        let unit = self.config.geometry.unit;
        let measurer = self
            .measurer
            .unwrap_or_else(|| Arc::new(StandardFontMetrics::new(unit)) as SharedMeasurer);
        let engine =
            LayoutEngine::new(measurer, self.config).map_err(|e| PipelineError::Config(e.to_string()))?;
        log::debug!(
            "Built export pipeline for {}x{} {:?} pages",
            self.config.geometry.page_width,
            self.config.geometry.page_height,
            unit
        );
        Ok(ExportPipeline::new(engine, LopdfRenderer::new(), self.build_options, self.dump_plan))
    }
}
