use super::orchestrator::{ExportOutcome, ExportPipeline};
use crate::error::PipelineError;
use crate::input::{InputKind, StudyMaterial};
use edumind_document::BuildMode;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Configure the Rayon global thread pool used by [`export_batch`].
///
/// `num_threads == 0` keeps Rayon's own choice.
#[cfg(feature = "rayon-executor")]
pub fn configure_rayon_pool(num_threads: usize) {
    if num_threads == 0 {
        return;
    }
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        log::warn!("[RAYON] Failed to configure global thread pool: {}. Using default.", e);
    } else {
        log::debug!("[RAYON] Configured global thread pool with {} threads", num_threads);
    }
}

#[cfg(feature = "rayon-executor")]
fn map_inputs<T: Send, U: Send>(items: Vec<T>, f: impl Fn(T) -> U + Send + Sync) -> Vec<U> {
    use rayon::prelude::*;
    items.into_par_iter().map(f).collect()
}

#[cfg(not(feature = "rayon-executor"))]
fn map_inputs<T, U>(items: Vec<T>, f: impl Fn(T) -> U) -> Vec<U> {
    items.into_iter().map(f).collect()
}

/// Rejects every input whose output files an earlier input already claimed.
///
/// Paths are compared case-folded, as on case-insensitive filesystems.
fn claim_outputs(
    pipeline: &ExportPipeline,
    inputs: &[PathBuf],
    loaded: Vec<Result<StudyMaterial, PipelineError>>,
    modes: &[BuildMode],
    out_dir: &Path,
) -> Vec<Result<StudyMaterial, PipelineError>> {
    let mut claimed: HashMap<String, &Path> = HashMap::new();
    inputs
        .iter()
        .zip(loaded)
        .map(|(input, material)| {
            let material = material?;
            let paths: Vec<PathBuf> = modes
                .iter()
                .map(|mode| pipeline.output_path(&material, *mode, out_dir))
                .collect();
            let key = |path: &Path| path.to_string_lossy().to_lowercase();
            if let Some((path, claimed_by)) = paths
                .iter()
                .find_map(|path| claimed.get(&key(path)).map(|owner| (path, *owner)))
            {
                return Err(PipelineError::DuplicateOutput {
                    path: path.clone(),
                    input: input.clone(),
                    claimed_by: claimed_by.to_path_buf(),
                });
            }
            for path in &paths {
                claimed.insert(key(path), input.as_path());
            }
            Ok(material)
        })
        .collect()
}

/// Exports every input file, returning one result per input in input order.
///
/// Each input is independent: a failing file does not stop the others. No
/// two inputs write the same file; the later one fails with
/// [`PipelineError::DuplicateOutput`].
pub fn export_batch(
    pipeline: &ExportPipeline,
    kind: InputKind,
    inputs: &[PathBuf],
    modes: &[BuildMode],
    out_dir: &Path,
) -> Vec<Result<Vec<ExportOutcome>, PipelineError>> {
    let paths: Vec<&PathBuf> = inputs.iter().collect();
    let loaded = map_inputs(paths, |input| StudyMaterial::load(kind, input));
    let jobs = claim_outputs(pipeline, inputs, loaded, modes, out_dir);
    map_inputs(jobs, |job| job.and_then(|material| pipeline.export_modes(&material, modes, out_dir)))
}
