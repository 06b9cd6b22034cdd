use crate::error::PipelineError;
use edumind_layout::LayoutConfig;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

/// Loads a `LayoutConfig` overlay from a JSON file.
///
/// Every field is optional; anything the file leaves out keeps its default,
/// at any nesting depth.
pub fn load_layout_config<P: AsRef<Path>>(path: P) -> Result<LayoutConfig, PipelineError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read layout config from '{}': {}", path.display(), e),
        ))
    })?;
    parse_layout_config(&source)
        .map_err(|e| PipelineError::Config(format!("'{}': {}", path.display(), e)))
}

pub(crate) fn parse_layout_config(source: &str) -> Result<LayoutConfig, String> {
    let overlay: Value = serde_json::from_str(source).map_err(|e| e.to_string())?;
    if !overlay.is_object() {
        return Err("layout config must be a JSON object".to_string());
    }
    let mut merged = serde_json::to_value(LayoutConfig::default()).map_err(|e| e.to_string())?;
    merge_overlay(&mut merged, overlay);
    let config: LayoutConfig = serde_json::from_value(merged).map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Objects merge key by key; anything else replaces the base value.
fn merge_overlay(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge_overlay(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
