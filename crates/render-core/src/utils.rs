use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Get PDF font name with style suffix
pub fn styled_font_name(base_name: &str, bold: bool) -> String {
    if bold {
        format!("{}-Bold", base_name)
    } else {
        base_name.to_string()
    }
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Writes `bytes` to `path` through a temporary file in the same directory.
///
/// The target either keeps its previous content or holds all of `bytes`.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), crate::RenderError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path)?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
