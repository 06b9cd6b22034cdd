use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// Text drawn on one page, one `Tj` per line
pub fn extract_page_text(doc: &LopdfDocument, page_num: u32) -> String {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return String::new();
    };
    let Ok(content) = doc.get_page_content(*page_id) else {
        return String::new();
    };
    let Ok(content) = Content::decode(&content) else {
        return String::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|operand| operand.as_str().ok())
        // WinAnsi and Latin-1 agree on everything the fixtures use.
        .map(|bytes| bytes.iter().map(|b| *b as char).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let pages = doc.get_pages();
    let mut text = String::new();
    for page_num in 1..=pages.len() {
        text.push_str(&extract_page_text(doc, page_num as u32));
        text.push('\n');
    }
    text
}

/// Extract the base font names referenced by page resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = std::collections::BTreeSet::new();
    for (_page_num, page_id) in doc.get_pages() {
        let Some(page_dict) = doc.get_object(page_id).ok().and_then(|o| o.as_dict().ok()) else {
            continue;
        };
        let resources = match page_dict.get(b"Resources") {
            Ok(resources) => match resources.as_reference() {
                Ok(id) => doc.get_dictionary(id).ok(),
                Err(_) => resources.as_dict().ok(),
            },
            Err(_) => None,
        };
        let Some(font_dict) = resources.and_then(|r| r.get(b"Font").ok()).and_then(|f| f.as_dict().ok()) else {
            continue;
        };
        for (_resource_name, font) in font_dict.iter() {
            let font = match font.as_reference() {
                Ok(id) => doc.get_dictionary(id).ok(),
                Err(_) => font.as_dict().ok(),
            };
            if let Some(name) = font.and_then(|f| f.get(b"BaseFont").ok()).and_then(|n| n.as_name().ok()) {
                fonts.insert(String::from_utf8_lossy(name).to_string());
            }
        }
    }
    fonts.into_iter().collect()
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_object(*page_id).ok()?.as_dict().ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f == $pattern),
            "PDF should contain font '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}
