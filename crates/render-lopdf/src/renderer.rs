use crate::encoding::to_win_ansi;
use crate::page::{FONT_RESOURCES, PageContext};
use edumind_render_core::utils::write_atomically;
use edumind_render_core::{DocumentRenderer, RenderError, RenderedDocument};
use edumind_types::{LineRole, PagePlan};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};
use std::path::Path;

const PDF_VERSION: &str = "1.5";
const PRODUCER: &str = "edumind-print";

/// Buffers a page plan into an in-memory PDF with `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfRenderer;

impl LopdfRenderer {
    pub fn new() -> Self {
        Self
    }

    fn font_dictionary() -> Dictionary {
        let mut fonts = Dictionary::new();
        let mut entries: Vec<_> = FONT_RESOURCES.iter().collect();
        entries.sort_by_key(|(_, resource)| **resource);
        for (postscript_name, resource) in entries {
            let font = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => postscript_name.as_str(),
                "Encoding" => "WinAnsiEncoding",
            };
            fonts.set(resource.as_bytes(), Object::Dictionary(font));
        }
        fonts
    }

    fn document_title(plan: &PagePlan) -> Option<String> {
        let header = plan.pages.first()?.header.as_ref()?;
        let title: Vec<&str> = header
            .lines
            .iter()
            .filter(|l| l.role == LineRole::Title)
            .map(|l| l.text.as_str())
            .collect();
        (!title.is_empty()).then(|| title.join(" "))
    }
}

impl DocumentRenderer for LopdfRenderer {
    type Handle = RenderedDocument;

    fn render(&self, plan: &PagePlan) -> Result<RenderedDocument, RenderError> {
        if plan.pages.is_empty() {
            return Err(RenderError::Other("page plan has no pages".into()));
        }

        let geometry = &plan.geometry;
        let scale = geometry.unit.points_per_unit();
        let (width_pt, height_pt) = (geometry.page_width * scale, geometry.page_height * scale);

        let mut document = Document::with_version(PDF_VERSION);
        let pages_id = document.new_object_id();
        let resources_id = document.add_object(dictionary! { "Font" => Self::font_dictionary() });

        let mut page_ids = Vec::with_capacity(plan.pages.len());
        for page in &plan.pages {
            let content = PageContext::new(geometry).draw_page(page);
            let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), width_pt.into(), height_pt.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            page_ids.push(page_id);
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::from(*id)).collect::<Vec<_>>(),
            "Count" => page_ids.len() as i64,
        };
        document.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Producer" => Object::String(PRODUCER.as_bytes().to_vec(), StringFormat::Literal),
        };
        if let Some(title) = Self::document_title(plan) {
            info.set("Title", Object::String(to_win_ansi(&title), StringFormat::Literal));
        }
        let info_id = document.add_object(info);
        document.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;
        log::debug!("Rendered {} page(s) into {} bytes", page_ids.len(), bytes.len());
        Ok(RenderedDocument {
            bytes,
            page_count: page_ids.len(),
        })
    }

    fn save(&self, handle: &RenderedDocument, path: &Path) -> Result<(), RenderError> {
        write_atomically(path, &handle.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edumind_types::{HeaderBand, Page, PageGeometry, PositionedLine, Rule, TextStyle};
    use lopdf::content::Content;

    fn line(y: f32, text: &str, bold: bool, role: LineRole) -> PositionedLine {
        PositionedLine {
            x: 10.0,
            y,
            text: text.to_string(),
            style: TextStyle { bold, size: 11.0 },
            role,
            block: Some(0),
        }
    }

    fn two_page_plan() -> PagePlan {
        PagePlan {
            geometry: PageGeometry::default(),
            pages: vec![
                Page {
                    header: Some(HeaderBand {
                        lines: vec![line(20.0, "Algebra Basics", true, LineRole::Title)],
                        rule: Some(Rule {
                            x1: 10.0,
                            x2: 200.0,
                            y: 25.0,
                        }),
                    }),
                    lines: vec![line(40.0, "Q1: Solve for x", true, LineRole::ItemBody { first: true })],
                },
                Page {
                    header: None,
                    lines: vec![line(20.0, "A) 42", false, LineRole::Option { ordinal: 0, first: true })],
                },
            ],
        }
    }

    fn operations(doc: &Document, page: u32) -> Vec<lopdf::content::Operation> {
        let pages = doc.get_pages();
        let content = doc.get_page_content(pages[&page]).unwrap();
        Content::decode(&content).unwrap().operations
    }

    #[test]
    fn renders_one_pdf_page_per_plan_page() {
        let rendered = LopdfRenderer::new().render(&two_page_plan()).unwrap();
        assert_eq!(rendered.page_count, 2);

        let doc = Document::load_mem(&rendered.bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn text_is_placed_in_points_from_the_bottom() {
        let rendered = LopdfRenderer::new().render(&two_page_plan()).unwrap();
        let doc = Document::load_mem(&rendered.bytes).unwrap();

        let ops = operations(&doc, 2);
        let td = ops.iter().find(|op| op.operator == "Td").unwrap();
        let x = td.operands[0].as_float().unwrap();
        let y = td.operands[1].as_float().unwrap();
        let scale = 72.0 / 25.4;
        assert!((x - 10.0 * scale).abs() < 0.01);
        assert!((y - (297.0 - 20.0) * scale).abs() < 0.01);

        let tj = ops.iter().find(|op| op.operator == "Tj").unwrap();
        assert_eq!(tj.operands[0].as_str().unwrap(), b"A) 42");
    }

    #[test]
    fn bold_lines_select_the_bold_font() {
        let rendered = LopdfRenderer::new().render(&two_page_plan()).unwrap();
        let doc = Document::load_mem(&rendered.bytes).unwrap();

        let fonts: Vec<Vec<u8>> = operations(&doc, 1)
            .iter()
            .filter(|op| op.operator == "Tf")
            .map(|op| op.operands[0].as_name().unwrap().to_vec())
            .collect();
        assert_eq!(fonts, vec![b"F2".to_vec()]);
        assert!(operations(&doc, 1).iter().any(|op| op.operator == "S"));
    }

    #[test]
    fn empty_plan_is_rejected() {
        let plan = PagePlan {
            geometry: PageGeometry::default(),
            pages: vec![],
        };
        assert!(matches!(LopdfRenderer::new().render(&plan), Err(RenderError::Other(_))));
    }

    #[test]
    fn save_writes_the_rendered_bytes() {
        let renderer = LopdfRenderer::new();
        let rendered = renderer.render(&two_page_plan()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Algebra_Basics_Questions.pdf");

        renderer.save(&rendered, &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), rendered.bytes);
    }
}
