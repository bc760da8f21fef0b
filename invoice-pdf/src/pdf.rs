//! PDF document builder
//!
//! Provides a fluent API for placing text and rules on fixed-size pages.
//! Drawing calls collect content-stream operations per page; `build` hands
//! them to `lopdf` for object layout and serialization.

use crate::encoding::{text_width, to_win_ansi};
use crate::error::{PdfError, PdfResult};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};
use tracing::instrument;

/// PDF version written into the header
const PDF_VERSION: &str = "1.4";

/// Page size in points (1/72 inch)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// US Letter, landscape (11 x 8.5 in)
    pub const LETTER_LANDSCAPE: PageSize = PageSize {
        width: 792.0,
        height: 612.0,
    };

    /// A4, landscape (297 x 210 mm)
    pub const A4_LANDSCAPE: PageSize = PageSize {
        width: 841.89,
        height: 595.28,
    };

    /// Resolve a page size by name ("letter" or "a4", landscape)
    pub fn from_name(name: &str) -> PdfResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "letter" | "letter-landscape" => Ok(Self::LETTER_LANDSCAPE),
            "a4" | "a4-landscape" => Ok(Self::A4_LANDSCAPE),
            other => Err(PdfError::InvalidLayout(format!(
                "Unknown page size: {}",
                other
            ))),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::LETTER_LANDSCAPE
    }
}

/// Standard fonts available to every document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    const ALL: [Font; 2] = [Font::Helvetica, Font::HelveticaBold];

    /// Name of the font in the page resource dictionary
    fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    fn base_font(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }
}

/// PDF command builder
///
/// Coordinates are in points with the origin at the bottom-left corner of
/// the page. A builder always holds at least one page.
pub struct PdfBuilder {
    size: PageSize,
    pages: Vec<Vec<Operation>>,
    font: Font,
    font_size: f32,
    title: Option<String>,
    creation_date: Option<String>,
}

impl PdfBuilder {
    /// Create a new builder with one empty page
    pub fn new(size: PageSize) -> Self {
        Self {
            size,
            pages: vec![Vec::new()],
            font: Font::Helvetica,
            font_size: 10.0,
            title: None,
            creation_date: None,
        }
    }

    /// Number of pages started so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    // === Metadata ===

    /// Set the document title
    pub fn title(&mut self, title: &str) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the creation date, already in PDF date form (`D:YYYYMMDDHHmmSS`)
    pub fn creation_date(&mut self, date: &str) -> &mut Self {
        self.creation_date = Some(date.to_string());
        self
    }

    // === Pages ===

    /// Start a new page; subsequent drawing goes there
    pub fn new_page(&mut self) -> &mut Self {
        self.pages.push(Vec::new());
        self
    }

    // === Text Style ===

    /// Select font and size for subsequent text
    pub fn font(&mut self, font: Font, size: f32) -> &mut Self {
        self.font = font;
        self.font_size = size;
        self
    }

    /// Regular weight at the current size
    pub fn regular(&mut self) -> &mut Self {
        self.font = Font::Helvetica;
        self
    }

    /// Bold weight at the current size
    pub fn bold(&mut self) -> &mut Self {
        self.font = Font::HelveticaBold;
        self
    }

    /// Width of `s` in the current font size
    pub fn measure(&self, s: &str) -> f32 {
        text_width(s, self.font_size)
    }

    // === Text Output ===

    /// Draw text with its left edge at `x` and baseline at `y`
    pub fn text(&mut self, x: f32, y: f32, s: &str) -> &mut Self {
        let font = self.font.resource_name();
        let size = self.font_size;
        self.current_page().extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.into(), size.into()]),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new(
                "Tj",
                vec![Object::String(to_win_ansi(s), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
        self
    }

    /// Draw text with its right edge at `x`
    pub fn text_right(&mut self, x: f32, y: f32, s: &str) -> &mut Self {
        let w = self.measure(s);
        self.text(x - w, y, s)
    }

    /// Draw text centered on `x`
    pub fn text_center(&mut self, x: f32, y: f32, s: &str) -> &mut Self {
        let w = self.measure(s);
        self.text(x - w / 2.0, y, s)
    }

    // === Rules ===

    /// Draw a straight line
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) -> &mut Self {
        self.current_page().extend([
            Operation::new("w", vec![width.into()]),
            Operation::new("m", vec![x1.into(), y1.into()]),
            Operation::new("l", vec![x2.into(), y2.into()]),
            Operation::new("S", vec![]),
        ]);
        self
    }

    /// Draw a horizontal rule from `x1` to `x2` at `y`
    pub fn hrule(&mut self, x1: f32, x2: f32, y: f32) -> &mut Self {
        self.line(x1, y, x2, y, 0.5)
    }

    fn current_page(&mut self) -> &mut Vec<Operation> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    // === Build ===

    /// Serialize the document
    ///
    /// All pages share one resource dictionary holding both fonts with
    /// WinAnsiEncoding.
    #[instrument(skip(self), fields(pages = self.pages.len()))]
    pub fn build(self) -> PdfResult<Vec<u8>> {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for font in Font::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations };
            let data = content.encode().map_err(document_error)?;
            let content_id = doc.add_object(Stream::new(Dictionary::new(), data));
            let page_id: ObjectId = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let media_box: Vec<Object> = vec![
            Object::Integer(0),
            Object::Integer(0),
            self.size.width.into(),
            self.size.height.into(),
        ];
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => media_box,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Producer" => Object::string_literal("invoice-pdf"),
        };
        if let Some(title) = &self.title {
            info.set("Title", Object::String(to_win_ansi(title), StringFormat::Literal));
        }
        if let Some(date) = &self.creation_date {
            info.set("CreationDate", Object::string_literal(date.as_str()));
        }
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);

        let mut out = Vec::new();
        doc.save_to(&mut out).map_err(document_error)?;

        tracing::debug!(bytes = out.len(), "pdf document built");
        Ok(out)
    }
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

fn document_error(err: impl std::fmt::Display) -> PdfError {
    PdfError::Document(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (font, size, x, y, text) for every text object on every page
    fn texts(data: &[u8]) -> Vec<Vec<(String, f32, f32, f32, String)>> {
        let doc = Document::load_mem(data).unwrap();
        doc.get_pages()
            .values()
            .map(|page_id| {
                let content = Content::decode(&doc.get_page_content(*page_id).unwrap()).unwrap();
                let mut out = Vec::new();
                let (mut font, mut size, mut x, mut y) = (String::new(), 0.0, 0.0, 0.0);
                for op in &content.operations {
                    match op.operator.as_str() {
                        "Tf" => {
                            font = String::from_utf8_lossy(op.operands[0].as_name().unwrap())
                                .into_owned();
                            size = op.operands[1].as_float().unwrap();
                        }
                        "Td" => {
                            x = op.operands[0].as_float().unwrap();
                            y = op.operands[1].as_float().unwrap();
                        }
                        "Tj" => {
                            let bytes = op.operands[0].as_str().unwrap();
                            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
                            out.push((font.clone(), size, x, y, text.into_owned()));
                        }
                        _ => {}
                    }
                }
                out
            })
            .collect()
    }

    #[test]
    fn test_builder_basic() {
        let mut b = PdfBuilder::new(PageSize::LETTER_LANDSCAPE);
        b.font(Font::HelveticaBold, 18.0)
            .text(40.0, 560.0, "INVOICE")
            .regular()
            .text(40.0, 540.0, "Cabinet Outlet");

        let data = b.build().unwrap();
        assert!(data.starts_with(b"%PDF-1.4"));

        let pages = texts(&data);
        assert_eq!(pages.len(), 1);
        assert_eq!(
            pages[0],
            vec![
                ("F2".to_string(), 18.0, 40.0, 560.0, "INVOICE".to_string()),
                ("F1".to_string(), 18.0, 40.0, 540.0, "Cabinet Outlet".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_tree() {
        let mut b = PdfBuilder::default();
        assert_eq!(b.page_count(), 1);
        b.text(10.0, 10.0, "one").new_page().text(10.0, 10.0, "two");
        assert_eq!(b.page_count(), 2);

        let data = b.build().unwrap();
        let doc = Document::load_mem(&data).unwrap();
        assert_eq!(doc.get_pages().len(), 2);

        let pages = texts(&data);
        assert_eq!(pages[0][0].4, "one");
        assert_eq!(pages[1][0].4, "two");
    }

    #[test]
    fn test_fonts_and_info() {
        let mut b = PdfBuilder::default();
        b.title("Invoice - Cabinet Outlet")
            .creation_date("D:20260314093000")
            .text(0.0, 0.0, "x");
        let doc = Document::load_mem(&b.build().unwrap()).unwrap();

        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(
            info.get(b"Title").unwrap().as_str().unwrap(),
            b"Invoice - Cabinet Outlet"
        );
        assert_eq!(
            info.get(b"CreationDate").unwrap().as_str().unwrap(),
            b"D:20260314093000"
        );

        let base_fonts: Vec<_> = doc
            .objects
            .values()
            .filter_map(|o| o.as_dict().ok())
            .filter(|dict| dict.has_type(b"Font"))
            .map(|f| f.get(b"BaseFont").unwrap().as_name().unwrap().to_vec())
            .collect();
        assert_eq!(base_fonts.len(), 2);
        assert!(base_fonts.contains(&b"Helvetica".to_vec()));
        assert!(base_fonts.contains(&b"Helvetica-Bold".to_vec()));
    }

    #[test]
    fn test_text_is_win_ansi() {
        let mut b = PdfBuilder::default();
        b.text(0.0, 0.0, "Qty (2) €5");
        let pages = texts(&b.build().unwrap());
        assert_eq!(pages[0][0].4, "Qty (2) €5");
    }

    #[test]
    fn test_text_right_alignment() {
        let mut b = PdfBuilder::default();
        b.font(Font::Helvetica, 10.0).text_right(100.0, 50.0, "00");
        // "00" is 11.12pt wide at 10pt
        let pages = texts(&b.build().unwrap());
        assert!((pages[0][0].2 - 88.88).abs() < 0.01);
        assert_eq!(pages[0][0].3, 50.0);
    }

    #[test]
    fn test_hrule() {
        let mut b = PdfBuilder::default();
        b.hrule(36.0, 756.0, 100.0);
        let page = &b.pages[0];
        let operators: Vec<_> = page.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(operators, vec!["w", "m", "l", "S"]);
        assert_eq!(page[0].operands[0].as_float().unwrap(), 0.5);
    }

    #[test]
    fn test_page_size_from_name() {
        assert_eq!(PageSize::from_name("Letter").unwrap(), PageSize::LETTER_LANDSCAPE);
        assert_eq!(PageSize::from_name(" a4 ").unwrap(), PageSize::A4_LANDSCAPE);
        assert!(matches!(
            PageSize::from_name("legal"),
            Err(PdfError::InvalidLayout(_))
        ));
    }
}
