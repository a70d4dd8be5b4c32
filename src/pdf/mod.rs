//! # PDF Serializer
//!
//! Takes the recorded pages from the layout pass and writes a valid PDF file.
//!
//! This is a from-scratch PDF 1.7 writer. Only the subset a résumé needs is
//! supported: filled rectangles and single-line text runs in the 14
//! standard fonts, WinAnsi-encoded.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- objects (fonts, pages, content streams, etc.)
//! 2 0 obj ... endobj
//! ...
//! xref                <- cross-reference table (byte offsets of each object)
//! trailer             <- points to the root object
//! %%EOF
//! ```
//!
//! Layout coordinates run down from the page top; PDF user space runs up
//! from the bottom. The flip happens here and nowhere else.
//!
//! Output is deterministic: fonts are registered in sorted order and the
//! Info dictionary carries no timestamps, so identical input yields
//! identical bytes.

use std::collections::BTreeSet;
use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::font::{unicode_to_winansi, StandardFont};
use crate::layout::{DrawCommand, LayoutElement, LayoutPage};
use crate::model::{is_blank, CvRecord};
use crate::style::Color;

/// Document information dictionary entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Metadata {
    /// Title and author both carry the candidate's name, when there is one.
    pub fn for_record(record: &CvRecord) -> Self {
        if is_blank(&record.full_name) {
            return Self::default();
        }
        let name = record.full_name.trim().to_string();
        Self {
            title: Some(name.clone()),
            author: Some(name),
        }
    }
}

#[derive(Default)]
pub struct PdfWriter;

/// Tracks allocated PDF objects during writing.
struct PdfBuilder {
    objects: Vec<PdfObject>,
    /// Font and object id, in resource-name order (/F0, /F1, ...).
    font_objects: Vec<(StandardFont, usize)>,
}

struct PdfObject {
    data: Vec<u8>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write recorded pages to a PDF byte vector.
    pub fn write(&self, pages: &[LayoutPage], metadata: &Metadata) -> Vec<u8> {
        let mut builder = PdfBuilder {
            objects: Vec::new(),
            font_objects: Vec::new(),
        };

        // Reserve object IDs:
        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root)
        // 3+ = fonts, then content streams and page objects, then Info
        for _ in 0..3 {
            builder.objects.push(PdfObject { data: vec![] });
        }

        self.register_fonts(&mut builder, pages);
        let font_resources = self.build_font_resource_dict(&builder.font_objects);

        let mut page_obj_ids: Vec<usize> = Vec::new();
        for page in pages {
            let content = self.build_content_stream(page, &builder.font_objects);
            let compressed = compress_to_vec_zlib(content.as_bytes(), 6);

            let content_obj_id = builder.objects.len();
            let mut content_data: Vec<u8> = Vec::new();
            let _ = write!(
                content_data,
                "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                compressed.len()
            );
            content_data.extend_from_slice(&compressed);
            content_data.extend_from_slice(b"\nendstream");
            builder.objects.push(PdfObject { data: content_data });

            let page_obj_id = builder.objects.len();
            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << /Font << {} >> >> >>",
                page.width, page.height, content_obj_id, font_resources
            );
            builder.objects.push(PdfObject {
                data: page_dict.into_bytes(),
            });
            page_obj_ids.push(page_obj_id);
        }

        builder.objects[1].data = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();

        let kids: String = page_obj_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");
        builder.objects[2].data = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            page_obj_ids.len()
        )
        .into_bytes();

        let info_obj_id = builder.objects.len();
        let mut info = String::from("<< ");
        if let Some(ref title) = metadata.title {
            let _ = write!(info, "/Title ({}) ", Self::encode_text(title));
        }
        if let Some(ref author) = metadata.author {
            let _ = write!(info, "/Author ({}) ", Self::encode_text(author));
        }
        let _ = write!(
            info,
            "/Producer (Folio {}) /Creator (Folio) >>",
            env!("CARGO_PKG_VERSION")
        );
        builder.objects.push(PdfObject {
            data: info.into_bytes(),
        });

        self.serialize(&builder, info_obj_id)
    }

    /// Build the PDF content stream for a single page.
    fn build_content_stream(&self, page: &LayoutPage, font_objects: &[(StandardFont, usize)]) -> String {
        let mut stream = String::new();
        for element in &page.elements {
            self.write_element(&mut stream, element, page.height, font_objects);
        }
        stream
    }

    /// Write a single layout element as PDF operators.
    fn write_element(
        &self,
        stream: &mut String,
        element: &LayoutElement,
        page_height: f64,
        font_objects: &[(StandardFont, usize)],
    ) {
        match &element.draw {
            DrawCommand::Rect { color } => {
                let y = page_height - element.y - element.height;
                let _ = writeln!(
                    stream,
                    "q {} {:.2} {:.2} {:.2} {:.2} re f Q",
                    Self::fill_color(color),
                    element.x,
                    y,
                    element.width,
                    element.height
                );
            }
            DrawCommand::Text {
                text,
                baseline,
                style,
            } => {
                let idx = Self::font_index(style.font, font_objects);
                let _ = writeln!(
                    stream,
                    "BT {} /F{} {:.2} Tf {:.2} {:.2} Td ({}) Tj ET",
                    Self::fill_color(&style.color),
                    idx,
                    style.size,
                    element.x,
                    page_height - baseline,
                    Self::encode_text(text)
                );
            }
        }
    }

    fn fill_color(color: &Color) -> String {
        format!("{:.3} {:.3} {:.3} rg", color.r, color.g, color.b)
    }

    /// Register every standard font drawn on any page, in sorted order.
    fn register_fonts(&self, builder: &mut PdfBuilder, pages: &[LayoutPage]) {
        let mut fonts: BTreeSet<StandardFont> = pages
            .iter()
            .flat_map(|page| &page.elements)
            .filter_map(|element| match &element.draw {
                DrawCommand::Text { style, .. } => Some(style.font),
                _ => None,
            })
            .collect();

        // Always have at least Helvetica
        if fonts.is_empty() {
            fonts.insert(StandardFont::Helvetica);
        }

        for font in fonts {
            let obj_id = builder.objects.len();
            let font_dict = format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
                 /Encoding /WinAnsiEncoding >>",
                font.pdf_name()
            );
            builder.objects.push(PdfObject {
                data: font_dict.into_bytes(),
            });
            builder.font_objects.push((font, obj_id));
        }
    }

    fn build_font_resource_dict(&self, font_objects: &[(StandardFont, usize)]) -> String {
        font_objects
            .iter()
            .enumerate()
            .map(|(i, (_, obj_id))| format!("/F{} {} 0 R", i, obj_id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resource index (/F0, /F1, etc.) of `font`. Every drawn font was
    /// registered, so the fallback to /F0 is never taken for real pages.
    fn font_index(font: StandardFont, font_objects: &[(StandardFont, usize)]) -> usize {
        font_objects
            .iter()
            .position(|(f, _)| *f == font)
            .unwrap_or(0)
    }

    /// Encode `s` as the body of a WinAnsi PDF literal string.
    ///
    /// Printable ASCII passes through with `(`, `)` and `\` escaped; other
    /// WinAnsi bytes become octal escapes. Characters outside WinAnsi are
    /// replaced with `?`.
    fn encode_text(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for ch in s.chars() {
            let byte = unicode_to_winansi(ch).unwrap_or(b'?');
            match byte {
                b'(' | b')' | b'\\' => {
                    out.push('\\');
                    out.push(byte as char);
                }
                0x20..=0x7E => out.push(byte as char),
                _ => {
                    let _ = write!(out, "\\{:03o}", byte);
                }
            }
        }
        out
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(&self, builder: &PdfBuilder, info_obj_id: usize) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; builder.objects.len()];

        // Header
        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in builder.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let header = format!("{} 0 obj\n", i);
            output.extend_from_slice(header.as_bytes());
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", builder.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(
            output,
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            builder.objects.len(),
            info_obj_id,
            xref_offset
        );

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextStyle;

    fn page(elements: Vec<LayoutElement>) -> LayoutPage {
        LayoutPage {
            width: 595.28,
            height: 841.89,
            elements,
        }
    }

    fn text(x: f64, baseline: f64, s: &str, font: StandardFont) -> LayoutElement {
        LayoutElement {
            x,
            y: baseline - 10.0,
            width: 50.0,
            height: 10.0,
            draw: DrawCommand::Text {
                text: s.to_string(),
                baseline,
                style: TextStyle::new(font, 10.0, Color::BLACK),
            },
        }
    }

    fn decompressed_streams(bytes: &[u8]) -> Vec<String> {
        let mut out = Vec::new();
        let mut rest = bytes;
        while let Some(start) = rest.windows(7).position(|w| w == b"stream\n") {
            let body = &rest[start + 7..];
            let Some(end) = body.windows(10).position(|w| w == b"\nendstream") else {
                break;
            };
            let inflated = miniz_oxide::inflate::decompress_to_vec_zlib(&body[..end]).unwrap();
            out.push(String::from_utf8(inflated).unwrap());
            rest = &body[end + 10..];
        }
        out
    }

    #[test]
    fn test_encode_text_escapes() {
        assert_eq!(PdfWriter::encode_text("Hello (World)"), "Hello \\(World\\)");
        assert_eq!(PdfWriter::encode_text("back\\slash"), "back\\\\slash");
        assert_eq!(PdfWriter::encode_text("Saïdi"), "Sa\\357di");
        assert_eq!(PdfWriter::encode_text("\u{2022}"), "\\225");
        assert_eq!(PdfWriter::encode_text("你"), "?");
    }

    #[test]
    fn test_empty_document_produces_valid_pdf() {
        let bytes = PdfWriter::new().write(&[page(vec![])], &Metadata::default());

        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
        assert!(bytes.windows(4).any(|w| w == b"xref"));
        assert!(bytes.windows(7).any(|w| w == b"trailer"));
    }

    #[test]
    fn test_metadata_in_pdf() {
        let record = CvRecord {
            full_name: " Amina Saïdi ".into(),
            ..Default::default()
        };
        let bytes = PdfWriter::new().write(&[page(vec![])], &Metadata::for_record(&record));
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("/Title (Amina Sa\\357di)"));
        assert!(text.contains("/Author (Amina Sa\\357di)"));
        assert!(!text.contains("/CreationDate"));
    }

    #[test]
    fn test_fonts_registered_once_in_sorted_order() {
        let pages = vec![
            page(vec![
                text(48.0, 60.0, "Bold", StandardFont::HelveticaBold),
                text(48.0, 80.0, "Regular", StandardFont::Helvetica),
            ]),
            page(vec![text(48.0, 60.0, "Bold again", StandardFont::HelveticaBold)]),
        ];
        let bytes = PdfWriter::new().write(&pages, &Metadata::default());
        let text = String::from_utf8_lossy(&bytes);

        assert_eq!(text.matches("/BaseFont /Helvetica-Bold ").count(), 1);
        assert_eq!(text.matches("/BaseFont /Helvetica ").count(), 1);
        let regular = text.find("/BaseFont /Helvetica ").unwrap();
        let bold = text.find("/BaseFont /Helvetica-Bold ").unwrap();
        assert!(regular < bold);
    }

    #[test]
    fn test_coordinates_flip_at_serialization() {
        let band = LayoutElement {
            x: 0.0,
            y: 0.0,
            width: 595.28,
            height: 130.0,
            draw: DrawCommand::Rect { color: Color::WHITE },
        };
        let pages = vec![page(vec![band, text(48.0, 44.0, "Name", StandardFont::Helvetica)])];
        let bytes = PdfWriter::new().write(&pages, &Metadata::default());
        let streams = decompressed_streams(&bytes);

        assert_eq!(streams.len(), 1);
        assert!(streams[0].contains("0.00 711.89 595.28 130.00 re f"));
        assert!(streams[0].contains("48.00 797.89 Td (Name) Tj"));
    }

    #[test]
    fn test_page_count_in_tree() {
        let bytes = PdfWriter::new().write(&[page(vec![]), page(vec![])], &Metadata::default());
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 2"));
    }
}
