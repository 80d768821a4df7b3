//! Themed PDF output: draws a `PageLayout` with the PDF base-14 fonts.
//!
//! Layout coordinates are millimetres measured down from the top edge; PDF user space
//! grows up from the bottom, so every y is flipped against the page height.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb as PdfRgb,
};

use crate::catalog::Rgb;
use crate::layout::{FontFamily, Page, PageGeometry};
use crate::render::{DocumentSerializer, RenderError, RenderInput};

pub struct PdfSerializer;

/// Regular and bold cuts for both families, registered once per document.
struct Fonts {
    helvetica: IndirectFontRef,
    helvetica_bold: IndirectFontRef,
    times: IndirectFontRef,
    times_bold: IndirectFontRef,
}

impl Fonts {
    fn register(doc: &PdfDocumentReference) -> Result<Self, RenderError> {
        let add = |font| doc.add_builtin_font(font).map_err(pdf_error);
        Ok(Self {
            helvetica: add(BuiltinFont::Helvetica)?,
            helvetica_bold: add(BuiltinFont::HelveticaBold)?,
            times: add(BuiltinFont::TimesRoman)?,
            times_bold: add(BuiltinFont::TimesBold)?,
        })
    }

    fn pick(&self, family: FontFamily, bold: bool) -> &IndirectFontRef {
        match (family, bold) {
            (FontFamily::Helvetica, false) => &self.helvetica,
            (FontFamily::Helvetica, true) => &self.helvetica_bold,
            (FontFamily::Times, false) => &self.times,
            (FontFamily::Times, true) => &self.times_bold,
        }
    }
}

fn pdf_error(e: printpdf::Error) -> RenderError {
    RenderError::Pdf(format!("{e:?}"))
}

fn pdf_color(c: Rgb) -> Color {
    Color::Rgb(PdfRgb::new(
        f32::from(c.r) / 255.0,
        f32::from(c.g) / 255.0,
        f32::from(c.b) / 255.0,
        None,
    ))
}

fn draw_page(layer: &PdfLayerReference, page: &Page, geometry: &PageGeometry, fonts: &Fonts) {
    let flip = |y: f32| Mm(geometry.page_height - y);

    for rule in &page.rules {
        layer.set_outline_color(pdf_color(rule.color));
        // Rule thickness is in page units; PDF line width is in points.
        layer.set_outline_thickness(Mm(rule.thickness).into_pt().0);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(rule.x_start), flip(rule.y)), false),
                (Point::new(Mm(rule.x_end), flip(rule.y)), false),
            ],
            is_closed: false,
        });
    }

    for run in &page.runs {
        layer.set_fill_color(pdf_color(run.style.color));
        layer.use_text(
            run.text.as_str(),
            run.style.size,
            Mm(run.x),
            flip(run.y),
            fonts.pick(run.style.font, run.style.bold),
        );
    }
}

impl DocumentSerializer for PdfSerializer {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, input: RenderInput<'_>) -> Result<Vec<u8>, RenderError> {
        let geometry = &input.layout.geometry;
        let (width, height) = (Mm(geometry.page_width), Mm(geometry.page_height));
        let title = match input.doc.header_lines.first() {
            Some(name) => format!("{} - Resume", name.as_str()),
            None => "Resume".to_string(),
        };

        let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Page 1");
        let fonts = Fonts::register(&doc)?;

        for (index, page) in input.layout.pages.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_index, layer_index) =
                    doc.add_page(width, height, format!("Page {}", index + 1));
                doc.get_page(page_index).get_layer(layer_index)
            };
            draw_page(&layer, page, geometry, &fonts);
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}
