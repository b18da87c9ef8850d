//! PDF rendering of a [`ReportDocument`].
//!
//! Draws the fields in document order: title block, KPI row, group table,
//! signature lines. Rows that do not fit continue on a new page.

use blitz_core::report::{ReportDocument, TABLE_HEADER};
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const ROW_HEIGHT: f32 = 8.0;
const TABLE_COLUMNS: [f32; 3] = [MARGIN, 100.0, 150.0];
const KPI_COLUMNS: [f32; 3] = [MARGIN, 85.0, 150.0];
/// Lowest baseline a table row may use before the signature block.
const TABLE_FLOOR: f32 = 60.0;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Render `document` to PDF bytes. Nothing touches the filesystem.
///
/// # Errors
///
/// Returns `printpdf::Error` if a font cannot be embedded or serialization
/// fails.
pub fn render_pdf(document: &ReportDocument) -> Result<Vec<u8>, printpdf::Error> {
    let (doc, page, layer) =
        PdfDocument::new(&document.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Reporte");
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
    };
    let mut current = doc.get_page(page).get_layer(layer);

    current.use_text(&document.title, 20.0, Mm(MARGIN), Mm(270.0), &fonts.bold);
    current.use_text(&document.generated_on, 10.0, Mm(MARGIN), Mm(262.0), &fonts.regular);
    rule(&current, MARGIN, PAGE_WIDTH - MARGIN, 256.0);

    for ((label, value), x) in document.kpis.cells().iter().zip(KPI_COLUMNS) {
        current.use_text(*label, 9.0, Mm(x), Mm(245.0), &fonts.regular);
        current.use_text(value.as_str(), 16.0, Mm(x), Mm(236.0), &fonts.bold);
    }

    let mut y = table_header(&current, &fonts, 215.0);
    for row in &document.rows {
        if y < TABLE_FLOOR {
            current = new_page(&doc);
            y = table_header(&current, &fonts, PAGE_HEIGHT - MARGIN - 10.0);
        }
        for (cell, x) in row.cells().iter().zip(TABLE_COLUMNS) {
            current.use_text(cell.as_str(), 10.0, Mm(x), Mm(y), &fonts.regular);
        }
        y -= ROW_HEIGHT;
    }

    let [left, right] = document.signatures();
    rule(&current, 25.0, 85.0, 40.0);
    rule(&current, 125.0, 185.0, 40.0);
    current.use_text(left, 9.0, Mm(33.0), Mm(34.0), &fonts.regular);
    current.use_text(right, 9.0, Mm(131.0), Mm(34.0), &fonts.regular);

    doc.save_to_bytes()
}

fn new_page(doc: &PdfDocumentReference) -> PdfLayerReference {
    let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Reporte");
    doc.get_page(page).get_layer(layer)
}

/// Draw the table header at `y`; returns the baseline of the first row.
fn table_header(layer: &PdfLayerReference, fonts: &Fonts, y: f32) -> f32 {
    for (title, x) in TABLE_HEADER.iter().zip(TABLE_COLUMNS) {
        layer.use_text(*title, 10.0, Mm(x), Mm(y), &fonts.bold);
    }
    rule(layer, MARGIN, PAGE_WIDTH - MARGIN, y - 3.0);
    y - 3.0 - ROW_HEIGHT
}

fn rule(layer: &PdfLayerReference, from: f32, to: f32, y: f32) {
    layer.set_outline_thickness(0.5);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(from), Mm(y)), false),
            (Point::new(Mm(to), Mm(y)), false),
        ],
        is_closed: false,
    });
}
