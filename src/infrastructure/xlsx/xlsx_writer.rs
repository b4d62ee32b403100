use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Image, Workbook, Worksheet, XlsxError};
use tracing::{debug, warn};

use crate::application::ports::{DocumentWriter, SerializationError};
use crate::domain::entities::{
    BorderStyle, Cell, CellValue, Document, HorizontalAlign, Sheet, VerticalAlign,
};

impl From<XlsxError> for SerializationError {
    fn from(err: XlsxError) -> Self {
        match err {
            XlsxError::IoError(e) => SerializationError::Io(e),
            other => SerializationError::Workbook(other.to_string()),
        }
    }
}

/// Serializes documents to `.xlsx` with `rust_xlsxwriter`
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxDocumentWriter;

impl XlsxDocumentWriter {
    pub fn new() -> Self {
        Self
    }

    fn build_workbook(document: &Document) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        for sheet in document.sheets() {
            let worksheet = workbook.add_worksheet();
            write_sheet(worksheet, sheet)?;
        }
        Ok(workbook)
    }
}

impl DocumentWriter for XlsxDocumentWriter {
    fn write(&self, document: &Document, path: &Path) -> Result<(), SerializationError> {
        let result = Self::build_workbook(document).and_then(|mut workbook| workbook.save(path));

        if let Err(e) = result {
            warn!("Failed to write workbook {:?}: {}", path, e);
            remove_partial(path);
            return Err(e.into());
        }

        debug!(
            "Workbook written: {:?} ({} sheets)",
            path,
            document.sheet_count()
        );
        Ok(())
    }
}

fn remove_partial(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => debug!("Removed partial workbook {:?}", path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove partial workbook {:?}: {}", path, e),
    }
}

/// Pixel width Excel renders for a raw `<col width>` value.
///
/// Sheet widths are raw character widths; `set_column_width` would add
/// Excel's cell padding on top, so they are written through pixels.
pub(crate) fn column_pixels(width: f64) -> u16 {
    if width <= 0.0 {
        return 0;
    }
    let px = ((256.0 * width + (128.0_f64 / 7.0).floor()).floor() / 256.0 * 7.0).floor();
    px.min(f64::from(u16::MAX)) as u16
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet) -> Result<(), XlsxError> {
    worksheet.set_name(sheet.title())?;

    for (row, height) in sheet.row_heights() {
        worksheet.set_row_height(row, height)?;
    }
    for (col, width) in sheet.column_widths() {
        worksheet.set_column_width_pixels(col, column_pixels(width))?;
    }

    // Merges carry the anchor cell's value; every cell is then rewritten
    // with its own format so per-cell borders survive
    for range in sheet.merges() {
        let (first, last) = (range.first(), range.last());
        let anchor = sheet.cell(first).cloned().unwrap_or_default();
        let text = match &anchor.value {
            Some(CellValue::Text(text)) => text.clone(),
            _ => String::new(),
        };
        worksheet.merge_range(
            first.row(),
            first.col(),
            last.row(),
            last.col(),
            &text,
            &cell_format(&anchor),
        )?;
    }

    for (at, cell) in sheet.cells() {
        let format = cell_format(cell);
        match &cell.value {
            Some(CellValue::Text(text)) => {
                worksheet.write_string_with_format(at.row(), at.col(), text, &format)?;
            }
            Some(CellValue::Number(n)) => {
                worksheet.write_number_with_format(at.row(), at.col(), *n as f64, &format)?;
            }
            None => {
                worksheet.write_blank(at.row(), at.col(), &format)?;
            }
        }
    }

    if let Some(area) = sheet.print_area() {
        let (first, last) = (area.first(), area.last());
        worksheet.set_print_area(first.row(), first.col(), last.row(), last.col())?;
    }

    if let Some(image) = sheet.image() {
        let picture = Image::new(&image.path)?.set_scale_to_size(
            image.width,
            image.height,
            false,
        );
        worksheet.insert_image(image.anchor.row(), image.anchor.col(), &picture)?;
    }

    Ok(())
}

fn cell_format(cell: &Cell) -> Format {
    let mut format = Format::new();

    if let Some(font) = &cell.font {
        format = format.set_font_name(font.name).set_font_size(font.size);
        if font.bold {
            format = format.set_bold();
        }
    }

    if let Some(style) = cell.border.left {
        format = format.set_border_left(border_style(style));
    }
    if let Some(style) = cell.border.right {
        format = format.set_border_right(border_style(style));
    }
    if let Some(style) = cell.border.top {
        format = format.set_border_top(border_style(style));
    }
    if let Some(style) = cell.border.bottom {
        format = format.set_border_bottom(border_style(style));
    }

    if let Some(alignment) = cell.alignment {
        format = format
            .set_align(horizontal_align(alignment.horizontal))
            .set_align(vertical_align(alignment.vertical));
        if alignment.wrap_text {
            format = format.set_text_wrap();
        }
    }

    format
}

fn border_style(style: BorderStyle) -> FormatBorder {
    match style {
        BorderStyle::Thin => FormatBorder::Thin,
        BorderStyle::Medium => FormatBorder::Medium,
    }
}

fn horizontal_align(align: HorizontalAlign) -> FormatAlign {
    match align {
        HorizontalAlign::General => FormatAlign::General,
        HorizontalAlign::Center => FormatAlign::Center,
    }
}

fn vertical_align(align: VerticalAlign) -> FormatAlign {
    match align {
        VerticalAlign::Bottom => FormatAlign::Bottom,
        VerticalAlign::Center => FormatAlign::VerticalCenter,
    }
}
