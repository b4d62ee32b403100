use std::path::PathBuf;

use crate::application::labels::payload::QrPayload;
use crate::application::ports::{QrEncoder, QrEncodingError};
use crate::domain::entities::{Alignment, CellValue, LabelRequest, Sheet, SheetImage};
use crate::domain::layout::{
    LayoutSpec, RowBand, SheetTemplate, BASE_BORDERS, BASE_COLUMN_WIDTHS, BASE_MERGES,
    BASE_ROW_HEIGHTS, QR_COLUMNS, QR_IMAGE_SIZE,
};
use crate::domain::value_objects::CopyCounter;

/// Applies the static label geometry of one request to sheets
#[derive(Debug, Clone, Copy)]
pub struct SheetBuilder<'a> {
    request: &'a LabelRequest,
    template: &'static SheetTemplate,
    layout: &'static LayoutSpec,
}

impl<'a> SheetBuilder<'a> {
    pub fn new(request: &'a LabelRequest) -> Self {
        Self {
            request,
            template: SheetTemplate::for_variant(request.variant()),
            layout: LayoutSpec::for_binder(request.binder_size()),
        }
    }

    pub fn template(&self) -> &'static SheetTemplate {
        self.template
    }

    /// Row heights, column widths, merges, borders and print area
    pub fn apply_layout(&self, sheet: &mut Sheet) {
        for band in BASE_ROW_HEIGHTS.iter().chain(self.template.row_heights) {
            apply_row_band(sheet, band);
        }
        for (col, width) in BASE_COLUMN_WIDTHS.iter().chain(self.template.column_widths) {
            sheet.set_column_width(*col, *width);
        }
        for range in BASE_MERGES.iter().chain(self.template.merges) {
            sheet.merge(*range);
        }
        for pass in BASE_BORDERS.iter().chain(self.template.borders) {
            sheet.apply_border(pass.range, pass.border);
        }
        if let Some(area) = self.template.print_area {
            sheet.set_print_area(area);
        }
    }

    /// Write field values and the copy counter, then align every cell
    pub fn populate(&self, sheet: &mut Sheet, counter: CopyCounter) {
        for slot in self.template.fields {
            if let Some(value) = self.request.fields().value(slot.field) {
                sheet.write(slot.cell, value, slot.font.font());
            }
        }
        self.write_counter(sheet, counter);
        sheet.apply_alignment(Alignment::CENTERED_WRAP);
    }

    /// Write `"i/N"` into every counter cell of the template
    pub fn write_counter(&self, sheet: &mut Sheet, counter: CopyCounter) {
        let text = counter.to_string();
        for slot in self.template.counters {
            sheet.write(slot.cell, CellValue::Text(text.clone()), slot.font.font());
        }
    }

    /// Resize the QR-spanning columns for the binder size
    pub fn apply_qr_columns(&self, sheet: &mut Sheet) {
        for col in QR_COLUMNS {
            sheet.set_column_width(col, self.layout.column_width);
        }
    }

    /// Encode the sheet's payload to `image_path` and anchor the image
    pub fn apply_qr(
        &self,
        sheet: &mut Sheet,
        encoder: &dyn QrEncoder,
        image_path: PathBuf,
    ) -> Result<(), QrEncodingError> {
        let payload = QrPayload::from_sheet(sheet, self.template);
        encoder.encode_to_file(payload.as_str(), &image_path)?;
        sheet.place_image(SheetImage {
            path: image_path,
            anchor: self.layout.anchor(self.request.variant()),
            width: QR_IMAGE_SIZE,
            height: QR_IMAGE_SIZE,
            payload: payload.into_string(),
        });
        Ok(())
    }
}

/// Template rows are 1-based, sheet rows zero-based
fn apply_row_band(sheet: &mut Sheet, band: &RowBand) {
    for row in band.first..=band.last {
        sheet.set_row_height(row - 1, band.height);
    }
}
