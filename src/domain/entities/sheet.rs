use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::value_objects::{CellRange, CellRef};

/// Value held by a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    Thin,
    Medium,
}

/// Per-side cell border. `None` leaves a side undrawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Border {
    pub left: Option<BorderStyle>,
    pub right: Option<BorderStyle>,
    pub top: Option<BorderStyle>,
    pub bottom: Option<BorderStyle>,
}

impl Border {
    pub const NONE: Border = Border {
        left: None,
        right: None,
        top: None,
        bottom: None,
    };

    pub const fn all(style: BorderStyle) -> Self {
        Self {
            left: Some(style),
            right: Some(style),
            top: Some(style),
            bottom: Some(style),
        }
    }

    pub const fn with_left(mut self, style: BorderStyle) -> Self {
        self.left = Some(style);
        self
    }

    pub const fn with_right(mut self, style: BorderStyle) -> Self {
        self.right = Some(style);
        self
    }

    pub const fn with_top(mut self, style: BorderStyle) -> Self {
        self.top = Some(style);
        self
    }

    pub const fn with_bottom(mut self, style: BorderStyle) -> Self {
        self.bottom = Some(style);
        self
    }

    /// Lay `other` over `self`; sides set in `other` win
    pub fn overlay(self, other: Border) -> Border {
        Border {
            left: other.left.or(self.left),
            right: other.right.or(self.right),
            top: other.top.or(self.top),
            bottom: other.bottom.or(self.bottom),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Border::NONE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub name: &'static str,
    pub size: f64,
    pub bold: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    General,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Bottom,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
    pub wrap_text: bool,
}

impl Alignment {
    pub const CENTERED_WRAP: Alignment = Alignment {
        horizontal: HorizontalAlign::Center,
        vertical: VerticalAlign::Center,
        wrap_text: true,
    };
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub value: Option<CellValue>,
    pub font: Option<Font>,
    pub border: Border,
    pub alignment: Option<Alignment>,
}

/// QR raster placed on a sheet. The file at `path` is read when the
/// document is serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetImage {
    pub path: PathBuf,
    pub anchor: CellRef,
    pub width: u32,
    pub height: u32,
    pub payload: String,
}

/// One printed label copy: a sparse cell grid plus its geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    title: String,
    cells: BTreeMap<CellRef, Cell>,
    merges: Vec<CellRange>,
    row_heights: BTreeMap<u32, f64>,
    column_widths: BTreeMap<u16, f64>,
    print_area: Option<CellRange>,
    image: Option<SheetImage>,
}

impl Sheet {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cells: BTreeMap::new(),
            merges: Vec::new(),
            row_heights: BTreeMap::new(),
            column_widths: BTreeMap::new(),
            print_area: None,
            image: None,
        }
    }

    /// Copy grid, merges, borders, fonts and geometry under a new title.
    /// The QR image is not carried over.
    pub fn duplicate(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: None,
            ..self.clone()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    // Geometry

    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
    }

    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.row_heights.get(&row).copied()
    }

    pub fn row_heights(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.row_heights.iter().map(|(row, height)| (*row, *height))
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn column_width(&self, col: u16) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    pub fn column_widths(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.column_widths.iter().map(|(col, width)| (*col, *width))
    }

    pub fn set_print_area(&mut self, range: CellRange) {
        self.print_area = Some(range);
    }

    pub fn print_area(&self) -> Option<CellRange> {
        self.print_area
    }

    // Merges

    pub fn merge(&mut self, range: CellRange) {
        if !self.merges.contains(&range) {
            self.merges.push(range);
        }
    }

    pub fn merges(&self) -> &[CellRange] {
        &self.merges
    }

    pub fn merge_containing(&self, cell: CellRef) -> Option<CellRange> {
        self.merges.iter().copied().find(|m| m.contains(cell))
    }

    // Cells

    fn cell_mut(&mut self, cell: CellRef) -> &mut Cell {
        self.cells.entry(cell).or_default()
    }

    pub fn cell(&self, cell: CellRef) -> Option<&Cell> {
        self.cells.get(&cell)
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.cells.iter().map(|(at, cell)| (*at, cell))
    }

    pub fn write(&mut self, cell: CellRef, value: CellValue, font: Font) {
        let target = self.cell_mut(cell);
        target.value = Some(value);
        target.font = Some(font);
    }

    pub fn set_value(&mut self, cell: CellRef, value: CellValue) {
        self.cell_mut(cell).value = Some(value);
    }

    pub fn value(&self, cell: CellRef) -> Option<&CellValue> {
        self.cells.get(&cell).and_then(|c| c.value.as_ref())
    }

    /// Rendered value of a cell; empty when the cell holds nothing
    pub fn text(&self, cell: CellRef) -> String {
        self.value(cell).map(ToString::to_string).unwrap_or_default()
    }

    /// Overlay `border` on every cell of `range`
    pub fn apply_border(&mut self, range: CellRange, border: Border) {
        for at in range.cells() {
            let cell = self.cell_mut(at);
            cell.border = cell.border.overlay(border);
        }
    }

    /// Smallest block holding every touched cell
    pub fn used_range(&self) -> Option<CellRange> {
        let mut keys = self.cells.keys();
        let first = *keys.next()?;
        let (mut min_col, mut max_col) = (first.col(), first.col());
        let mut max_row = first.row();
        for at in keys {
            min_col = min_col.min(at.col());
            max_col = max_col.max(at.col());
            max_row = max_row.max(at.row());
        }
        Some(CellRange::new(
            CellRef::new(first.row(), min_col),
            CellRef::new(max_row, max_col),
        ))
    }

    /// Set `alignment` on every cell of the used range, filling gaps
    pub fn apply_alignment(&mut self, alignment: Alignment) {
        let Some(range) = self.used_range() else {
            return;
        };
        for at in range.cells() {
            self.cell_mut(at).alignment = Some(alignment);
        }
    }

    // Image

    pub fn place_image(&mut self, image: SheetImage) {
        self.image = Some(image);
    }

    pub fn image(&self) -> Option<&SheetImage> {
        self.image.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_font() -> Font {
        Font {
            name: "Times New Roman",
            size: 12.0,
            bold: true,
        }
    }

    #[test]
    fn test_border_overlay_keeps_unset_sides() {
        let left = Border::NONE.with_left(BorderStyle::Medium);
        let top = Border::NONE.with_top(BorderStyle::Medium);
        let corner = left.overlay(top);
        assert_eq!(corner.left, Some(BorderStyle::Medium));
        assert_eq!(corner.top, Some(BorderStyle::Medium));
        assert_eq!(corner.right, None);
        assert!(Border::NONE.is_empty());
    }

    #[test]
    fn test_border_overlay_later_side_wins() {
        let thin = Border::all(BorderStyle::Thin);
        let combined = thin.overlay(Border::NONE.with_bottom(BorderStyle::Medium));
        assert_eq!(combined.bottom, Some(BorderStyle::Medium));
        assert_eq!(combined.top, Some(BorderStyle::Thin));
    }

    #[test]
    fn test_apply_border_over_range() {
        let mut sheet = Sheet::new("Sheet 1");
        sheet.apply_border(CellRange::a1("A1:A3"), Border::NONE.with_left(BorderStyle::Medium));
        sheet.apply_border(CellRange::a1("A1:C1"), Border::NONE.with_top(BorderStyle::Medium));

        let corner = sheet.cell(CellRef::a1("A1")).unwrap().border;
        assert_eq!(corner.left, Some(BorderStyle::Medium));
        assert_eq!(corner.top, Some(BorderStyle::Medium));
        assert_eq!(
            sheet.cell(CellRef::a1("A3")).unwrap().border,
            Border::NONE.with_left(BorderStyle::Medium)
        );
    }

    #[test]
    fn test_used_range_and_alignment_fill() {
        let mut sheet = Sheet::new("Sheet 1");
        sheet.write(CellRef::a1("B2"), CellValue::Text("x".into()), body_font());
        sheet.apply_border(CellRange::a1("D4"), Border::all(BorderStyle::Thin));

        assert_eq!(sheet.used_range(), Some(CellRange::a1("B2:D4")));

        sheet.apply_alignment(Alignment::CENTERED_WRAP);
        let cells: Vec<_> = CellRange::a1("B2:D4").cells().collect();
        assert_eq!(cells.len(), 9);
        for at in cells {
            assert_eq!(
                sheet.cell(at).unwrap().alignment,
                Some(Alignment::CENTERED_WRAP)
            );
        }
    }

    #[test]
    fn test_empty_sheet_has_no_used_range() {
        let mut sheet = Sheet::new("Sheet 1");
        assert_eq!(sheet.used_range(), None);
        sheet.apply_alignment(Alignment::CENTERED_WRAP);
        assert_eq!(sheet.cells().count(), 0);
    }

    #[test]
    fn test_duplicate_drops_image_and_renames() {
        let mut sheet = Sheet::new("Sheet 1");
        sheet.merge(CellRange::a1("B2:M2"));
        sheet.write(CellRef::a1("B2"), CellValue::Text("U1".into()), body_font());
        sheet.set_row_height(3, 216.0);
        sheet.place_image(SheetImage {
            path: PathBuf::from("/tmp/qr.png"),
            anchor: CellRef::a1("D9"),
            width: 75,
            height: 75,
            payload: "U1".into(),
        });

        let copy = sheet.duplicate("Sheet 2");
        assert_eq!(copy.title(), "Sheet 2");
        assert!(copy.image().is_none());
        assert_eq!(copy.merges(), sheet.merges());
        assert_eq!(copy.text(CellRef::a1("B2")), "U1");
        assert_eq!(copy.row_height(3), Some(216.0));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut sheet = Sheet::new("Sheet 1");
        sheet.merge(CellRange::a1("B2:M2"));
        sheet.merge(CellRange::a1("B2:M2"));
        assert_eq!(sheet.merges().len(), 1);
        assert_eq!(
            sheet.merge_containing(CellRef::a1("F2")),
            Some(CellRange::a1("B2:M2"))
        );
        assert_eq!(sheet.merge_containing(CellRef::a1("F3")), None);
    }

    #[test]
    fn test_number_renders_plain_decimal() {
        assert_eq!(CellValue::Number(2024).to_string(), "2024");
        assert_eq!(CellValue::Number(1000000).to_string(), "1000000");
    }
}
