//! Static label geometry.
//!
//! Everything that positions content on a label lives here as data: the
//! per-binder QR placement table and the per-variant sheet templates.

mod binder_layout;
mod sheet_template;

pub use binder_layout::{LayoutSpec, LAYOUT_TABLE, QR_COLUMNS, QR_IMAGE_SIZE};
pub use sheet_template::{
    BorderPass, CounterSlot, FieldSlot, FontRole, RowBand, SheetTemplate, BASE_BORDERS,
    BASE_COLUMN_WIDTHS, BASE_MERGES, BASE_ROW_HEIGHTS, EQUIPMENT_TEMPLATE, PROJECT_TEMPLATE,
};
