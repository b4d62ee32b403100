use std::ops::RangeInclusive;

use crate::domain::value_objects::{BinderSize, CellRef, DocumentVariant};

/// QR raster edge length in pixels, for every binder size
pub const QR_IMAGE_SIZE: u32 = 75;

/// Columns `B..=M`, resized per binder so the QR block fits the spine
pub const QR_COLUMNS: RangeInclusive<u16> = CellRef::column("B")..=CellRef::column("M");

/// QR placement for one binder size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSpec {
    pub binder_size: BinderSize,
    /// Width applied to every column in [`QR_COLUMNS`]
    pub column_width: f64,
    pub equipment_anchor: CellRef,
    /// Project labels are never built for 1cm binders; the entry is kept
    /// so the table stays total.
    pub project_anchor: CellRef,
}

pub static LAYOUT_TABLE: [LayoutSpec; 4] = [
    LayoutSpec {
        binder_size: BinderSize::SevenCm,
        column_width: 1.875,
        equipment_anchor: CellRef::a1("E9"),
        project_anchor: CellRef::a1("E8"),
    },
    LayoutSpec {
        binder_size: BinderSize::FiveCm,
        column_width: 1.25,
        equipment_anchor: CellRef::a1("D9"),
        project_anchor: CellRef::a1("D8"),
    },
    LayoutSpec {
        binder_size: BinderSize::ThreeCm,
        column_width: 1.0,
        equipment_anchor: CellRef::a1("D9"),
        project_anchor: CellRef::a1("D8"),
    },
    LayoutSpec {
        binder_size: BinderSize::OneCm,
        column_width: 0.75,
        equipment_anchor: CellRef::a1("B9"),
        project_anchor: CellRef::a1("B9"),
    },
];

impl LayoutSpec {
    pub fn for_binder(binder_size: BinderSize) -> &'static LayoutSpec {
        match binder_size {
            BinderSize::SevenCm => &LAYOUT_TABLE[0],
            BinderSize::FiveCm => &LAYOUT_TABLE[1],
            BinderSize::ThreeCm => &LAYOUT_TABLE[2],
            BinderSize::OneCm => &LAYOUT_TABLE[3],
        }
    }

    pub fn anchor(&self, variant: DocumentVariant) -> CellRef {
        match variant {
            DocumentVariant::Equipment => self.equipment_anchor,
            DocumentVariant::Project => self.project_anchor,
        }
    }
}
