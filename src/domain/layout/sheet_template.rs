use crate::domain::entities::{Border, BorderStyle, Font};
use crate::domain::value_objects::{CellRange, CellRef, DocumentVariant, LabelField};

const FONT_NAME: &str = "Times New Roman";

/// Typeface used by a template slot; all label text is bold serif
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    /// 12pt field text
    Body,
    /// 16pt document title
    Title,
    /// 20pt first line of the project summary block
    SummaryHeading,
    /// 13pt remaining lines of the project summary block
    SummaryLine,
}

impl FontRole {
    pub const fn font(self) -> Font {
        let size = match self {
            FontRole::Body => 12.0,
            FontRole::Title => 16.0,
            FontRole::SummaryHeading => 20.0,
            FontRole::SummaryLine => 13.0,
        };
        Font {
            name: FONT_NAME,
            size,
            bold: true,
        }
    }
}

/// Inclusive band of 1-based rows sharing one height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBand {
    pub first: u32,
    pub last: u32,
    pub height: f64,
}

const fn row(number: u32, height: f64) -> RowBand {
    RowBand {
        first: number,
        last: number,
        height,
    }
}

const fn rows(first: u32, last: u32, height: f64) -> RowBand {
    RowBand {
        first,
        last,
        height,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderPass {
    pub range: CellRange,
    pub border: Border,
}

const fn pass(range: &str, border: Border) -> BorderPass {
    BorderPass {
        range: CellRange::a1(range),
        border,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSlot {
    pub cell: CellRef,
    pub field: LabelField,
    pub font: FontRole,
}

const fn slot(cell: &str, field: LabelField, font: FontRole) -> FieldSlot {
    FieldSlot {
        cell: CellRef::a1(cell),
        field,
        font,
    }
}

/// Cell showing the `"i/N"` copy counter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSlot {
    pub cell: CellRef,
    pub font: FontRole,
}

const THIN: BorderStyle = BorderStyle::Thin;
const MEDIUM: BorderStyle = BorderStyle::Medium;
const NONE: Border = Border::NONE;

/// Row heights shared by both variants. Row 4 carries the title and
/// dominates; rows 8-17 hold the QR block.
pub const BASE_ROW_HEIGHTS: &[RowBand] = &[
    row(1, 2.25),
    row(2, 27.0),
    row(3, 27.0),
    row(4, 216.0),
    row(5, 40.5),
    row(6, 27.0),
    row(7, 27.0),
    rows(8, 17, 6.75),
    row(18, 2.25),
];

/// Narrow gutter columns either side of the label body
pub const BASE_COLUMN_WIDTHS: &[(u16, f64)] = &[
    (CellRef::column("A"), 0.375),
    (CellRef::column("N"), 0.375),
];

pub const BASE_MERGES: &[CellRange] = &[
    CellRange::a1("B2:M2"),
    CellRange::a1("B3:M3"),
    CellRange::a1("B4:M4"),
    CellRange::a1("B5:M5"),
    CellRange::a1("B6:M6"),
];

/// Thin grid over the field rows and the medium outer frame of A1:N18
pub const BASE_BORDERS: &[BorderPass] = &[
    pass("B2:M6", Border::all(THIN)),
    pass("A1:A18", NONE.with_left(MEDIUM)),
    pass("N1:N18", NONE.with_right(MEDIUM)),
    pass("A1:N1", NONE.with_top(MEDIUM)),
    pass("A18:N18", NONE.with_bottom(MEDIUM)),
];

/// Variant-specific part of a label sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetTemplate {
    pub variant: DocumentVariant,
    pub row_heights: &'static [RowBand],
    pub column_widths: &'static [(u16, f64)],
    pub merges: &'static [CellRange],
    pub borders: &'static [BorderPass],
    pub fields: &'static [FieldSlot],
    pub counters: &'static [CounterSlot],
    /// Cells joined with `|` to form the QR payload, in order
    pub payload_cells: &'static [CellRef],
    pub print_area: Option<CellRange>,
}

pub const EQUIPMENT_TEMPLATE: SheetTemplate = SheetTemplate {
    variant: DocumentVariant::Equipment,
    row_heights: &[],
    column_widths: &[],
    merges: &[CellRange::a1("B7:M7")],
    borders: &[
        pass("B2:M7", Border::all(THIN)),
        pass("B8:M8", NONE.with_top(THIN)),
        pass("B8:B17", NONE.with_left(THIN)),
        pass("M8:M17", NONE.with_right(THIN)),
        pass("B17:M17", NONE.with_bottom(THIN)),
    ],
    fields: &[
        slot("B2", LabelField::UnitNumber, FontRole::Body),
        slot("B3", LabelField::DocNumber, FontRole::Body),
        slot("B4", LabelField::DocTitle, FontRole::Title),
        slot("B6", LabelField::Department, FontRole::Body),
        slot("B7", LabelField::Year, FontRole::Body),
    ],
    counters: &[CounterSlot {
        cell: CellRef::a1("B5"),
        font: FontRole::Body,
    }],
    payload_cells: &[
        CellRef::a1("B2"),
        CellRef::a1("B3"),
        CellRef::a1("B4"),
        CellRef::a1("B6"),
        CellRef::a1("B7"),
        CellRef::a1("B5"),
    ],
    print_area: None,
};

pub const PROJECT_TEMPLATE: SheetTemplate = SheetTemplate {
    variant: DocumentVariant::Project,
    row_heights: &[
        row(20, 2.25),
        row(21, 48.0),
        row(22, 34.5),
        row(23, 27.75),
        row(24, 2.25),
    ],
    column_widths: &[
        (CellRef::column("N"), 0.375),
        (CellRef::column("O"), 0.375),
        (CellRef::column("P"), 0.375),
        (CellRef::column("Q"), 8.13),
        (CellRef::column("R"), 34.88),
        (CellRef::column("S"), 8.13),
        (CellRef::column("T"), 0.375),
    ],
    merges: &[CellRange::a1("Q21:S21"), CellRange::a1("Q22:S22")],
    borders: &[
        // Field block below the counter row
        pass("B7:M7", NONE.with_top(THIN)),
        pass("B7:B17", NONE.with_left(THIN)),
        pass("M7:M17", NONE.with_right(THIN)),
        pass("B17:M17", NONE.with_bottom(THIN)),
        // Right-hand summary block
        pass("Q20:S20", NONE.with_top(THIN).with_bottom(THIN)),
        pass("Q24:S24", NONE.with_top(THIN).with_bottom(THIN)),
        pass("P21:P23", NONE.with_left(THIN).with_right(THIN)),
        pass("T21:T23", NONE.with_left(THIN).with_right(THIN)),
        pass("P20", NONE.with_left(THIN).with_top(THIN)),
        pass("T20", NONE.with_right(THIN).with_top(THIN)),
        pass("P24", NONE.with_left(THIN).with_bottom(THIN)),
        pass("T24", NONE.with_right(THIN).with_bottom(THIN)),
        pass("Q22:S22", Border::all(THIN)),
    ],
    fields: &[
        slot("B2", LabelField::ProjectNumber, FontRole::Body),
        slot("B3", LabelField::TestNumber, FontRole::Body),
        slot("B4", LabelField::DocTitle, FontRole::Title),
        slot("B6", LabelField::Writer, FontRole::Body),
        slot("Q21", LabelField::ProjectHeading, FontRole::SummaryHeading),
        slot("Q22", LabelField::DocTitle, FontRole::SummaryLine),
        slot("R23", LabelField::Writer, FontRole::SummaryLine),
    ],
    counters: &[
        CounterSlot {
            cell: CellRef::a1("B5"),
            font: FontRole::Body,
        },
        CounterSlot {
            cell: CellRef::a1("S23"),
            font: FontRole::Body,
        },
    ],
    payload_cells: &[
        CellRef::a1("B2"),
        CellRef::a1("B3"),
        CellRef::a1("B4"),
        CellRef::a1("B6"),
        CellRef::a1("B5"),
    ],
    print_area: Some(CellRange::a1("A1:T24")),
};

impl SheetTemplate {
    pub fn for_variant(variant: DocumentVariant) -> &'static SheetTemplate {
        match variant {
            DocumentVariant::Equipment => &EQUIPMENT_TEMPLATE,
            DocumentVariant::Project => &PROJECT_TEMPLATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_row_heights_cover_rows_1_to_18() {
        let covered: Vec<u32> = BASE_ROW_HEIGHTS
            .iter()
            .flat_map(|band| band.first..=band.last)
            .collect();
        assert_eq!(covered, (1..=18).collect::<Vec<_>>());
    }

    #[test]
    fn test_title_row_dominates() {
        let title = BASE_ROW_HEIGHTS.iter().find(|b| b.first == 4).unwrap();
        assert!(BASE_ROW_HEIGHTS
            .iter()
            .filter(|b| b.first != 4)
            .all(|b| b.height < title.height));
    }

    #[test]
    fn test_templates_match_variant() {
        for variant in DocumentVariant::ALL {
            assert_eq!(SheetTemplate::for_variant(variant).variant, variant);
        }
    }

    #[test]
    fn test_counter_cells() {
        assert_eq!(EQUIPMENT_TEMPLATE.counters.len(), 1);
        let project: Vec<String> = PROJECT_TEMPLATE
            .counters
            .iter()
            .map(|c| c.cell.to_string())
            .collect();
        assert_eq!(project, vec!["B5", "S23"]);
    }

    #[test]
    fn test_payload_ends_with_counter() {
        for template in [&EQUIPMENT_TEMPLATE, &PROJECT_TEMPLATE] {
            assert_eq!(
                template.payload_cells.last(),
                Some(&template.counters[0].cell)
            );
        }
    }

    #[test]
    fn test_font_roles() {
        assert_eq!(FontRole::Body.font().size, 12.0);
        assert_eq!(FontRole::Title.font().size, 16.0);
        assert_eq!(FontRole::SummaryHeading.font().size, 20.0);
        assert_eq!(FontRole::SummaryLine.font().size, 13.0);
        assert!(FontRole::Title.font().bold);
    }
}
