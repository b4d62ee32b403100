mod document;
mod label_request;
mod sheet;

pub use document::Document;
pub use label_request::{EquipmentFields, LabelFields, LabelRequest, ProjectFields};
pub use sheet::{
    Alignment, Border, BorderStyle, Cell, CellValue, Font, HorizontalAlign, Sheet, SheetImage,
    VerticalAlign,
};
