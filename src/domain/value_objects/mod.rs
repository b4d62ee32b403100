mod binder_size;
mod build_state;
mod cell_ref;
mod copy_counter;
mod document_variant;
mod label_field;

pub use binder_size::BinderSize;
pub use build_state::BuildState;
pub use cell_ref::{CellRange, CellRef};
pub use copy_counter::CopyCounter;
pub use document_variant::DocumentVariant;
pub use label_field::LabelField;
