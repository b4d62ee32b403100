use crate::domain::entities::CellValue;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{BinderSize, DocumentVariant, LabelField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentFields {
    pub unit_number: String,
    pub doc_number: String,
    pub doc_title: String,
    pub department: String,
    pub year: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    pub project_number: String,
    pub test_number: String,
    pub doc_title: String,
    pub writer: String,
}

/// Variant-specific label content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelFields {
    Equipment(EquipmentFields),
    Project(ProjectFields),
}

impl LabelFields {
    pub fn variant(&self) -> DocumentVariant {
        match self {
            LabelFields::Equipment(_) => DocumentVariant::Equipment,
            LabelFields::Project(_) => DocumentVariant::Project,
        }
    }

    /// Natural key of the document, used to name output files
    pub fn base_identifier(&self) -> &str {
        match self {
            LabelFields::Equipment(fields) => &fields.doc_number,
            LabelFields::Project(fields) => &fields.test_number,
        }
    }

    pub fn doc_title(&self) -> &str {
        match self {
            LabelFields::Equipment(fields) => &fields.doc_title,
            LabelFields::Project(fields) => &fields.doc_title,
        }
    }

    /// Cell value for `field`, or `None` when the variant has no such field
    pub fn value(&self, field: LabelField) -> Option<CellValue> {
        let text = |s: &str| Some(CellValue::Text(s.to_string()));
        match (self, field) {
            (LabelFields::Equipment(f), LabelField::UnitNumber) => text(&f.unit_number),
            (LabelFields::Equipment(f), LabelField::DocNumber) => text(&f.doc_number),
            (LabelFields::Equipment(f), LabelField::DocTitle) => text(&f.doc_title),
            (LabelFields::Equipment(f), LabelField::Department) => text(&f.department),
            (LabelFields::Equipment(f), LabelField::Year) => {
                Some(CellValue::Number(i64::from(f.year)))
            }
            (LabelFields::Project(f), LabelField::ProjectNumber) => text(&f.project_number),
            (LabelFields::Project(f), LabelField::TestNumber) => text(&f.test_number),
            (LabelFields::Project(f), LabelField::DocTitle) => text(&f.doc_title),
            (LabelFields::Project(f), LabelField::Writer) => text(&f.writer),
            (LabelFields::Project(f), LabelField::ProjectHeading) => Some(CellValue::Text(
                format!("[{}] {}", f.project_number, f.test_number),
            )),
            _ => None,
        }
    }
}

/// Validated label build request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRequest {
    binder_size: BinderSize,
    copy_count: u32,
    fields: LabelFields,
}

impl LabelRequest {
    /// Fails when the variant cannot be printed for `binder_size`.
    /// `copy_count` is clamped to at least one copy.
    pub fn new(
        binder_size: BinderSize,
        copy_count: u32,
        fields: LabelFields,
    ) -> Result<Self, DomainError> {
        let variant = fields.variant();
        if !variant.accepts(binder_size) {
            return Err(DomainError::IncompatibleBinderSize {
                variant,
                binder_size,
                min: variant.min_binder_size(),
            });
        }

        Ok(Self {
            binder_size,
            copy_count: copy_count.max(1),
            fields,
        })
    }

    pub fn variant(&self) -> DocumentVariant {
        self.fields.variant()
    }

    pub fn binder_size(&self) -> BinderSize {
        self.binder_size
    }

    pub fn copy_count(&self) -> u32 {
        self.copy_count
    }

    /// Clamp the copy count to `max` (itself at least one)
    pub fn with_copy_limit(mut self, max: u32) -> Self {
        self.copy_count = self.copy_count.min(max.max(1));
        self
    }

    pub fn fields(&self) -> &LabelFields {
        &self.fields
    }

    pub fn base_identifier(&self) -> &str {
        self.fields.base_identifier()
    }
}
