//! Request validation for label builds
//!
//! Checks run in a fixed order (document type, binder size, compatibility,
//! required text fields) and the first failure is reported. Numeric fields
//! never fail: unusable input falls back to a default.

use std::str::FromStr;

use crate::application::dto::RawLabelInput;
use crate::application::errors::LabelError;
use crate::domain::entities::{EquipmentFields, LabelFields, LabelRequest, ProjectFields};
use crate::domain::value_objects::{BinderSize, DocumentVariant, LabelField};

pub const DOC_TYPE_KEY: &str = "doc_type";
pub const BINDER_SIZE_KEY: &str = "binder_size";
pub const COPY_COUNT_KEY: &str = "copy_count";

const DEFAULT_COPY_COUNT: u32 = 1;

/// Required text fields, in the order a missing one is reported
pub fn required_fields(variant: DocumentVariant) -> &'static [LabelField] {
    match variant {
        DocumentVariant::Equipment => &[
            LabelField::UnitNumber,
            LabelField::DocNumber,
            LabelField::DocTitle,
            LabelField::Department,
        ],
        DocumentVariant::Project => &[
            LabelField::ProjectNumber,
            LabelField::TestNumber,
            LabelField::DocTitle,
            LabelField::Writer,
        ],
    }
}

/// Strip embedded line breaks, then trim
pub fn clean_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Parse a positive count, falling back to `default` for anything that is
/// not a plain run of digits fitting `u32`. Never returns less than 1.
pub fn coerce_count(raw: Option<&str>, default: u32) -> u32 {
    raw.map(clean_text)
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(default)
        .max(1)
}

/// Validate raw input into a [`LabelRequest`].
///
/// `current_year` is the fallback for a missing or unusable `year`.
pub fn validate_label_input(
    raw: &RawLabelInput,
    current_year: u32,
) -> Result<LabelRequest, LabelError> {
    let text = |key: &str| clean_text(raw.get(key).unwrap_or_default());

    let variant = DocumentVariant::from_str(&text(DOC_TYPE_KEY))?;
    let binder_size = BinderSize::from_str(&text(BINDER_SIZE_KEY))?;
    if !variant.accepts(binder_size) {
        return Err(LabelError::IncompatibleBinderSize {
            variant,
            binder_size,
            min: variant.min_binder_size(),
        });
    }

    if let Some(missing) = required_fields(variant)
        .iter()
        .find(|field| text(field.key()).is_empty())
    {
        return Err(LabelError::MissingField(missing.key().to_string()));
    }

    let copy_count = coerce_count(raw.get(COPY_COUNT_KEY), DEFAULT_COPY_COUNT);
    let fields = match variant {
        DocumentVariant::Equipment => LabelFields::Equipment(EquipmentFields {
            unit_number: text(LabelField::UnitNumber.key()),
            doc_number: text(LabelField::DocNumber.key()),
            doc_title: text(LabelField::DocTitle.key()),
            department: text(LabelField::Department.key()),
            year: coerce_count(raw.get(LabelField::Year.key()), current_year),
        }),
        DocumentVariant::Project => LabelFields::Project(ProjectFields {
            project_number: text(LabelField::ProjectNumber.key()),
            test_number: text(LabelField::TestNumber.key()),
            doc_title: text(LabelField::DocTitle.key()),
            writer: text(LabelField::Writer.key()),
        }),
    };

    Ok(LabelRequest::new(binder_size, copy_count, fields)?)
}
