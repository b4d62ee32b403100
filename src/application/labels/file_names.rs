//! Naming rules for generated files

use chrono::NaiveDateTime;

pub const DOCUMENT_EXTENSION: &str = "xlsx";
pub const QR_IMAGE_EXTENSION: &str = "png";

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
const RESERVED: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Replace path separators, control characters and characters reserved on
/// common filesystems with `_`
pub fn sanitize_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_control() || RESERVED.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// `{base_identifier}_{YYYYmmddHHMMSS}.xlsx`
pub fn document_file_name(base_identifier: &str, at: NaiveDateTime) -> String {
    format!(
        "{}_{}.{}",
        sanitize_component(base_identifier),
        at.format(TIMESTAMP_FORMAT),
        DOCUMENT_EXTENSION
    )
}

/// `{base_identifier}_{sheet_title}.png`
pub fn qr_image_file_name(base_identifier: &str, sheet_title: &str) -> String {
    format!(
        "{}_{}.{}",
        sanitize_component(base_identifier),
        sanitize_component(sheet_title),
        QR_IMAGE_EXTENSION
    )
}

/// True for a bare file name that cannot escape its directory
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.chars().any(|c| c.is_control() || c == '/' || c == '\\')
}
