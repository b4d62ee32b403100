use crate::domain::entities::{LabelRequest, Sheet};
use crate::domain::layout::SheetTemplate;
use crate::domain::value_objects::CopyCounter;

pub const PAYLOAD_SEPARATOR: char = '|';

/// Text encoded into one sheet's QR symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QrPayload(String);

impl QrPayload {
    /// Read the payload cells of a populated sheet, in template order
    pub fn from_sheet(sheet: &Sheet, template: &SheetTemplate) -> Self {
        Self::join(template.payload_cells.iter().map(|cell| sheet.text(*cell)))
    }

    /// Payload the sheet for `counter` will carry, derived from the request
    /// without building the sheet
    pub fn for_request(request: &LabelRequest, counter: CopyCounter) -> Self {
        let template = SheetTemplate::for_variant(request.variant());
        Self::join(template.payload_cells.iter().map(|cell| {
            if template.counters.iter().any(|slot| slot.cell == *cell) {
                return counter.to_string();
            }
            template
                .fields
                .iter()
                .find(|slot| slot.cell == *cell)
                .and_then(|slot| request.fields().value(slot.field))
                .map(|value| value.to_string())
                .unwrap_or_default()
        }))
    }

    fn join(parts: impl Iterator<Item = String>) -> Self {
        let mut payload = String::new();
        for (i, part) in parts.enumerate() {
            if i > 0 {
                payload.push(PAYLOAD_SEPARATOR);
            }
            payload.push_str(&part);
        }
        Self(payload)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for QrPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
