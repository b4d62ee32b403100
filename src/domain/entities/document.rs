use std::path::Path;

use crate::domain::entities::Sheet;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::BuildState;

/// Multi-sheet label document, one sheet per printed copy
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    sheets: Vec<Sheet>,
    state: BuildState,
}

impl Document {
    /// Create document in INIT state holding an empty "Sheet 1"
    pub fn new() -> Self {
        Self {
            sheets: vec![Sheet::new(Self::sheet_title(1))],
            state: BuildState::Init,
        }
    }

    /// Title of the sheet for 1-based copy number `copy`
    pub fn sheet_title(copy: u32) -> String {
        format!("Sheet {}", copy)
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Move to `to`, rejecting out-of-order transitions
    pub fn advance(&mut self, to: BuildState) -> Result<(), DomainError> {
        if !self.state.can_transition_to(to) {
            return Err(DomainError::InvalidStateTransition {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheets_mut(&mut self) -> &mut [Sheet] {
        &mut self.sheets
    }

    pub fn first_sheet(&self) -> &Sheet {
        &self.sheets[0]
    }

    pub fn first_sheet_mut(&mut self) -> &mut Sheet {
        &mut self.sheets[0]
    }

    pub fn push_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn sheet(&self, title: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.title() == title)
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Paths of the QR rasters referenced by the sheets
    pub fn image_paths(&self) -> Vec<&Path> {
        self.sheets
            .iter()
            .filter_map(|s| s.image().map(|img| img.path.as_path()))
            .collect()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
