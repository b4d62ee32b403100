/// Stages of a label document build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildState {
    /// Empty document with its first sheet
    Init,
    /// Row/column template and borders applied to sheet 1
    LayoutApplied,
    /// Sheets `1..=copy` exist and are filled
    Populated(u32),
    /// Every sheet carries its QR image
    QrApplied,
    /// Written to disk
    Serialized,
    /// Handed back to the caller
    Done,
}

impl BuildState {
    /// Check if transition is valid
    pub fn can_transition_to(&self, target: BuildState) -> bool {
        match (*self, target) {
            (BuildState::Init, BuildState::LayoutApplied) => true,
            (BuildState::LayoutApplied, BuildState::Populated(1)) => true,
            (BuildState::Populated(copy), BuildState::Populated(next)) => next == copy + 1,
            (BuildState::Populated(_), BuildState::QrApplied) => true,
            (BuildState::QrApplied, BuildState::Serialized) => true,
            (BuildState::Serialized, BuildState::Done) => true,
            _ => false,
        }
    }
}
