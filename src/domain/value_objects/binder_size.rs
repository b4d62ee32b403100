use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Physical binder thickness in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BinderSize {
    OneCm,
    ThreeCm,
    FiveCm,
    SevenCm,
}

impl BinderSize {
    pub const ALL: [BinderSize; 4] = [
        BinderSize::OneCm,
        BinderSize::ThreeCm,
        BinderSize::FiveCm,
        BinderSize::SevenCm,
    ];

    pub fn from_cm(cm: u32) -> Result<Self, DomainError> {
        match cm {
            1 => Ok(BinderSize::OneCm),
            3 => Ok(BinderSize::ThreeCm),
            5 => Ok(BinderSize::FiveCm),
            7 => Ok(BinderSize::SevenCm),
            other => Err(DomainError::InvalidBinderSize(other.to_string())),
        }
    }

    pub fn cm(&self) -> u32 {
        match self {
            BinderSize::OneCm => 1,
            BinderSize::ThreeCm => 3,
            BinderSize::FiveCm => 5,
            BinderSize::SevenCm => 7,
        }
    }
}

impl TryFrom<u32> for BinderSize {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_cm(value)
    }
}

impl From<BinderSize> for u32 {
    fn from(size: BinderSize) -> Self {
        size.cm()
    }
}

impl std::fmt::Display for BinderSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}cm", self.cm())
    }
}

impl std::str::FromStr for BinderSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u32>()
            .map_err(|_| DomainError::InvalidBinderSize(trimmed.to_string()))
            .and_then(Self::from_cm)
    }
}
