//! Construction errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the ways a board configuration can fail to produce geometry
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// (ZeroBendAngle) A curvature angle is zero, so its arc radius is undefined
    ZeroBendAngle { name: &'static str },
    /// (TooFewRows) The placement formulas need at least three rows
    TooFewRows(usize),
    /// (NoColumns) A board needs at least one column
    NoColumns,
    /// (CenterColumnOutOfRange) The neutral column does not exist on this board
    CenterColumnOutOfRange { centercol: usize, ncols: usize },
    /// (NonPositive) A length that must be strictly positive is not
    NonPositive { name: &'static str, value: Real },
    /// (NonFinite) An angle or offset is NaN or infinite
    NonFinite { name: &'static str, value: Real },
    /// (UnsupportedSwitchType) Unknown switch family name
    UnsupportedSwitchType(String),
    /// (UnsupportedKeycapWidth) No keycap preset exists for this width
    UnsupportedKeycapWidth(Real),
    /// Anything the configuration loader rejected (missing key, wrong type)
    Config(String),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::ZeroBendAngle { name } => write!(f, "(ZeroBendAngle) `{}` must be nonzero to bend the key well", name),
            BoardError::TooFewRows(nrows) => write!(f, "(TooFewRows) boards need at least 3 rows, got {}", nrows),
            BoardError::NoColumns => write!(f, "(NoColumns) boards need at least 1 column"),
            BoardError::CenterColumnOutOfRange { centercol, ncols } => write!(f, "(CenterColumnOutOfRange) centercol {} is outside 0..{}", centercol, ncols),
            BoardError::NonPositive { name, value } => write!(f, "(NonPositive) `{}` must be > 0, got {}", name, value),
            BoardError::NonFinite { name, value } => write!(f, "(NonFinite) `{}` must be finite, got {}", name, value),
            BoardError::UnsupportedSwitchType(name) => write!(f, "(UnsupportedSwitchType) unknown switch type `{}`", name),
            BoardError::UnsupportedKeycapWidth(units) => write!(f, "(UnsupportedKeycapWidth) no keycap preset for {}u", units),
            BoardError::Config(msg) => write!(f, "(Config) {}", msg),
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}
