use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// How far a buffer-level conversion got.
///
/// `read` and `written` are cursor positions: the source can be resumed at
/// `read` and the first `written` destination units are valid output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionReport {
    /// Code points converted.
    pub code_points: usize,
    /// Source units consumed.
    pub read: usize,
    /// Destination units written.
    pub written: usize,
    /// Why the conversion ended.
    pub stop: StopReason,
}

/// The condition that ended a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopReason {
    /// Every unit up to the source bound was converted.
    #[default]
    SourceExhausted,
    /// A zero unit was reached in the source.
    Terminator,
    /// The next code point does not fit in the destination.
    DestinationFull,
    /// The sequence at `offset` could not be converted.
    Malformed {
        /// Source index of the first unit of the bad sequence.
        offset: usize,
        /// What was wrong with it.
        error: ConvertError,
    },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::SourceExhausted => f.write_str("source exhausted"),
            StopReason::Terminator => f.write_str("terminator"),
            StopReason::DestinationFull => f.write_str("destination full"),
            StopReason::Malformed { offset, error } => {
                write!(f, "malformed input at offset {offset}: {error}")
            }
        }
    }
}

impl ConversionReport {
    /// Whether the whole logical source was converted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(
            self.stop,
            StopReason::SourceExhausted | StopReason::Terminator
        )
    }

    /// The error that halted the conversion, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ConvertError> {
        match &self.stop {
            StopReason::Malformed { error, .. } => Some(error),
            _ => None,
        }
    }
}
