use thiserror::Error;

use crate::euler::Axis;

/// Reason an Euler sequence was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The sequence does not name exactly three axes.
    #[error("expected 3 axes, got {0}")]
    Length(usize),

    /// The sequence contains a character other than `X`, `Y` or `Z`.
    #[error("unknown axis {0:?}")]
    UnknownAxis(char),

    /// The sequence names the same axis more than once.
    #[error("axis {0} appears more than once")]
    RepeatedAxis(Axis),
}

/// An error type for the versor crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersorError {
    /// The Euler sequence is not a permutation of `X`, `Y` and `Z`.
    #[error("Invalid Euler sequence {sequence:?}: {reason}")]
    InvalidSequence {
        /// The sequence as given by the caller.
        sequence: String,
        /// Why the sequence was rejected.
        reason: SequenceError,
    },
}

impl VersorError {
    pub(crate) fn invalid_sequence(sequence: &str, reason: SequenceError) -> Self {
        log::debug!("rejecting Euler sequence {sequence:?}: {reason}");
        Self::InvalidSequence {
            sequence: sequence.to_string(),
            reason,
        }
    }
}
