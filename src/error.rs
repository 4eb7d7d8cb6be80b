use thiserror::Error;

use crate::arms::ArmId;

/// Errors raised by bandit construction and observation ingestion
///
/// Every error is detected before any state is mutated, so a failed call leaves the bandit untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BanditError {
    #[error("unknown arm id {arm}. Known arm ids: {}", format_ids(.known))]
    UnknownArm { arm: ArmId, known: Vec<ArmId> },
    #[error("duplicate arm id {0}")]
    DuplicateArmId(ArmId),
    #[error("shape mismatch for `{what}`: expected length {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("index {index} out of range for {len} arms")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("a bandit needs at least one arm")]
    NoArms,
    #[error("{0} needs per-arm sums of squared rewards")]
    MissingSquaredRewards(&'static str),
    #[error("unknown UCB algorithm `{0}`")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, BanditError>;

fn format_ids(ids: &[ArmId]) -> String {
    let inner = ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

/// Check that a vector has the expected length
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    (expected == actual)
        .then_some(())
        .ok_or(BanditError::ShapeMismatch {
            what,
            expected,
            actual,
        })
}
