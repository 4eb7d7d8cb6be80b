/// UCB scoring algorithms
pub mod algo;

/// Arm ids, arm-id resolution and sparse placement of per-arm values
pub mod arms;

/// Stateful bandits accumulating per-arm observations
pub mod bandit;

/// Error types
pub mod error;

/// Simulated k-armed bandit environments
pub mod testbed;

/// Conversions for per-arm input vectors
pub mod traits;

mod util;

#[cfg(test)]
mod testing;

pub use algo::{get_bernoulli_tuned_ucb_scores, Ucb};
pub use arms::{ArmId, Arms};
pub use bandit::{BanditConfig, UcbBandit};
pub use error::{BanditError, Result};
