use std::{fmt, str::FromStr};

use burn::tensor::{backend::Backend, Bool, Tensor};

use crate::{
    bandit::ArmStats,
    error::{BanditError, Result},
};

pub mod bernoulli;
mod metric;
mod tuned;
mod ucb1;

pub use bernoulli::get_bernoulli_tuned_ucb_scores;

/// The UCB scoring algorithms
///
/// Each variant is a pure function of the accumulated [`ArmStats`]. Every algorithm scores an arm
/// with zero observations as `+inf`, so unplayed arms are always chosen first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Ucb {
    /// UCB<sub>i</sub> = avg<sub>i</sub> + sqrt(2 ln(T+1) / n<sub>i</sub>)
    #[default]
    Ucb1,
    /// UCB-Tuned with a per-arm variance estimate built from the sums of squared rewards
    Tuned,
    /// UCB-Tuned for rewards in {0, 1}, where the squared rewards equal the rewards
    TunedBernoulli,
    /// UCB<sub>i</sub> = avg<sub>i</sub> + sqrt(avg<sub>i</sub> ln(T+1) / n<sub>i</sub>) + ln(T+1) / n<sub>i</sub>
    Metric,
}

impl Ucb {
    pub const ALL: [Ucb; 4] = [Ucb::Ucb1, Ucb::Tuned, Ucb::TunedBernoulli, Ucb::Metric];

    /// Whether the algorithm needs per-arm sums of squared rewards
    pub fn tracks_variance(&self) -> bool {
        matches!(self, Self::Tuned | Self::TunedBernoulli)
    }

    /// Compute the per-arm scores from the accumulated stats
    pub fn scores<B: Backend>(&self, stats: &ArmStats<B>) -> Tensor<B, 1> {
        let inputs = ScoreInputs::new(stats);
        let scores = match self {
            Self::Ucb1 => ucb1::scores(&inputs),
            Self::Tuned | Self::TunedBernoulli => tuned::scores(&inputs),
            Self::Metric => metric::scores(&inputs),
        };
        scores.mask_fill(inputs.unplayed, f64::INFINITY)
    }
}

impl fmt::Display for Ucb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ucb1 => "UCB1",
            Self::Tuned => "UCBTuned",
            Self::TunedBernoulli => "UCBTunedBernoulli",
            Self::Metric => "MetricUCB",
        })
    }
}

impl FromStr for Ucb {
    type Err = BanditError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        match name.as_str() {
            "ucb1" => Ok(Self::Ucb1),
            "ucbtuned" | "tuned" => Ok(Self::Tuned),
            "ucbtunedbernoulli" | "tunedbernoulli" => Ok(Self::TunedBernoulli),
            "metricucb" | "metric" => Ok(Self::Metric),
            _ => Err(BanditError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// ln(T+1) / n<sub>i</sub> for every arm
///
/// `T+1` keeps the log defined before any observation. Arms with `n_i = 0` come out as `inf`.
fn log_t_over_ni<B: Backend>(
    total_n_obs_all_arms: f64,
    n_obs_per_arm: &Tensor<B, 1>,
) -> Tensor<B, 1> {
    let log_t = (total_n_obs_all_arms + 1.0).ln();
    Tensor::<B, 1>::ones(n_obs_per_arm.shape(), &n_obs_per_arm.device()).mul_scalar(log_t)
        / n_obs_per_arm.clone()
}

/// The per-arm terms every algorithm is built from
///
/// Unplayed arms get `n_i = 1` and zero reward sums here, so their raw scores stay finite. Some
/// backends implement `mask_fill` as `score * 0 + value`, which turns into `NaN` over a `NaN` score.
pub(super) struct ScoreInputs<B: Backend> {
    pub avg_rewards: Tensor<B, 1>,
    /// `None` unless squared rewards are tracked
    pub avg_squared_rewards: Option<Tensor<B, 1>>,
    pub log_t_over_ni: Tensor<B, 1>,
    pub unplayed: Tensor<B, 1, Bool>,
}

impl<B: Backend> ScoreInputs<B> {
    fn new(stats: &ArmStats<B>) -> Self {
        let n_obs = stats.total_n_obs_per_arm();
        let unplayed = n_obs.clone().lower_equal_elem(0.0);
        let safe_n_obs = n_obs.clone().mask_fill(unplayed.clone(), 1.0);
        let safe_avg = |sum: &Tensor<B, 1>| {
            sum.clone().mask_fill(unplayed.clone(), 0.0) / safe_n_obs.clone()
        };

        let avg_rewards = safe_avg(stats.total_sum_reward_per_arm());
        let avg_squared_rewards = stats.total_sum_reward_squared_per_arm().map(safe_avg);
        let log_t_over_ni = log_t_over_ni(stats.total_n_obs_all_arms() as f64, &safe_n_obs);
        Self {
            avg_rewards,
            avg_squared_rewards,
            log_t_over_ni,
            unplayed,
        }
    }
}
