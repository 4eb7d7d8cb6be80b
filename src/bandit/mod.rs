use std::fmt;

use burn::tensor::{backend::Backend, Tensor};
use log::{debug, trace};

use crate::{
    algo::Ucb,
    arms::{place_values_at_indices, ArmId, ArmIndex, Arms},
    error::{check_len, BanditError, Result},
    traits::ToTensor,
    util::argmax_first,
};

mod stats;

pub use stats::ArmStats;

/// Configuration for the [`UcbBandit`]
#[derive(Debug, Clone, PartialEq)]
pub struct BanditConfig {
    /// The arms to choose between, either a count or explicit ids in canonical order
    pub arms: Arms,
    /// The scoring algorithm
    ///
    /// **Default**: [`Ucb::Ucb1`]
    pub algorithm: Ucb,
}

impl BanditConfig {
    pub fn new(arms: impl Into<Arms>) -> Self {
        Self {
            arms: arms.into(),
            algorithm: Ucb::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Ucb) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// A UCB multi-armed bandit
///
/// Accumulates per-arm observation counts and reward sums and scores every arm with the configured
/// [`Ucb`] algorithm. The set of arms is fixed at construction.
///
/// ### Generics
/// - `B`: A burn backend holding the per-arm aggregates
#[derive(Debug, Clone)]
pub struct UcbBandit<B: Backend> {
    index: ArmIndex,
    algorithm: Ucb,
    stats: ArmStats<B>,
    device: B::Device,
}

impl<B: Backend> UcbBandit<B> {
    /// Initialize a new `UcbBandit` with all aggregates at zero
    ///
    /// **Errors** if there are no arms or the arm ids contain a duplicate
    pub fn new(config: BanditConfig, device: B::Device) -> Result<Self> {
        let BanditConfig { arms, algorithm } = config;
        let ids = arms.resolve()?;
        let index = ArmIndex::new(&ids)?;
        let stats = ArmStats::new(index.len(), algorithm.tracks_variance(), &device);
        debug!("created {algorithm} bandit with {} arms", index.len());
        Ok(Self {
            index,
            algorithm,
            stats,
            device,
        })
    }

    /// A bandit over the arms `0..n_arms`
    pub fn with_n_arms(algorithm: Ucb, n_arms: usize, device: B::Device) -> Result<Self> {
        Self::new(
            BanditConfig::new(Arms::Count(n_arms)).with_algorithm(algorithm),
            device,
        )
    }

    /// A bandit over explicit arm ids
    pub fn with_arm_ids<T: Into<ArmId>>(
        algorithm: Ucb,
        arm_ids: Vec<T>,
        device: B::Device,
    ) -> Result<Self> {
        Self::new(BanditConfig::new(arm_ids).with_algorithm(algorithm), device)
    }

    pub fn algorithm(&self) -> Ucb {
        self.algorithm
    }

    /// Arm ids in canonical order
    pub fn arm_ids(&self) -> &[ArmId] {
        self.index.ids()
    }

    pub fn arm_index(&self) -> &ArmIndex {
        &self.index
    }

    pub fn n_arms(&self) -> usize {
        self.index.len()
    }

    pub fn device(&self) -> &B::Device {
        &self.device
    }

    pub fn stats(&self) -> &ArmStats<B> {
        &self.stats
    }

    /// Total observation count, see [`ArmStats::total_n_obs_all_arms`]
    pub fn total_n_obs_all_arms(&self) -> u64 {
        self.stats.total_n_obs_all_arms()
    }

    pub fn total_n_obs_per_arm(&self) -> Tensor<B, 1> {
        self.stats.total_n_obs_per_arm().clone()
    }

    pub fn total_sum_reward_per_arm(&self) -> Tensor<B, 1> {
        self.stats.total_sum_reward_per_arm().clone()
    }

    pub fn total_sum_reward_squared_per_arm(&self) -> Option<Tensor<B, 1>> {
        self.stats.total_sum_reward_squared_per_arm().cloned()
    }

    /// Add observations in batched form
    ///
    /// ### Arguments
    /// - `n_obs_per_arm` Per-arm numbers of observations
    /// - `sum_reward_per_arm` Per-arm sums of rewards. For [`Ucb::TunedBernoulli`] these are the
    ///   success counts, which double as the sums of squared rewards.
    /// - `arm_ids` The arms the values belong to, in the same order. `None` means all arms in
    ///   canonical order. Arms left out of the list receive no observations.
    ///
    /// **Errors** for [`Ucb::Tuned`], which needs
    /// [`add_batch_observations_with_squares`](Self::add_batch_observations_with_squares)
    pub fn add_batch_observations<N, R>(
        &mut self,
        n_obs_per_arm: N,
        sum_reward_per_arm: R,
        arm_ids: Option<&[ArmId]>,
    ) -> Result<()>
    where
        N: ToTensor<B>,
        R: ToTensor<B>,
    {
        if self.algorithm == Ucb::Tuned {
            return Err(BanditError::MissingSquaredRewards("UCBTuned"));
        }
        let n_obs = n_obs_per_arm.to_tensor(&self.device);
        let sum_reward = sum_reward_per_arm.to_tensor(&self.device);
        self.add_batch(n_obs, sum_reward, None, arm_ids)
    }

    /// Add observations in batched form, including per-arm sums of squared rewards
    ///
    /// The squared rewards are accumulated by [`Ucb::Tuned`] and validated but otherwise ignored by
    /// the rest. [`Ucb::TunedBernoulli`] always derives them from `sum_reward_per_arm`, since
    /// Bernoulli rewards satisfy `r^2 = r`. See [`add_batch_observations`](Self::add_batch_observations)
    /// for the remaining arguments.
    pub fn add_batch_observations_with_squares<N, R, S>(
        &mut self,
        n_obs_per_arm: N,
        sum_reward_per_arm: R,
        sum_reward_squared_per_arm: S,
        arm_ids: Option<&[ArmId]>,
    ) -> Result<()>
    where
        N: ToTensor<B>,
        R: ToTensor<B>,
        S: ToTensor<B>,
    {
        let n_obs = n_obs_per_arm.to_tensor(&self.device);
        let sum_reward = sum_reward_per_arm.to_tensor(&self.device);
        let sum_reward_squared = sum_reward_squared_per_arm.to_tensor(&self.device);
        self.add_batch(n_obs, sum_reward, Some(sum_reward_squared), arm_ids)
    }

    /// Validate a batch, bring it into canonical order and accumulate it
    fn add_batch(
        &mut self,
        n_obs: Tensor<B, 1>,
        sum_reward: Tensor<B, 1>,
        sum_reward_squared: Option<Tensor<B, 1>>,
        arm_ids: Option<&[ArmId]>,
    ) -> Result<()> {
        let [len] = n_obs.dims();
        let [reward_len] = sum_reward.dims();
        check_len("sum_reward_per_arm", len, reward_len)?;
        if let Some(sum_sq) = &sum_reward_squared {
            let [sq_len] = sum_sq.dims();
            check_len("sum_reward_squared_per_arm", len, sq_len)?;
        }
        let sum_reward_squared = match self.algorithm {
            Ucb::TunedBernoulli => Some(sum_reward.clone()),
            _ => sum_reward_squared,
        };

        let n_arms = self.n_arms();
        let (n_obs, sum_reward, sum_reward_squared) = match arm_ids {
            Some(ids) if !self.index.is_canonical(ids) => {
                let idxs = self.index.positions(ids)?;
                check_len("n_obs_per_arm", ids.len(), len)?;
                let place = |values: Tensor<B, 1>| place_values_at_indices(values, &idxs, n_arms);
                (
                    place(n_obs)?,
                    place(sum_reward)?,
                    sum_reward_squared.map(place).transpose()?,
                )
            }
            _ => {
                check_len("n_obs_per_arm", n_arms, len)?;
                (n_obs, sum_reward, sum_reward_squared)
            }
        };

        debug!("adding batch of observations for {len} of {n_arms} arms");
        let sum_reward_squared = sum_reward_squared.filter(|_| self.algorithm.tracks_variance());
        self.stats.accumulate(n_obs, sum_reward, sum_reward_squared);
        Ok(())
    }

    /// Add a single observation: `arm_id` was played and produced `reward`
    pub fn add_single_observation(&mut self, arm_id: impl Into<ArmId>, reward: f64) -> Result<()> {
        let idx = self.index.position(&arm_id.into())?;
        let n_arms = self.n_arms();
        let place = |value: f64| {
            place_values_at_indices::<B>(vec![value].to_tensor(&self.device), &[idx], n_arms)
        };
        let n_obs = place(1.0)?;
        let sum_reward = place(reward)?;
        let sum_reward_squared = if self.algorithm.tracks_variance() {
            Some(place(reward * reward)?)
        } else {
            None
        };
        self.stats.accumulate(n_obs, sum_reward, sum_reward_squared);
        Ok(())
    }

    /// Average reward per arm, `NaN` for arms without observations
    pub fn get_avg_reward_values(&self) -> Tensor<B, 1> {
        self.stats.avg_reward_values()
    }

    /// Per-arm UCB scores, `+inf` for arms without observations
    pub fn get_ucb_scores(&self) -> Tensor<B, 1> {
        self.algorithm.scores(&self.stats)
    }

    /// Id of the arm with the highest UCB score
    ///
    /// Ties go to the arm that comes first in canonical order.
    pub fn get_action(&self) -> &ArmId {
        let scores = to_host(self.get_ucb_scores());
        let ix = argmax_first(&scores);
        trace!("chose arm {} with score {}", self.index.ids()[ix], scores[ix]);
        &self.index.ids()[ix]
    }

    /// Create a bandit, feed in one batch of observations and return its UCB scores
    ///
    /// The bandit has one arm per element of `n_obs_per_arm` and is dropped afterwards.
    pub fn get_ucb_scores_from_batch<N, R>(
        algorithm: Ucb,
        n_obs_per_arm: N,
        sum_reward_per_arm: R,
        device: B::Device,
    ) -> Result<Tensor<B, 1>>
    where
        N: ToTensor<B>,
        R: ToTensor<B>,
    {
        let n_obs = n_obs_per_arm.to_tensor(&device);
        let [n_arms] = n_obs.dims();
        let mut bandit = Self::with_n_arms(algorithm, n_arms, device)?;
        bandit.add_batch_observations(n_obs, sum_reward_per_arm, None)?;
        Ok(bandit.get_ucb_scores())
    }

    /// [`get_ucb_scores_from_batch`](Self::get_ucb_scores_from_batch) with per-arm sums of squared rewards
    pub fn get_ucb_scores_from_batch_with_squares<N, R, S>(
        algorithm: Ucb,
        n_obs_per_arm: N,
        sum_reward_per_arm: R,
        sum_reward_squared_per_arm: S,
        device: B::Device,
    ) -> Result<Tensor<B, 1>>
    where
        N: ToTensor<B>,
        R: ToTensor<B>,
        S: ToTensor<B>,
    {
        let n_obs = n_obs_per_arm.to_tensor(&device);
        let [n_arms] = n_obs.dims();
        let mut bandit = Self::with_n_arms(algorithm, n_arms, device)?;
        bandit.add_batch_observations_with_squares(
            n_obs,
            sum_reward_per_arm,
            sum_reward_squared_per_arm,
            None,
        )?;
        Ok(bandit.get_ucb_scores())
    }
}

impl<B: Backend> fmt::Display for UcbBandit<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let avg = to_host(self.get_avg_reward_values());
        let n_obs = to_host(self.total_n_obs_per_arm());
        let arms = avg
            .iter()
            .zip(&n_obs)
            .map(|(v, n)| format!("{v:.3} ({})", *n as u64))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({} arms; {arms})", self.algorithm, self.n_arms())
    }
}

fn to_host<B: Backend>(tensor: Tensor<B, 1>) -> Vec<f64> {
    tensor.into_data().convert::<f64>().value
}
