use burn::tensor::{backend::Backend, ElementConversion, Tensor};

/// Running per-arm aggregates shared by every UCB algorithm
///
/// All vectors are indexed in the canonical arm order of the owning bandit and only ever grow by
/// accumulation.
#[derive(Debug, Clone)]
pub struct ArmStats<B: Backend> {
    total_n_obs_all_arms: u64,
    total_n_obs_per_arm: Tensor<B, 1>,
    total_sum_reward_per_arm: Tensor<B, 1>,
    total_sum_reward_squared_per_arm: Option<Tensor<B, 1>>,
}

impl<B: Backend> ArmStats<B> {
    /// Zeroed stats for `n_arms` arms, with squared rewards tracked if `track_variance` is set
    pub fn new(n_arms: usize, track_variance: bool, device: &B::Device) -> Self {
        Self {
            total_n_obs_all_arms: 0,
            total_n_obs_per_arm: Tensor::zeros([n_arms], device),
            total_sum_reward_per_arm: Tensor::zeros([n_arms], device),
            total_sum_reward_squared_per_arm: track_variance
                .then(|| Tensor::zeros([n_arms], device)),
        }
    }

    /// Sum of the integer parts of each batch's total count, so fractional counts are truncated per batch
    pub fn total_n_obs_all_arms(&self) -> u64 {
        self.total_n_obs_all_arms
    }

    pub fn total_n_obs_per_arm(&self) -> &Tensor<B, 1> {
        &self.total_n_obs_per_arm
    }

    pub fn total_sum_reward_per_arm(&self) -> &Tensor<B, 1> {
        &self.total_sum_reward_per_arm
    }

    /// `None` unless the owning algorithm estimates per-arm variance
    pub fn total_sum_reward_squared_per_arm(&self) -> Option<&Tensor<B, 1>> {
        self.total_sum_reward_squared_per_arm.as_ref()
    }

    /// Average reward per arm, `NaN` for arms without observations
    pub fn avg_reward_values(&self) -> Tensor<B, 1> {
        self.total_sum_reward_per_arm.clone() / self.total_n_obs_per_arm.clone()
    }

    /// Add canonical-length contributions to the aggregates
    ///
    /// The global count grows by the integer part of `sum(n_obs_per_arm)`. `sum_reward_squared_per_arm`
    /// is dropped when squared rewards are not tracked.
    pub(crate) fn accumulate(
        &mut self,
        n_obs_per_arm: Tensor<B, 1>,
        sum_reward_per_arm: Tensor<B, 1>,
        sum_reward_squared_per_arm: Option<Tensor<B, 1>>,
    ) {
        let batch_total = n_obs_per_arm.clone().sum().into_scalar().elem::<f64>();
        self.total_n_obs_all_arms += batch_total as u64;
        self.total_n_obs_per_arm = self.total_n_obs_per_arm.clone() + n_obs_per_arm;
        self.total_sum_reward_per_arm = self.total_sum_reward_per_arm.clone() + sum_reward_per_arm;
        if let (Some(total), Some(batch)) = (
            self.total_sum_reward_squared_per_arm.as_mut(),
            sum_reward_squared_per_arm,
        ) {
            *total = total.clone() + batch;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{testing::*, traits::ToTensor};

    #[test]
    fn starts_zeroed() {
        let stats = ArmStats::<TestBackend>::new(3, false, &device());
        assert_eq!(stats.total_n_obs_all_arms(), 0);
        assert_eq!(to_vec(stats.total_n_obs_per_arm().clone()), vec![0.0; 3]);
        assert_eq!(to_vec(stats.total_sum_reward_per_arm().clone()), vec![0.0; 3]);
        assert!(stats.total_sum_reward_squared_per_arm().is_none());

        let stats = ArmStats::<TestBackend>::new(3, true, &device());
        let sum_sq = stats.total_sum_reward_squared_per_arm().cloned().unwrap();
        assert_eq!(to_vec(sum_sq), vec![0.0; 3]);
    }

    #[test]
    fn accumulate_functional() {
        let device = device();
        let mut stats = ArmStats::<TestBackend>::new(2, true, &device);
        for _ in 0..2 {
            stats.accumulate(
                [3.0f64, 1.0].to_tensor(&device),
                [1.5f64, -1.0].to_tensor(&device),
                Some([0.75f64, 1.0].to_tensor(&device)),
            );
        }
        assert_eq!(stats.total_n_obs_all_arms(), 8);
        assert_eq!(to_vec(stats.total_n_obs_per_arm().clone()), vec![6.0, 2.0]);
        assert_eq!(to_vec(stats.total_sum_reward_per_arm().clone()), vec![3.0, -2.0]);
        let sum_sq = stats.total_sum_reward_squared_per_arm().cloned().unwrap();
        assert_eq!(to_vec(sum_sq), vec![1.5, 2.0]);
        assert_eq!(to_vec(stats.avg_reward_values()), vec![0.5, -1.0]);
    }

    #[test]
    fn unplayed_average_is_nan() {
        let stats = ArmStats::<TestBackend>::new(1, false, &device());
        assert!(to_vec(stats.avg_reward_values())[0].is_nan());
    }
}
