use burn::tensor::{backend::Backend, ElementConversion, Tensor};

use super::{log_t_over_ni, tuned::tuned_bound};
use crate::{
    error::{check_len, Result},
    traits::ToTensor,
};

/// A minimal, stateless UCB-Tuned for Bernoulli bandits
///
/// Scores raw per-arm play counts and success counts directly, with `T = sum(n_obs_per_arm)`.
/// Unlike [`Ucb::scores`](super::Ucb::scores), arms with zero plays are **not** masked to `+inf`:
/// they get whatever the float division produces (`NaN` or `inf`). Callers either guarantee every
/// arm has been played or handle those values themselves.
pub fn get_bernoulli_tuned_ucb_scores<B, N, S>(
    n_obs_per_arm: N,
    num_success_per_arm: S,
    device: &B::Device,
) -> Result<Tensor<B, 1>>
where
    B: Backend,
    N: ToTensor<B>,
    S: ToTensor<B>,
{
    let n_obs = n_obs_per_arm.to_tensor(device);
    let successes = num_success_per_arm.to_tensor(device);
    let [n_arms] = n_obs.dims();
    let [n_success] = successes.dims();
    check_len("num_success_per_arm", n_arms, n_success)?;

    let total = n_obs.clone().sum().into_scalar().elem::<f64>();
    let log_t_over_ni = log_t_over_ni(total, &n_obs);
    let avg_rewards = successes / n_obs;
    // r in {0, 1} means r^2 = r
    Ok(tuned_bound(avg_rewards.clone(), avg_rewards, log_t_over_ni))
}
