use burn::tensor::{backend::Backend, Tensor};

use super::ScoreInputs;

/// UCB-Tuned from Section 4 of <https://link.springer.com/content/pdf/10.1023/A:1013689704352.pdf>
///
/// UCB<sub>i</sub> = avg<sub>i</sub> + sqrt(ln(T+1) / n<sub>i</sub> * V<sub>i</sub>)
pub(super) fn scores<B: Backend>(inputs: &ScoreInputs<B>) -> Tensor<B, 1> {
    let avg_rewards = inputs.avg_rewards.clone();
    // always present when the algorithm tracks variance
    let avg_squared_rewards = inputs
        .avg_squared_rewards
        .clone()
        .unwrap_or_else(|| Tensor::zeros(avg_rewards.shape(), &avg_rewards.device()));
    tuned_bound(avg_rewards, avg_squared_rewards, inputs.log_t_over_ni.clone())
}

/// The UCB-Tuned bound, without masking of unplayed arms
///
/// V<sub>i</sub> = avg(r<sup>2</sup>)<sub>i</sub> - avg<sub>i</sub><sup>2</sup> + sqrt(2 ln(T+1) / n<sub>i</sub>)
///
/// The `sqrt` term keeps the variance estimate conservative. There is no `min(1/4, ...)` ceiling,
/// the bound also serves non-Bernoulli rewards.
pub(super) fn tuned_bound<B: Backend>(
    avg_rewards: Tensor<B, 1>,
    avg_squared_rewards: Tensor<B, 1>,
    log_t_over_ni: Tensor<B, 1>,
) -> Tensor<B, 1> {
    let per_arm_var_est = avg_squared_rewards - avg_rewards.clone() * avg_rewards.clone()
        + log_t_over_ni.clone().mul_scalar(2.0).sqrt();
    avg_rewards + (log_t_over_ni * per_arm_var_est).sqrt()
}
