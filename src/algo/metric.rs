use burn::tensor::{backend::Backend, Tensor};

use super::ScoreInputs;

/// UCB1 with a tighter confidence radius for small expected rewards
///
/// UCB<sub>i</sub> = avg<sub>i</sub> + sqrt(avg<sub>i</sub> ln(T+1) / n<sub>i</sub>) + ln(T+1) / n<sub>i</sub>
///
/// A played arm with a negative average reward has a negative radicand and scores `NaN`.
///
/// Reference: <https://arxiv.org/pdf/0809.4882.pdf>
pub(super) fn scores<B: Backend>(inputs: &ScoreInputs<B>) -> Tensor<B, 1> {
    let avg_rewards = inputs.avg_rewards.clone();
    let log_t_over_ni = inputs.log_t_over_ni.clone();
    let radius = (avg_rewards.clone() * log_t_over_ni.clone()).sqrt();
    avg_rewards + radius + log_t_over_ni
}
