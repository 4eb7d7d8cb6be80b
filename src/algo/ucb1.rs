use burn::tensor::{backend::Backend, Tensor};

use super::ScoreInputs;

/// Canonical UCB1
///
/// UCB<sub>i</sub> = avg<sub>i</sub> + sqrt(2 ln(T+1) / n<sub>i</sub>)
///
/// Reference: <https://www.cs.bham.ac.uk/internal/courses/robotics/lectures/ucb1.pdf>
pub(super) fn scores<B: Backend>(inputs: &ScoreInputs<B>) -> Tensor<B, 1> {
    let log_t_over_ni = inputs.log_t_over_ni.clone();
    inputs.avg_rewards.clone() + log_t_over_ni.mul_scalar(2.0).sqrt()
}
