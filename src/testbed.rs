use burn::tensor::backend::Backend;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::{
    assert_interval,
    bandit::UcbBandit,
    error::{check_len, Result},
};

/// The reward distribution of a single testbed arm
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArmDistribution {
    /// Normally distributed rewards
    Gaussian { mean: f64, std: f64 },
    /// Reward `1.0` with probability `p`, else `0.0`
    Bernoulli { p: f64 },
}

impl ArmDistribution {
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Gaussian { mean, .. } => mean,
            Self::Bernoulli { p } => p,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Self::Gaussian { mean, std } => mean + std * rng.sample::<f64, _>(StandardNormal),
            Self::Bernoulli { p } => f64::from(u8::from(rng.gen_bool(p))),
        }
    }
}

/// K-armed bandit testbed
///
/// A simple environment with K arms, each with its own reward distribution. A [`UcbBandit`] can be
/// run against it to check that it learns which arm has the highest mean reward.
#[derive(Debug, Clone)]
pub struct KArmedTestbed {
    arms: Vec<ArmDistribution>,
}

impl KArmedTestbed {
    /// Initialize a testbed from explicit arm distributions
    pub fn new(arms: Vec<ArmDistribution>) -> Self {
        Self { arms }
    }

    /// `k` Gaussian arms with unit variance whose means are drawn from a standard normal
    pub fn random_gaussian<R: Rng + ?Sized>(k: usize, rng: &mut R) -> Self {
        let arms = (0..k)
            .map(|_| ArmDistribution::Gaussian {
                mean: rng.sample(StandardNormal),
                std: 1.0,
            })
            .collect();
        Self { arms }
    }

    /// Bernoulli arms with the given success probabilities
    ///
    /// **Panics** if a probability is not in the interval `[0,1]`
    pub fn bernoulli(probs: &[f64]) -> Self {
        let arms = probs
            .iter()
            .map(|&p| {
                assert_interval!(p, 0.0, 1.0);
                ArmDistribution::Bernoulli { p }
            })
            .collect();
        Self { arms }
    }

    pub fn k(&self) -> usize {
        self.arms.len()
    }

    pub fn means(&self) -> Vec<f64> {
        self.arms.iter().map(ArmDistribution::mean).collect()
    }

    /// Index of the arm with the highest mean reward
    pub fn best_arm(&self) -> usize {
        crate::util::argmax_first(&self.means())
    }

    /// Pull arm `arm` and sample its reward
    ///
    /// **Panics** if `arm` is not a valid arm index
    pub fn pull<R: Rng + ?Sized>(&self, arm: usize, rng: &mut R) -> f64 {
        assert!(arm < self.k(), "Invalid arm: {}", arm);
        self.arms[arm].sample(rng)
    }

    /// Let `bandit` play `steps` rounds, feeding every reward back as a single observation
    ///
    /// The bandit's arms map onto the testbed arms by canonical position.
    ///
    /// **Returns** the arm index played and the reward received in each round
    pub fn run<B: Backend, R: Rng + ?Sized>(
        &self,
        bandit: &mut UcbBandit<B>,
        steps: usize,
        rng: &mut R,
    ) -> Result<Vec<(usize, f64)>> {
        check_len("testbed arms", bandit.n_arms(), self.k())?;
        let mut trace = Vec::with_capacity(steps);
        for _ in 0..steps {
            let arm = bandit.get_action().clone();
            let ix = bandit.arm_index().position(&arm)?;
            let reward = self.pull(ix, rng);
            bandit.add_single_observation(arm, reward)?;
            trace.push((ix, reward));
        }
        Ok(trace)
    }
}
