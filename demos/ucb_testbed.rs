use std::error::Error;

use burn::backend::NdArray;
use rand::{rngs::StdRng, SeedableRng};
use ucb::{testbed::KArmedTestbed, Ucb, UcbBandit};

type Backend = NdArray<f64>;

const STEP_LIMIT: usize = 1000;
const NUM_EPISODES: usize = 50;
const PROBS: [f64; 10] = [0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5];

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(0);
    let testbed = KArmedTestbed::bernoulli(&PROBS);
    let best = testbed.best_arm();

    println!("{:<20} {:>12} {:>12}", "algorithm", "avg reward", "% optimal");
    for algorithm in Ucb::ALL {
        let mut total_reward = 0.0;
        let mut optimal = 0;
        for _ in 0..NUM_EPISODES {
            let mut bandit = UcbBandit::<Backend>::with_n_arms(algorithm, PROBS.len(), Default::default())?;
            let trace = testbed.run(&mut bandit, STEP_LIMIT, &mut rng)?;
            total_reward += trace.iter().map(|&(_, r)| r).sum::<f64>();
            optimal += trace.iter().filter(|&&(ix, _)| ix == best).count();
        }

        let rounds = (NUM_EPISODES * STEP_LIMIT) as f64;
        println!(
            "{:<20} {:>12.4} {:>11.1}%",
            algorithm.to_string(),
            total_reward / rounds,
            100.0 * optimal as f64 / rounds
        );
    }

    Ok(())
}
