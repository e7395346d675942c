use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::lake::Position;

/// Chooses the next action code for the agent
pub trait Policy {
    fn select_action(&mut self, position: Position) -> usize;
}

/// Uniform random choice among the four moves
pub struct RandomPolicy {
    rng: StdRng,
    num_actions: usize,
}

impl RandomPolicy {
    /// Create a random policy, seeded for reproducible runs when a seed is given
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            num_actions: 4,
        }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _position: Position) -> usize {
        self.rng.gen_range(0..self.num_actions)
    }
}
