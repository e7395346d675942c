use super::{
    action::Action,
    config::LakeConfig,
    state::{Cell, Grid, LakeState, Outcome, Position},
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, trace};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the agent changed cells this step
    pub moved: bool,
    /// How the episode ended, if this step ended it
    pub outcome: Option<Outcome>,
}

/// Result of a lake step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Agent position after the step
    pub position: Position,
    /// Reward for this step
    pub reward: f32,
    /// Whether the episode has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The lake engine that handles grid generation and movement rules
pub struct LakeEngine {
    config: LakeConfig,
    rng: StdRng,
}

impl LakeEngine {
    /// Create a new engine with the given configuration
    ///
    /// The configuration is expected to pass [`LakeConfig::validate`]; a
    /// grid smaller than 2x2 panics on reset.
    pub fn new(config: LakeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    pub fn config(&self) -> &LakeConfig {
        &self.config
    }

    /// Generate a fresh grid and put the agent on the start cell
    pub fn reset(&mut self) -> LakeState {
        let size = self.config.size;
        let start = Position::new(0, 0);
        let goal = Position::new(size - 1, size - 1);

        let mut grid = Grid::empty(size);
        grid.set(start, Cell::Start);
        grid.set(goal, Cell::Goal);
        self.place_hazards(&mut grid, start, goal);

        debug!(
            size,
            hazards = grid.hazard_count(),
            draws = self.config.hazard_draws(),
            "lake reset"
        );

        LakeState::new(grid, start, goal)
    }

    /// Execute one step of the episode
    pub fn step(&self, state: &mut LakeState, action: Action) -> StepResult {
        if state.is_terminal() {
            return StepResult {
                position: state.agent,
                reward: 0.0,
                terminated: true,
                info: StepInfo {
                    moved: false,
                    outcome: None,
                },
            };
        }

        let previous = state.agent;
        let next = match action {
            Action::Move(direction) => previous.clamped_move(direction, state.size()),
            Action::Stay => previous,
        };

        state.agent = next;
        state.steps += 1;

        let outcome = if next == state.goal {
            Some(Outcome::ReachedGoal)
        } else if state.grid.get(next) == Cell::Hazard {
            Some(Outcome::FellInHazard)
        } else {
            None
        };

        let reward = match outcome {
            Some(Outcome::ReachedGoal) => self.config.goal_reward,
            Some(Outcome::FellInHazard) => self.config.hazard_reward,
            None => self.config.step_reward,
        };

        state.total_reward += reward;
        state.outcome = outcome;

        trace!(?action, row = next.row, col = next.col, reward, "step");
        if let Some(outcome) = outcome {
            info!(
                ?outcome,
                steps = state.steps,
                total_reward = state.total_reward,
                "episode finished"
            );
        }

        StepResult {
            position: next,
            reward,
            terminated: outcome.is_some(),
            info: StepInfo {
                moved: next != previous,
                outcome,
            },
        }
    }

    /// Scatter hazards at random coordinates
    ///
    /// Draws landing on the start or goal are skipped. Draws landing on an
    /// existing hazard are not redrawn, so the final count may be lower than
    /// the number of draws.
    fn place_hazards(&mut self, grid: &mut Grid, start: Position, goal: Position) {
        let size = self.config.size;

        for _ in 0..self.config.hazard_draws() {
            let pos = Position::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size));

            if pos != start && pos != goal {
                grid.set(pos, Cell::Hazard);
            }
        }
    }
}
