use crate::lake::{Action, LakeConfig, LakeEngine, LakeState, Position};

/// FrozenLake environment for reinforcement learning
///
/// Wraps the lake engine and provides the classic RL interface with:
/// - Positions as observations, or a flat state index for tabular agents
/// - Discrete action space (4 actions: Up, Down, Left, Right)
/// - Standard RL interface (reset, step)
pub struct LakeEnvironment {
    engine: LakeEngine,
    state: LakeState,
}

impl LakeEnvironment {
    /// Number of discrete actions
    pub const NUM_ACTIONS: usize = 4;

    /// Create a new environment; the first episode is already reset
    pub fn new(config: LakeConfig) -> Self {
        let mut engine = LakeEngine::new(config);
        let state = engine.reset();
        Self { engine, state }
    }

    /// Regenerate the lake and return the agent's starting position
    pub fn reset(&mut self) -> Position {
        self.state = self.engine.reset();
        self.state.agent
    }

    /// Step the environment with a discrete action
    ///
    /// Actions:
    /// - 0: Move Up
    /// - 1: Move Down
    /// - 2: Move Left
    /// - 3: Move Right
    /// - other: ignored, the agent stays where it is
    ///
    /// Returns: (position, reward, done)
    pub fn step(&mut self, action_code: usize) -> (Position, f32, bool) {
        let result = self
            .engine
            .step(&mut self.state, Action::from_code(action_code));

        (result.position, result.reward, result.terminated)
    }

    /// Current agent position
    pub fn position(&self) -> Position {
        self.state.agent
    }

    /// Flat state index `row * size + col`
    pub fn observation(&self) -> usize {
        let pos = self.state.agent;
        pos.row * self.state.size() + pos.col
    }

    /// Size of the discrete state space
    pub fn num_states(&self) -> usize {
        self.state.size() * self.state.size()
    }

    pub fn num_actions(&self) -> usize {
        Self::NUM_ACTIONS
    }

    pub fn config(&self) -> &LakeConfig {
        self.engine.config()
    }

    /// Get reference to current lake state (for rendering/testing)
    pub fn state(&self) -> &LakeState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lake::{Grid, Outcome};

    fn env_with_rows(rows: &[&str]) -> LakeEnvironment {
        let grid = Grid::from_rows(rows).unwrap();
        let size = grid.size();
        let mut env = LakeEnvironment::new(LakeConfig::new(size).with_seed(0));
        env.state = LakeState::new(grid, Position::new(0, 0), Position::new(size - 1, size - 1));
        env
    }

    #[test]
    fn test_environment_creation() {
        let env = LakeEnvironment::new(LakeConfig::default());

        assert_eq!(env.position(), Position::new(0, 0));
        assert_eq!(env.state().steps, 0);
        assert!(!env.state().is_terminal());
    }

    #[test]
    fn test_reset_returns_start() {
        let mut env = LakeEnvironment::new(LakeConfig::new(5).with_seed(3));
        env.step(1);

        let start = env.reset();

        assert_eq!(start, Position::new(0, 0));
        assert_eq!(env.position(), start);
        assert_eq!(env.state().steps, 0);
    }

    #[test]
    fn test_step_to_goal() {
        let mut env = env_with_rows(&["S.", ".G"]);

        assert_eq!(env.step(3), (Position::new(0, 1), 0.0, false));
        assert_eq!(env.step(1), (Position::new(1, 1), 1.0, true));
        assert_eq!(env.state().outcome, Some(Outcome::ReachedGoal));
    }

    #[test]
    fn test_step_into_hazard() {
        let mut env = env_with_rows(&["S..", "H..", "..G"]);

        let (pos, reward, done) = env.step(1);

        assert_eq!(pos, Position::new(1, 0));
        assert_eq!(reward, -1.0);
        assert!(done);
    }

    #[test]
    fn test_invalid_action_is_ignored() {
        let mut env = env_with_rows(&["S..", "...", "..G"]);

        let (pos, reward, done) = env.step(4);

        assert_eq!(pos, Position::new(0, 0));
        assert_eq!(reward, 0.0);
        assert!(!done);
    }

    #[test]
    fn test_observation_index() {
        let mut env = env_with_rows(&["S..", "...", "..G"]);
        assert_eq!(env.observation(), 0);

        env.step(1);
        env.step(3);

        assert_eq!(env.observation(), 4);
        assert_eq!(env.num_states(), 9);
        assert_eq!(env.num_actions(), 4);
    }
}
