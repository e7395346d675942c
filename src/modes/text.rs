//! Headless driver loop
//!
//! Runs one episode with a policy and prints a text snapshot of the lake
//! after every step. Rendering is synchronous: the next step waits until the
//! frame has been written (and the optional frame delay has passed).

use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;
use tracing::info;

use crate::lake::{LakeConfig, Outcome, Position};
use crate::render::{compose_tiles, render_text};
use crate::rl::{LakeEnvironment, Policy, RandomPolicy};

/// Summary of a finished episode
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeSummary {
    pub outcome: Outcome,
    pub steps: u32,
    pub total_reward: f32,
    pub path: Vec<Position>,
}

pub struct TextMode<P: Policy> {
    env: LakeEnvironment,
    policy: P,
    path: Vec<Position>,
    frame_delay: Option<Duration>,
}

impl TextMode<RandomPolicy> {
    /// Random agent; seeded from the lake seed when one is set
    pub fn new(config: LakeConfig) -> Self {
        let policy = RandomPolicy::new(config.seed.map(|seed| seed.wrapping_add(1)));
        Self::with_policy(config, policy)
    }
}

impl<P: Policy> TextMode<P> {
    pub fn with_policy(config: LakeConfig, policy: P) -> Self {
        Self {
            env: LakeEnvironment::new(config),
            policy,
            path: Vec::new(),
            frame_delay: None,
        }
    }

    /// Pause between frames so the episode can be followed by eye
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = Some(delay);
        self
    }

    /// Run a single episode until it terminates
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<EpisodeSummary> {
        self.env.reset();
        self.path.clear();
        info!(size = self.env.config().size, "text episode started");

        let mut done = false;
        while !done {
            let action = self.policy.select_action(self.env.position());
            let (position, reward, terminated) = self.env.step(action);
            self.path.push(position);
            done = terminated;

            self.write_frame(out, action, reward)?;

            if let Some(delay) = self.frame_delay {
                std::thread::sleep(delay);
            }
        }

        let state = self.env.state();
        let outcome = match state.outcome {
            Some(outcome) => outcome,
            None => anyhow::bail!("episode ended without an outcome"),
        };

        writeln!(
            out,
            "{} after {} steps (total reward {:+.1})",
            match outcome {
                Outcome::ReachedGoal => "Reached the goal",
                Outcome::FellInHazard => "Fell into a hazard",
            },
            state.steps,
            state.total_reward
        )
        .context("Failed to write summary")?;

        Ok(EpisodeSummary {
            outcome,
            steps: state.steps,
            total_reward: state.total_reward,
            path: self.path.clone(),
        })
    }

    fn write_frame<W: Write>(&self, out: &mut W, action: usize, reward: f32) -> Result<()> {
        let state = self.env.state();
        let tiles = compose_tiles(&state.grid, &self.path, state.agent);

        writeln!(
            out,
            "step {} | action {} | reward {:+.1}",
            state.steps,
            action_name(action),
            reward
        )
        .context("Failed to write frame header")?;
        write!(out, "{}", render_text(&tiles)).context("Failed to write frame")?;
        writeln!(out).context("Failed to write frame")?;
        out.flush().context("Failed to flush frame")?;
        Ok(())
    }

    pub fn env(&self) -> &LakeEnvironment {
        &self.env
    }
}

fn action_name(action: usize) -> &'static str {
    match action {
        0 => "up",
        1 => "down",
        2 => "left",
        3 => "right",
        _ => "stay",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        actions: Vec<usize>,
        next: usize,
    }

    impl Policy for Scripted {
        fn select_action(&mut self, _position: Position) -> usize {
            let action = self.actions[self.next % self.actions.len()];
            self.next += 1;
            action
        }
    }

    fn hazard_free(size: usize) -> LakeConfig {
        LakeConfig {
            cells_per_hazard: 10_000,
            ..LakeConfig::new(size)
        }
    }

    #[test]
    fn test_scripted_episode_reaches_goal() {
        let policy = Scripted {
            actions: vec![9, 3, 3, 1, 1],
            next: 0,
        };
        let mut mode = TextMode::with_policy(hazard_free(3), policy);
        let mut out = Vec::new();

        let summary = mode.run(&mut out).unwrap();

        assert_eq!(summary.outcome, Outcome::ReachedGoal);
        assert_eq!(summary.steps, 5);
        assert_eq!(summary.total_reward, 1.0);
        assert_eq!(summary.path.len(), 5);
        assert_eq!(summary.path[0], Position::new(0, 0));
        assert_eq!(*summary.path.last().unwrap(), Position::new(2, 2));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("step 1 | action stay | reward +0.0"));
        assert!(text.contains("S * *\n. . *\n. . A\n"));
        assert!(text.ends_with("Reached the goal after 5 steps (total reward +1.0)\n"));
    }

    #[test]
    fn test_random_episode_terminates() {
        let mut mode = TextMode::new(LakeConfig::new(4).with_seed(2024));
        let mut out = Vec::new();

        let summary = mode.run(&mut out).unwrap();

        assert_eq!(summary.steps as usize, summary.path.len());
        assert!(mode.env().state().is_terminal());
        match summary.outcome {
            Outcome::ReachedGoal => assert_eq!(summary.total_reward, 1.0),
            Outcome::FellInHazard => assert_eq!(summary.total_reward, -1.0),
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let mut a = TextMode::new(LakeConfig::new(5).with_seed(8));
        let mut b = TextMode::new(LakeConfig::new(5).with_seed(8));

        let first = a.run(&mut Vec::new()).unwrap();
        let second = b.run(&mut Vec::new()).unwrap();

        assert_eq!(first, second);
    }
}
