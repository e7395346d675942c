use std::time::{Duration, Instant};

use crate::lake::Outcome;

pub struct EpisodeMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub episodes_finished: u32,
    pub goals_reached: u32,
    pub hazards_hit: u32,
    /// Fewest steps any episode this session needed to reach the goal
    pub best_steps: Option<u32>,
}

impl EpisodeMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            episodes_finished: 0,
            goals_reached: 0,
            hazards_hit: 0,
            best_steps: None,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_episode_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_episode_end(&mut self, outcome: Outcome, steps: u32) {
        self.episodes_finished += 1;
        match outcome {
            Outcome::ReachedGoal => {
                self.goals_reached += 1;
                self.best_steps = Some(self.best_steps.map_or(steps, |best| best.min(steps)));
            }
            Outcome::FellInHazard => self.hazards_hit += 1,
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for EpisodeMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = EpisodeMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_outcome_tallies() {
        let mut metrics = EpisodeMetrics::new();

        metrics.on_episode_end(Outcome::ReachedGoal, 12);
        metrics.on_episode_end(Outcome::FellInHazard, 3);
        metrics.on_episode_end(Outcome::ReachedGoal, 8);
        metrics.on_episode_end(Outcome::ReachedGoal, 20);

        assert_eq!(metrics.episodes_finished, 4);
        assert_eq!(metrics.goals_reached, 3);
        assert_eq!(metrics.hazards_hit, 1);
        assert_eq!(metrics.best_steps, Some(8));
    }

    #[test]
    fn test_episode_start_resets_time() {
        let mut metrics = EpisodeMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_episode_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
