use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use super::terminal::{restore_terminal, setup_terminal, Tui};
use crate::input::{InputHandler, KeyAction};
use crate::lake::{Action, LakeConfig, Position};
use crate::metrics::EpisodeMetrics;
use crate::render::{Hud, Renderer};
use crate::rl::LakeEnvironment;

const CONTROLS: &[(&str, &str)] = &[
    ("↑↓←→/WASD", "move"),
    ("R", "new lake"),
    ("Q", "quit"),
];

/// Keyboard-driven play; every key press is one step
pub struct HumanMode {
    env: LakeEnvironment,
    path: Vec<Position>,
    metrics: EpisodeMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: LakeConfig) -> Self {
        Self {
            env: LakeEnvironment::new(config),
            path: Vec::new(),
            metrics: EpisodeMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.run_game_loop(&mut terminal).await;

        restore_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        info!(size = self.env.config().size, "human mode started");

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = render_timer.tick() => {
                    if !self.env.state().is_terminal() {
                        self.metrics.update();
                    }
                    let hud = Hud {
                        title: " Frozen Lake ",
                        status: Some(format!(
                            "Goals: {}  Hazards: {}",
                            self.metrics.goals_reached, self.metrics.hazards_hit
                        )),
                        controls: CONTROLS,
                    };
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.env.state(), &self.path, &self.metrics, &hud);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Play(action) => self.play(action),
                KeyAction::Restart => self.reset_game(),
                KeyAction::Quit => self.should_quit = true,
                _ => {}
            }
        }
    }

    fn play(&mut self, action: Action) {
        if self.env.state().is_terminal() {
            return;
        }

        let code = match action {
            Action::Move(direction) => direction.code(),
            Action::Stay => LakeEnvironment::NUM_ACTIONS,
        };
        let (position, _reward, done) = self.env.step(code);
        self.path.push(position);

        if done {
            let state = self.env.state();
            if let Some(outcome) = state.outcome {
                self.metrics.on_episode_end(outcome, state.steps);
            }
        }
    }

    fn reset_game(&mut self) {
        self.env.reset();
        self.path.clear();
        self.metrics.on_episode_start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lake::Direction;

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(LakeConfig::default());
        assert_eq!(mode.env.position(), Position::new(0, 0));
        assert!(mode.path.is_empty());
    }

    #[test]
    fn test_moves_extend_path() {
        let config = LakeConfig {
            cells_per_hazard: 10_000,
            ..LakeConfig::new(3)
        };
        let mut mode = HumanMode::new(config);

        mode.play(Action::Move(Direction::Up));
        mode.play(Action::Move(Direction::Right));
        mode.play(Action::Move(Direction::Down));

        assert_eq!(
            mode.path,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_game_reset() {
        let config = LakeConfig {
            cells_per_hazard: 10_000,
            ..LakeConfig::new(2)
        };
        let mut mode = HumanMode::new(config);
        mode.play(Action::Move(Direction::Right));
        mode.play(Action::Move(Direction::Down));
        assert_eq!(mode.metrics.goals_reached, 1);

        // Finished episode ignores further moves
        mode.play(Action::Move(Direction::Left));
        assert_eq!(mode.path.len(), 2);

        mode.reset_game();
        assert!(mode.path.is_empty());
        assert!(!mode.env.state().is_terminal());
    }
}
