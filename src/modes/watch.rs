//! Watch mode: a random agent walking the lake in the terminal UI
//!
//! One episode is played on a timer and the lake is redrawn after every
//! step, with the traversed path overlaid. The episode does not restart on
//! its own; press R for a fresh lake.
//!
//! # Controls
//!
//! - Space: Pause/unpause
//! - N or .: Single step while paused
//! - 1-4: Speed control (1=slow, 2=normal, 3=fast, 4=very fast)
//! - R: New lake
//! - Q/Esc: Quit

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{interval, Interval};
use tracing::info;

use super::terminal::{restore_terminal, setup_terminal, Tui};
use crate::input::{InputHandler, KeyAction, PlaybackSpeed};
use crate::lake::{LakeConfig, Position};
use crate::metrics::EpisodeMetrics;
use crate::render::{Hud, Renderer};
use crate::rl::{LakeEnvironment, Policy, RandomPolicy};

const CONTROLS: &[(&str, &str)] = &[
    ("Space", "pause"),
    ("N", "step"),
    ("1-4", "speed"),
    ("R", "new lake"),
    ("Q", "quit"),
];

pub struct WatchMode<P: Policy> {
    env: LakeEnvironment,
    policy: P,
    path: Vec<Position>,
    metrics: EpisodeMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    paused: bool,
    speed: PlaybackSpeed,
}

impl WatchMode<RandomPolicy> {
    pub fn new(config: LakeConfig) -> Self {
        let policy = RandomPolicy::new(config.seed.map(|seed| seed.wrapping_add(1)));
        Self::with_policy(config, policy)
    }
}

impl<P: Policy> WatchMode<P> {
    pub fn with_policy(config: LakeConfig, policy: P) -> Self {
        Self {
            env: LakeEnvironment::new(config),
            policy,
            path: Vec::new(),
            metrics: EpisodeMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            paused: false,
            speed: PlaybackSpeed::Normal,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.run_watch_loop(&mut terminal).await;

        restore_terminal(&mut terminal)?;

        result
    }

    async fn run_watch_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.speed.tick_interval());

        // Render at 30 FPS
        let mut render_timer = interval(Duration::from_millis(33));

        info!(size = self.env.config().size, "watch mode started");

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer);
                    }
                }

                _ = tick_timer.tick() => {
                    if !self.paused {
                        self.step_agent();
                    }
                }

                _ = render_timer.tick() => {
                    if !self.env.state().is_terminal() {
                        self.metrics.update();
                    }
                    let hud = Hud {
                        title: " Frozen Lake: random agent ",
                        status: Some(self.status()),
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

    /// Advance the episode by one policy step; no-op once terminal
    fn step_agent(&mut self) {
        if self.env.state().is_terminal() {
            return;
        }

        let action = self.policy.select_action(self.env.position());
        let (position, _reward, done) = self.env.step(action);
        self.path.push(position);

        if done {
            let state = self.env.state();
            if let Some(outcome) = state.outcome {
                self.metrics.on_episode_end(outcome, state.steps);
            }
        }
    }

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) {
        let Event::Key(key) = event else {
            return;
        };

        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::TogglePause => self.paused = !self.paused,
            KeyAction::StepOnce => {
                if self.paused {
                    self.step_agent();
                }
            }
            KeyAction::Speed(speed) => {
                self.speed = speed;
                *tick_timer = interval(speed.tick_interval());
            }
            KeyAction::Restart => self.reset_episode(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Play(_) | KeyAction::None => {}
        }
    }

    fn reset_episode(&mut self) {
        self.env.reset();
        self.path.clear();
        self.metrics.on_episode_start();
    }

    fn status(&self) -> String {
        if self.paused {
            format!("Paused [{}]", self.speed.as_str())
        } else {
            format!("Speed: {}", self.speed.as_str())
        }
    }
}
