use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::lake::{Action, Direction};

/// Playback speed for the watch mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSpeed {
    /// 1 step per second
    Slow,
    /// 4 steps per second
    Normal,
    /// 10 steps per second
    Fast,
    /// 30 steps per second
    VeryFast,
}

impl PlaybackSpeed {
    pub fn tick_interval(&self) -> std::time::Duration {
        use std::time::Duration;
        match self {
            Self::Slow => Duration::from_millis(1000),
            Self::Normal => Duration::from_millis(250),
            Self::Fast => Duration::from_millis(100),
            Self::VeryFast => Duration::from_millis(33),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
            Self::VeryFast => "Very Fast",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Play(Action),
    TogglePause,
    StepOnce,
    Speed(PlaybackSpeed),
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Play(Action::Move(Direction::Up)),
            KeyCode::Down => KeyAction::Play(Action::Move(Direction::Down)),
            KeyCode::Left => KeyAction::Play(Action::Move(Direction::Left)),
            KeyCode::Right => KeyAction::Play(Action::Move(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Play(Action::Move(Direction::Up)),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Play(Action::Move(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Play(Action::Move(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Play(Action::Move(Direction::Right))
            }

            // Playback
            KeyCode::Char(' ') => KeyAction::TogglePause,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('.') => KeyAction::StepOnce,
            KeyCode::Char('1') => KeyAction::Speed(PlaybackSpeed::Slow),
            KeyCode::Char('2') => KeyAction::Speed(PlaybackSpeed::Normal),
            KeyCode::Char('3') => KeyAction::Speed(PlaybackSpeed::Fast),
            KeyCode::Char('4') => KeyAction::Speed(PlaybackSpeed::VeryFast),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
