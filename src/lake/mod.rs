//! Core lake logic
//!
//! Grid generation, movement and reward rules without any I/O or rendering
//! dependencies. Shared by the text driver, the terminal modes and the RL
//! environment wrapper.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::LakeConfig;
pub use engine::{LakeEngine, StepInfo, StepResult};
pub use state::{Cell, Grid, LakeState, Outcome, Position};
