//! Frozen Lake - a minimal grid world for reinforcement learning demos
//!
//! This library provides:
//! - Core lake logic: grid generation, movement, rewards (lake module)
//! - The reset/step environment interface and a random policy (rl module)
//! - Text and TUI rendering of the lake with the traversed path (render module)
//! - Execution modes: headless text, watch a random agent, human play (modes module)

pub mod input;
pub mod lake;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod rl;
