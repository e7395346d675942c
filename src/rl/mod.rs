//! Reinforcement learning interface for the lake
//!
//! Provides:
//! - The reset/step environment API over the lake engine
//! - The policy seam used by the driver loops
//! - A uniform random policy

pub mod environment;
pub mod policy;

pub use environment::LakeEnvironment;
pub use policy::{Policy, RandomPolicy};
