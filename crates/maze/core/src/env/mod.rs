//! Collaborators injected into the engine.
//!
//! The only external dependency of generation is its random source. Keeping
//! it behind [`MazeRng`] lets hosts pick a seed and lets tests replay a walk
//! step by step.
mod rng;

pub use rng::{MazeRng, PcgRng};
