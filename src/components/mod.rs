//! UI components.

pub mod confetti;
