#![forbid(unsafe_code)]

pub mod model;
pub mod quiz;

pub use quiz::{QuizState, clamp_cursor};
