mod generator;
pub mod prompt;

pub use generator::{GenerationRequest, QuizGenerator};
