//! Learning from user feedback

pub mod feedback;

pub use feedback::{Feedback, FeedbackSummary, InteractionRecorder};
