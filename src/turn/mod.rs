//! Turn management
//!
//! A turn is one full capture → transcribe → respond → synthesize →
//! present cycle. This module provides:
//! - The per-turn context (turn ID and turn-scoped storage paths)
//! - The sequential pipeline that drives the three remote calls
//! - The turn outcome returned to the presentation layer

mod context;
mod outcome;
mod pipeline;

pub use context::{SessionCredential, TurnContext};
pub use outcome::TurnOutcome;
pub use pipeline::TurnPipeline;
