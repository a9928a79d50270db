pub mod audio;
pub mod config;
pub mod http;
pub mod openai;
pub mod render;
pub mod turn;

pub use audio::{persist_recording, AudioFile};
pub use config::Config;
pub use http::{create_router, AppState};
pub use openai::{
    OpenAiResponder, OpenAiSynthesizer, OpenAiTranscriber, Responder, Synthesizer, Transcriber,
};
pub use turn::{SessionCredential, TurnContext, TurnOutcome, TurnPipeline};
