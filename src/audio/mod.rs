pub mod capture;
pub mod file;

pub use capture::persist_recording;
pub use file::AudioFile;
