//! Presentation layer: server-rendered HTML fragments and the index page.
//!
//! Rendering is one-shot and idempotent — every function is a pure
//! function of its inputs (plus, for the audio player, the file contents
//! at the given path), so re-rendering a turn replaces prior output
//! without accumulating state.

mod audio;
mod cards;
mod page;

pub use audio::inline_audio_player;
pub use cards::text_card;
pub use page::index_page;
