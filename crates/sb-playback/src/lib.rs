//! Tick-driven dialogue playback for Sprechblase.
//!
//! The [`Sequencer`] plays an `sb-script` [`sb_script::Script`] line by
//! line: it fades the dialogue panel in, types each line onto a [`Stage`]
//! one character at a time with punctuation-aware pacing, and fades the
//! panel out when the script runs dry. Both animations are explicit
//! resumable state machines driven by an external `tick(delta_seconds)`
//! call, so the sequencer owns no threads and no scheduler.

/// Pacing and fade configuration.
pub mod config;
/// Panel fade state machine.
mod fade;
/// The playback controller.
pub mod sequencer;
/// The visual surface collaborator trait.
pub mod stage;
/// Typewriter text-reveal state machine.
mod typing;

pub use config::SequencerConfig;
pub use sequencer::Sequencer;
pub use stage::Stage;
