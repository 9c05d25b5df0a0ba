//! Voice-guided hand-to-item guidance for a smart pantry assistant.
//!
//! The crate is split into two modules:
//! - [`guidance`] — the core engine: position tracking with occlusion
//!   memory, direction planning, utterance pacing, and the session state
//!   machine that ties them together.
//! - [`integration`] — seams to the external collaborators: the vision
//!   detector, the speech sink, the text-command channel, and the
//!   inventory store.

pub mod guidance;
pub mod integration;

pub use guidance::{
    DetectionSample, Direction, GuidanceConfig, GuidanceError, GuidanceSession, Instruction,
    Point, Position, SessionStatus, SharedSession, SpeakRequest,
};
pub use integration::{
    AssistPipeline, Command, CommandRouter, InventoryStore, SampleBuilder, SampleSource,
    SpeechChannel, VoiceSink,
};
