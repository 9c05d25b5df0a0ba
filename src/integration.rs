//! Integration module connecting the guidance engine to its external
//! collaborators.
//!
//! The engine itself owns no camera, vision model, audio device, message
//! transport or inventory persistence. This module provides the traits and
//! plumbing those collaborators plug into: a detection source, a speech
//! sink behind a non-blocking channel, the text-command layer, and the
//! inventory read seam.

mod command;
mod detector;
mod inventory;
mod pipeline;
mod sample;
mod voice;

pub use command::{Command, CommandRouter};
pub use detector::SampleSource;
pub use inventory::InventoryStore;
pub use pipeline::AssistPipeline;
pub use sample::SampleBuilder;
pub use voice::{SpeechChannel, VoiceSink};
