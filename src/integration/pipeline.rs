//! Per-frame pipeline combining detection with guidance.

use tracing::debug;

use crate::guidance::{GuidanceError, SharedSession, SpeakRequest};

use super::{SampleSource, SpeechChannel};

/// Glues a [`SampleSource`] to a [`SharedSession`] and, optionally, a
/// [`SpeechChannel`].
///
/// The frame loop calls [`process_frame`](AssistPipeline::process_frame)
/// at whatever cadence frames arrive; detection latency above the frame
/// interval is fine. The command channel holds its own clone of the same
/// `SharedSession`, so `start`/`stop` arriving between two frames are
/// observed atomically by the next one.
pub struct AssistPipeline<D: SampleSource> {
    detector: D,
    session: SharedSession,
    speech: Option<SpeechChannel>,
}

impl<D: SampleSource> AssistPipeline<D> {
    /// Create a pipeline over the given detector and session.
    pub fn new(detector: D, session: SharedSession) -> Self {
        Self {
            detector,
            session,
            speech: None,
        }
    }

    /// Route emitted instructions into a speech channel as well as
    /// returning them.
    pub fn with_speech(mut self, speech: SpeechChannel) -> Self {
        self.speech = Some(speech);
        self
    }

    /// Process a single frame.
    ///
    /// Runs detection, feeds the sample to the session, and hands any
    /// resulting [`SpeakRequest`] to the speech channel. Out-of-order
    /// frames are skipped silently; a single bad frame must not stop the
    /// guidance loop. Only detector failures propagate.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
        frame_time: f64,
    ) -> Result<Option<SpeakRequest>, D::Error> {
        let sample = self.detector.detect(input, width, height, frame_time)?;

        match self.session.feed(sample) {
            Ok(Some(request)) => {
                if let Some(speech) = &self.speech {
                    speech.submit(request.clone());
                }
                Ok(Some(request))
            }
            Ok(None) => Ok(None),
            Err(GuidanceError::StaleSample {
                frame_time,
                last_frame_time,
            }) => {
                debug!(frame_time, last_frame_time, "skipping out-of-order frame");
                Ok(None)
            }
            Err(err) => {
                debug!(%err, "frame dropped");
                Ok(None)
            }
        }
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a handle to the shared session.
    pub fn session(&self) -> &SharedSession {
        &self.session
    }
}
