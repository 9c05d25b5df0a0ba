//! Speech sink trait and the non-blocking channel in front of it.

use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::thread;

use tracing::debug;

use crate::guidance::SpeakRequest;

/// Trait for the actual speech synthesizer.
///
/// `speak` may block for the duration of the utterance; it runs on the
/// speech channel's consumer thread, never on the frame loop.
pub trait VoiceSink: Send {
    fn speak(&mut self, text: &str);
}

/// Non-blocking hand-off between the engine and the voice sink.
///
/// The channel is a rendezvous: a submission is accepted only when the
/// consumer is idle and waiting for it. Requests submitted while an
/// utterance is playing are dropped, not queued; a stale direction
/// spoken late is worse than a missed one.
#[derive(Clone)]
pub struct SpeechChannel {
    tx: SyncSender<SpeakRequest>,
}

impl SpeechChannel {
    /// Spawn the consumer thread around `sink`. The thread exits once
    /// every clone of the channel has been dropped.
    pub fn spawn<V: VoiceSink + 'static>(mut sink: V) -> Self {
        let (tx, rx) = mpsc::sync_channel::<SpeakRequest>(0);

        thread::spawn(move || {
            while let Ok(request) = rx.recv() {
                sink.speak(&request.text);
            }
        });

        Self { tx }
    }

    /// Submit a request without blocking. Returns false when the request
    /// was dropped because an utterance is still playing.
    pub fn submit(&self, request: SpeakRequest) -> bool {
        match self.tx.try_send(request) {
            Ok(()) => true,
            Err(TrySendError::Full(request)) => {
                debug!(text = %request.text, "speech busy, dropping request");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}
