//! Guidance session state machine.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::guidance::error::GuidanceError;
use crate::guidance::pacer::UtterancePacer;
use crate::guidance::planner::{Direction, DirectionPlanner, Instruction};
use crate::guidance::position_tracker::{DetectionSample, EntityLabel, PositionTracker};

/// Tunable timing and distance parameters for a guidance session.
#[derive(Debug, Clone, Copy)]
pub struct GuidanceConfig {
    /// How long a lost entity's last known position stays usable, seconds.
    pub occlusion_window: f64,
    /// Reached threshold as a fraction of the frame diagonal.
    pub reached_fraction: f32,
    /// Minimum gap between repeats of the same instruction, seconds.
    pub repeat_interval: f64,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            occlusion_window: 6.0,
            reached_fraction: 0.05,
            repeat_interval: 3.0,
        }
    }
}

/// A request for the voice sink to speak one phrase.
///
/// The engine only ever produces these as return values; it never calls
/// the sink itself, so a slow speech render cannot stall the frame loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakRequest {
    pub text: String,
}

impl SpeakRequest {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Read-only snapshot of the session state, for status queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Active { label: String },
}

struct ActiveGuidance {
    label: String,
    tracker: PositionTracker,
    planner: DirectionPlanner,
    pacer: UtterancePacer,
    last_frame_time: Option<f64>,
}

impl ActiveGuidance {
    fn new(label: String, config: &GuidanceConfig) -> Self {
        Self {
            label,
            tracker: PositionTracker::new(config.occlusion_window),
            planner: DirectionPlanner::new(config.reached_fraction),
            pacer: UtterancePacer::new(config.repeat_interval),
            last_frame_time: None,
        }
    }
}

/// Top-level guidance state machine.
///
/// Owns one [`PositionTracker`], [`DirectionPlanner`] and
/// [`UtterancePacer`] per active episode; `stop` discards them, so no
/// state leaks between targets. Only one episode exists at a time.
pub struct GuidanceSession {
    config: GuidanceConfig,
    active: Option<ActiveGuidance>,
}

impl GuidanceSession {
    pub fn new(config: GuidanceConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// Begin guiding toward `label`.
    ///
    /// Starting while already guiding a different item is treated as
    /// stop-then-start. Starting the item already being guided returns
    /// [`GuidanceError::AlreadyActive`]. On success the returned
    /// [`SpeakRequest`] announces the new episode.
    pub fn start(&mut self, label: &str) -> Result<SpeakRequest, GuidanceError> {
        if let Some(active) = &self.active {
            if active.label == label {
                return Err(GuidanceError::AlreadyActive(active.label.clone()));
            }
            info!(old = %active.label, new = %label, "restarting guidance for new target");
        } else {
            info!(target_item = %label, "starting guidance");
        }

        self.active = Some(ActiveGuidance::new(label.to_string(), &self.config));
        Ok(SpeakRequest::new(format!("guidance started for {label}")))
    }

    /// Consume one frame's detections.
    ///
    /// No-op while idle. While active: updates both tracked entities,
    /// plans the next instruction, and returns a [`SpeakRequest`] when the
    /// pacer lets it through. Out-of-order frames are rejected with
    /// [`GuidanceError::StaleSample`] and leave all state untouched.
    pub fn feed(&mut self, sample: DetectionSample) -> Result<Option<SpeakRequest>, GuidanceError> {
        let Some(active) = &mut self.active else {
            return Ok(None);
        };

        let now = sample.frame_time;
        if let Some(last) = active.last_frame_time {
            if now < last {
                return Err(GuidanceError::StaleSample {
                    frame_time: now,
                    last_frame_time: last,
                });
            }
        }
        active.last_frame_time = Some(now);

        active.tracker.update(EntityLabel::Hand, sample.hand, now);
        active.tracker.update(EntityLabel::Target, sample.target, now);

        let hand = active.tracker.current(EntityLabel::Hand, now).point();
        let target = active.tracker.current(EntityLabel::Target, now).point();

        let instruction = active.planner.plan(hand, target);

        if active.pacer.consider(instruction, now) {
            let text = phrase_for(instruction, &active.label);
            debug!(?instruction, %text, "emitting instruction");
            Ok(Some(SpeakRequest::new(text)))
        } else {
            Ok(None)
        }
    }

    /// End the current episode, if any. Idempotent.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            info!(target_item = %active.label, "stopping guidance");
        }
    }

    /// Snapshot of the current state for the command layer.
    pub fn status(&self) -> SessionStatus {
        match &self.active {
            Some(active) => SessionStatus::Active {
                label: active.label.clone(),
            },
            None => SessionStatus::Idle,
        }
    }
}

/// Fixed phrase for each instruction; only `Searching` substitutes the
/// target label, mirroring how the original assistant names the item it
/// cannot see.
fn phrase_for(instruction: Instruction, label: &str) -> String {
    match instruction {
        Instruction::Move(Direction::Up) => "move up".to_string(),
        Instruction::Move(Direction::Down) => "move down".to_string(),
        Instruction::Move(Direction::Left) => "move left".to_string(),
        Instruction::Move(Direction::Right) => "move right".to_string(),
        Instruction::Move(Direction::Forward) => "move forward".to_string(),
        Instruction::Move(Direction::Back) => "move back".to_string(),
        Instruction::Reached => "you've reached it".to_string(),
        Instruction::Searching => format!("searching for {label}"),
        Instruction::Lost => "show me your hand".to_string(),
    }
}

/// Handle to a [`GuidanceSession`] shared between the frame loop and the
/// command channel.
///
/// Every operation takes the lock for its full duration, so `start`,
/// `stop` and `feed` are mutually exclusive: a `stop` that wins the lock
/// is always observed by the next `feed`.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<GuidanceSession>>,
}

impl SharedSession {
    pub fn new(config: GuidanceConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(GuidanceSession::new(config))),
        }
    }

    pub fn start(&self, label: &str) -> Result<SpeakRequest, GuidanceError> {
        self.inner.lock().start(label)
    }

    pub fn feed(&self, sample: DetectionSample) -> Result<Option<SpeakRequest>, GuidanceError> {
        self.inner.lock().feed(sample)
    }

    pub fn stop(&self) {
        self.inner.lock().stop()
    }

    pub fn status(&self) -> SessionStatus {
        self.inner.lock().status()
    }
}
