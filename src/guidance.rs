mod error;
mod pacer;
mod planner;
mod point;
mod position_tracker;
mod session;
mod tracked;

pub use error::GuidanceError;
pub use pacer::UtterancePacer;
pub use planner::{Direction, DirectionPlanner, Instruction};
pub use point::{Point, Position};
pub use position_tracker::{DetectionSample, EntityLabel, PositionTracker};
pub use session::{GuidanceConfig, GuidanceSession, SessionStatus, SharedSession, SpeakRequest};
pub use tracked::{Estimate, TrackedEntity};
