use pantry_assist_rs::guidance::{EntityLabel, Estimate, PositionTracker};
use pantry_assist_rs::{
    GuidanceConfig, GuidanceError, GuidanceSession, Point, Position, SessionStatus,
};
use pantry_assist_rs::{SampleBuilder, SharedSession};

fn sample(
    frame_time: f64,
    hand: Option<(f32, f32)>,
    target: Option<(f32, f32)>,
) -> pantry_assist_rs::DetectionSample {
    let mut builder = SampleBuilder::new(frame_time);
    if let Some((x, y)) = hand {
        builder = builder.hand_center(x, y);
    }
    if let Some((x, y)) = target {
        builder = builder.target_center(x, y);
    }
    builder.build()
}

#[test]
fn test_occlusion_memory_window() {
    let mut tracker = PositionTracker::new(6.0);
    let point = Point::new(0.7, 0.3);
    tracker.update(EntityLabel::Target, Some(Position::new(point, 0.0)), 0.0);
    assert_eq!(tracker.current(EntityLabel::Target, 0.0), Estimate::Live(point));

    // Absent from t=0.1 onward: remembered through the window
    tracker.update(EntityLabel::Target, None, 0.1);
    assert_eq!(tracker.current(EntityLabel::Target, 0.1), Estimate::Remembered(point));

    tracker.update(EntityLabel::Target, None, 5.9);
    assert_eq!(tracker.current(EntityLabel::Target, 5.9), Estimate::Remembered(point));

    // Boundary is inclusive at exactly 6.0s
    tracker.update(EntityLabel::Target, None, 6.0);
    assert_eq!(tracker.current(EntityLabel::Target, 6.0), Estimate::Remembered(point));

    // Past the window the entity reverts to unknown
    tracker.update(EntityLabel::Target, None, 6.1);
    assert_eq!(tracker.current(EntityLabel::Target, 6.1), Estimate::Unknown);
}

#[test]
fn test_window_binds_for_any_query_time() {
    let mut tracker = PositionTracker::new(6.0);
    let point = Point::new(0.5, 0.5);
    tracker.update(EntityLabel::Target, Some(Position::new(point, 0.0)), 0.0);

    // Queried later without further updates: still subject to the window
    assert_eq!(tracker.current(EntityLabel::Target, 6.0), Estimate::Live(point));
    assert_eq!(tracker.current(EntityLabel::Target, 100.0), Estimate::Unknown);
}

#[test]
fn test_fresh_detection_is_authoritative() {
    let mut tracker = PositionTracker::new(6.0);
    tracker.update(
        EntityLabel::Hand,
        Some(Position::new(Point::new(0.1, 0.1), 0.0)),
        0.0,
    );
    // Large jump is taken at face value, no spatial smoothing
    let jumped = Point::new(0.9, 0.9);
    tracker.update(EntityLabel::Hand, Some(Position::new(jumped, 0.1)), 0.1);
    assert_eq!(tracker.current(EntityLabel::Hand, 0.1), Estimate::Live(jumped));
}

#[test]
fn test_session_guides_toward_target() {
    let mut session = GuidanceSession::new(GuidanceConfig::default());
    let announcement = session.start("bottle").unwrap();
    assert_eq!(announcement.text, "guidance started for bottle");

    // Dominant horizontal displacement: hand left of target
    let spoken = session
        .feed(sample(0.0, Some((0.2, 0.5)), Some((0.8, 0.5))))
        .unwrap();
    assert_eq!(spoken.unwrap().text, "move right");
}

#[test]
fn test_session_remembers_occluded_target() {
    let mut session = GuidanceSession::new(GuidanceConfig::default());
    session.start("bottle").unwrap();

    let spoken = session
        .feed(sample(0.0, Some((0.2, 0.5)), Some((0.8, 0.5))))
        .unwrap();
    assert_eq!(spoken.unwrap().text, "move right");

    // Target occluded at t=5.9: still guided from the remembered position
    let spoken = session.feed(sample(5.9, Some((0.2, 0.5)), None)).unwrap();
    assert_eq!(spoken.unwrap().text, "move right");

    // Past the window the planner switches to searching
    let spoken = session.feed(sample(6.1, Some((0.2, 0.5)), None)).unwrap();
    assert_eq!(spoken.unwrap().text, "searching for bottle");
}

#[test]
fn test_never_reached_without_target() {
    let mut session = GuidanceSession::new(GuidanceConfig::default());
    session.start("bottle").unwrap();

    let mut spoken = Vec::new();
    for i in 0..10 {
        let t = i as f64 * 0.1;
        if let Some(request) = session.feed(sample(t, Some((0.5, 0.5)), None)).unwrap() {
            spoken.push(request.text);
        }
    }

    assert!(spoken.iter().all(|text| text != "you've reached it"));
    assert_eq!(spoken, vec!["searching for bottle"]);
}

#[test]
fn test_repeat_cadence() {
    let mut session = GuidanceSession::new(GuidanceConfig::default());
    session.start("bottle").unwrap();

    // Hand right of target: "move left", held for several frames
    let left = |t| sample(t, Some((0.8, 0.5)), Some((0.2, 0.5)));

    assert!(session.feed(left(0.0)).unwrap().is_some());
    assert!(session.feed(left(1.0)).unwrap().is_none());
    assert!(session.feed(left(2.0)).unwrap().is_none());
    // Past the 3s repeat interval the same instruction is spoken again
    assert_eq!(session.feed(left(3.1)).unwrap().unwrap().text, "move left");
}

#[test]
fn test_reached_spoken_once_per_session() {
    let mut session = GuidanceSession::new(GuidanceConfig::default());
    session.start("bottle").unwrap();

    let reached = |t| sample(t, Some((0.5, 0.5)), Some((0.5, 0.5)));
    assert_eq!(
        session.feed(reached(0.0)).unwrap().unwrap().text,
        "you've reached it"
    );
    // Never repeated on cadence, no matter how long the hand stays put
    assert!(session.feed(reached(4.0)).unwrap().is_none());
    assert!(session.feed(reached(60.0)).unwrap().is_none());
}

#[test]
fn test_stop_silences_next_feed() {
    let mut session = GuidanceSession::new(GuidanceConfig::default());
    session.start("bottle").unwrap();
    session
        .feed(sample(0.0, Some((0.2, 0.5)), Some((0.8, 0.5))))
        .unwrap();

    session.stop();
    assert_eq!(session.status(), SessionStatus::Idle);

    let spoken = session
        .feed(sample(0.1, Some((0.2, 0.5)), Some((0.8, 0.5))))
        .unwrap();
    assert!(spoken.is_none());
}

#[test]
fn test_duplicate_start_rejected() {
    let mut session = GuidanceSession::new(GuidanceConfig::default());
    session.start("bottle").unwrap();
    assert_eq!(
        session.start("bottle"),
        Err(GuidanceError::AlreadyActive("bottle".to_string()))
    );
    // Still guiding the original target
    assert_eq!(
        session.status(),
        SessionStatus::Active {
            label: "bottle".to_string()
        }
    );
}

#[test]
fn test_restart_with_new_label() {
    let mut session = GuidanceSession::new(GuidanceConfig::default());
    session.start("bottle").unwrap();
    session
        .feed(sample(10.0, Some((0.2, 0.5)), Some((0.8, 0.5))))
        .unwrap();

    // Different label is stop-then-start: fresh tracker, fresh epoch
    let announcement = session.start("jam").unwrap();
    assert_eq!(announcement.text, "guidance started for jam");
    assert_eq!(
        session.status(),
        SessionStatus::Active {
            label: "jam".to_string()
        }
    );

    // Earlier timestamps are valid again in the new episode
    let spoken = session
        .feed(sample(0.0, Some((0.5, 0.9)), Some((0.5, 0.1))))
        .unwrap();
    assert_eq!(spoken.unwrap().text, "move up");
}

#[test]
fn test_stale_sample_rejected_without_state_change() {
    let mut session = GuidanceSession::new(GuidanceConfig::default());
    session.start("bottle").unwrap();

    session
        .feed(sample(1.0, Some((0.2, 0.5)), Some((0.8, 0.5))))
        .unwrap();

    let err = session
        .feed(sample(0.5, Some((0.9, 0.9)), None))
        .unwrap_err();
    assert_eq!(
        err,
        GuidanceError::StaleSample {
            frame_time: 0.5,
            last_frame_time: 1.0,
        }
    );

    // Tracked state did not regress: the remembered target still guides
    let spoken = session.feed(sample(2.0, Some((0.2, 0.5)), None)).unwrap();
    assert!(spoken.is_none() || spoken.unwrap().text == "move right");
}

#[test]
fn test_shared_session_stop_wins_over_feed() {
    let shared = SharedSession::new(GuidanceConfig::default());
    shared.start("bottle").unwrap();
    shared.stop();

    // A feed racing in after stop never speaks for the canceled target
    let spoken = shared
        .feed(sample(0.0, Some((0.2, 0.5)), Some((0.8, 0.5))))
        .unwrap();
    assert!(spoken.is_none());
    assert_eq!(shared.status(), SessionStatus::Idle);
}
