//! Direction planning: quantizing a hand-to-target displacement into a
//! discrete spoken instruction.

use crate::guidance::point::Point;

/// Planar movement directions.
///
/// `Forward` and `Back` are reserved for depth-aware detectors and are
/// never produced by the 2D planner; they exist so the instruction set is
/// stable when one is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Forward,
    Back,
}

/// What the engine has decided to communicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Move the hand in the given direction.
    Move(Direction),
    /// The hand is within the reached threshold of the target.
    Reached,
    /// The target's position is unknown.
    Searching,
    /// The hand's position is unknown.
    Lost,
}

/// Converts a (hand, target) position pair into an [`Instruction`].
///
/// `plan` is a pure function of its inputs and the configured threshold:
/// no internal state, total over all four known/unknown combinations.
#[derive(Debug, Clone, Copy)]
pub struct DirectionPlanner {
    reached_threshold: f32,
}

impl DirectionPlanner {
    /// `reached_fraction` is a fraction of the frame diagonal; in
    /// normalized coordinates the diagonal has length sqrt(2).
    pub fn new(reached_fraction: f32) -> Self {
        Self {
            reached_threshold: reached_fraction * std::f32::consts::SQRT_2,
        }
    }

    /// Decide the next instruction for the given position estimates.
    ///
    /// A missing target wins over a missing hand: "searching" tells the
    /// user the goal is not in view, which supersedes asking them to show
    /// their hand.
    pub fn plan(&self, hand: Option<Point>, target: Option<Point>) -> Instruction {
        let Some(target) = target else {
            return Instruction::Searching;
        };
        let Some(hand) = hand else {
            return Instruction::Lost;
        };

        let v = hand.displacement(&target);
        if v.norm() < self.reached_threshold {
            return Instruction::Reached;
        }

        // Dominant axis decides; an exact tie breaks toward horizontal as
        // the more actionable cue.
        if v.x.abs() >= v.y.abs() {
            if v.x > 0.0 {
                Instruction::Move(Direction::Right)
            } else {
                Instruction::Move(Direction::Left)
            }
        } else if v.y > 0.0 {
            // y grows downward in image coordinates
            Instruction::Move(Direction::Down)
        } else {
            Instruction::Move(Direction::Up)
        }
    }
}
