//! Rate-limiting and de-duplication of spoken instructions.

use crate::guidance::planner::Instruction;

/// Gates whether an instruction should actually be spoken.
///
/// An instruction passes when it differs from the last spoken one, or when
/// `repeat_interval` seconds have elapsed since the same instruction was
/// last spoken. `Reached` is the exception: once spoken it stays silent
/// until the instruction changes away and back.
///
/// The pacer never talks to the speech sink itself; it only answers the
/// yes/no question, which keeps it testable without one.
#[derive(Debug, Clone, Default)]
pub struct UtterancePacer {
    repeat_interval: f64,
    last_spoken: Option<(Instruction, f64)>,
}

impl UtterancePacer {
    pub fn new(repeat_interval: f64) -> Self {
        Self {
            repeat_interval,
            last_spoken: None,
        }
    }

    /// Returns true when the caller should speak `instruction` now, and
    /// records the emission.
    pub fn consider(&mut self, instruction: Instruction, now: f64) -> bool {
        let emit = match self.last_spoken {
            None => true,
            Some((last, _)) if last != instruction => true,
            Some(_) if instruction == Instruction::Reached => false,
            Some((_, at)) => now - at >= self.repeat_interval,
        };

        if emit {
            self.last_spoken = Some((instruction, now));
        }
        emit
    }
}
