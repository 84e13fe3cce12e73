//! Step-sequencing state machine for the quote wizard.
//!
//! The machine knows nothing about rendering or validation: it only owns the
//! current step and the three transitions. [`session::QuoteSession`] layers
//! the validation gate and review finalization on top.

pub mod session;

pub use session::QuoteSession;

/// Named wizard states, in order. The indices are part of the external
/// contract: `Intro` is 0 and `Quote` (the terminal display screen) is 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Intro,
    Personal,
    Vehicle,
    Coverage,
    Review,
    Quote,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Intro,
        Step::Personal,
        Step::Vehicle,
        Step::Coverage,
        Step::Review,
        Step::Quote,
    ];

    pub fn index(&self) -> usize {
        match self {
            Step::Intro => 0,
            Step::Personal => 1,
            Step::Vehicle => 2,
            Step::Coverage => 3,
            Step::Review => 4,
            Step::Quote => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Step::ALL.get(index).copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Intro => "Welcome",
            Step::Personal => "Personal Information",
            Step::Vehicle => "Vehicle Details",
            Step::Coverage => "Coverage Options",
            Step::Review => "Review & Confirm",
            Step::Quote => "Your Quote",
        }
    }

    /// Steps that collect input and therefore carry a validator.
    pub fn is_data_entry(&self) -> bool {
        matches!(self, Step::Personal | Step::Vehicle | Step::Coverage)
    }

    fn next(&self) -> Step {
        Step::from_index(self.index() + 1).unwrap_or(*self)
    }

    fn prev(&self) -> Step {
        match self.index().checked_sub(1) {
            Some(index) => Step::from_index(index).unwrap_or(*self),
            None => *self,
        }
    }
}

/// Holds the single current step; no history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepController {
    current: Step,
}

impl StepController {
    pub fn new() -> Self {
        Self {
            current: Step::Intro,
        }
    }

    pub fn current(&self) -> Step {
        self.current
    }

    /// Moves forward one step; no-op on the terminal quote screen.
    pub fn advance(&mut self) -> Step {
        self.current = self.current.next();
        self.current
    }

    /// Moves back one step; no-op on the intro screen. Previously entered
    /// values are untouched; retreating never replays validation state.
    pub fn retreat(&mut self) -> Step {
        self.current = self.current.prev();
        self.current
    }

    /// Jumps directly to a step. Used from the review screen to revisit
    /// earlier steps; every `Step` value is in range by construction.
    pub fn jump_to(&mut self, step: Step) {
        self.current = step;
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_walks_every_step_and_stops_at_quote() {
        let mut controller = StepController::new();
        let mut visited = vec![controller.current()];
        for _ in 0..5 {
            visited.push(controller.advance());
        }
        assert_eq!(visited, Step::ALL.to_vec());

        // Boundary: advancing from the terminal step is a no-op.
        assert_eq!(controller.advance(), Step::Quote);
        assert_eq!(controller.current(), Step::Quote);
    }

    #[test]
    fn retreat_stops_at_intro() {
        let mut controller = StepController::new();
        assert_eq!(controller.retreat(), Step::Intro);
        controller.advance();
        controller.advance();
        assert_eq!(controller.retreat(), Step::Personal);
    }

    #[test]
    fn jump_then_step_matches_plain_stepping() {
        let mut jumped = StepController::new();
        jumped.jump_to(Step::Coverage);
        jumped.advance();

        let mut stepped = StepController::new();
        for _ in 0..4 {
            stepped.advance();
        }

        assert_eq!(jumped.current(), stepped.current());

        jumped.retreat();
        stepped.retreat();
        assert_eq!(jumped.current(), stepped.current());
    }

    #[test]
    fn index_mapping_is_stable() {
        for (expected, step) in Step::ALL.into_iter().enumerate() {
            assert_eq!(step.index(), expected);
            assert_eq!(Step::from_index(expected), Some(step));
        }
        assert_eq!(Step::from_index(6), None);
    }
}
