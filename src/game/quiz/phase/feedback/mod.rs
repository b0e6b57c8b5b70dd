use log::debug;
use std::time::Duration;

use crate::game::quiz::phase::Verdict;
use crate::game::quiz::State;


/// Keeps the outcome of the last question on screen before the next one.
/// Answers typed meanwhile are refused with this verdict.
#[derive(Debug)]
pub struct FeedbackState {
    verdict: Verdict,
    shown_for: Duration,
    display_time: Duration,
}

impl FeedbackState {
    pub fn new(verdict: Verdict, display_time: Duration) -> Self {
        FeedbackState {
            verdict,
            shown_for: Duration::default(),
            display_time,
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

impl State for FeedbackState {
    fn on_begin(&mut self) {
        debug!("Question {}, next one in {:?}", self.verdict, self.display_time);
    }

    fn on_tick(&mut self, dt: Duration) {
        self.shown_for += dt;
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        self.shown_for >= self.display_time
    }
}
