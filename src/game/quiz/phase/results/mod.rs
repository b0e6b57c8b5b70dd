use std::time::Duration;

use crate::game::quiz::State;
use crate::game::score::ScoreHandle;
use crate::output::{GameOutput, Message};


#[derive(Debug)]
pub struct ResultsState<O> {
    score: ScoreHandle,
    total: usize,
    output: O,
}

impl<O> ResultsState<O> {
    pub fn new(score: ScoreHandle, total: usize, output: O) -> Self {
        ResultsState {
            score,
            total,
            output,
        }
    }
}

impl<O: GameOutput> State for ResultsState<O> {
    fn on_tick(&mut self, _dt: Duration) {}

    fn on_begin(&mut self) {
        let correct = self.score.read().correct;
        self.output.say(&Message::FinalScore {
            correct,
            total: self.total,
        });
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
