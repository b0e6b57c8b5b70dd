use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Score {
    pub correct: u32,
    pub played: u32,
}

impl Score {
    pub fn record(&mut self, is_correct: bool) {
        self.played += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Score::default();
    }
}

pub type ScoreHandle = Arc<RwLock<Score>>;
