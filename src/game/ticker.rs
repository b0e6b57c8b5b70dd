use parking_lot::Mutex;
use std::time::Instant;

use crate::game::Game;
use crate::output::GameOutput;
use crate::source::QuestionSource;

/// Drives `Game::tick` with wall-clock time.
pub struct Ticker {
    last_tick: Instant,
}

impl Ticker {
    pub fn new() -> Ticker {
        Ticker {
            last_tick: Instant::now(),
        }
    }

    /// The clock stops while another thread holds the game, so a question
    /// fetch running under the lock is not charged to the countdown.
    pub fn tick<O, S>(&mut self, game: &Mutex<Game<O, S>>)
    where
        O: GameOutput + Clone,
        S: QuestionSource,
    {
        let waiting_since = Instant::now();
        let mut game = game.lock();
        game.tick(waiting_since.duration_since(self.last_tick));
        self.last_tick = Instant::now();
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Ticker::new()
    }
}
