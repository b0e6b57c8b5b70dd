use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::time::Duration;

use crate::game::quiz::definition::Question;
use crate::game::quiz::State;
use crate::game::score::ScoreHandle;
use crate::output::{GameOutput, Message};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Correct,
    Incorrect,
    TimedOut,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "answered correctly"),
            Verdict::Incorrect => write!(f, "answered incorrectly"),
            Verdict::TimedOut => write!(f, "not answered in time"),
        }
    }
}

pub struct QuestionState<O: GameOutput> {
    question: Question,
    number: usize,
    total: usize,
    time_elapsed: Duration,
    time_limit: Duration,
    announcements: Vec<Duration>,
    verdict: Option<Verdict>,
    score: ScoreHandle,
    output: O,
}

impl<O: GameOutput> QuestionState<O> {
    /// `number` is 1-based, as shown to the player.
    pub fn new(
        question: Question,
        number: usize,
        total: usize,
        time_limit: Duration,
        announcements: Vec<Duration>,
        score: ScoreHandle,
        output: O,
    ) -> Self {
        QuestionState {
            question,
            number,
            total,
            time_elapsed: Duration::default(),
            time_limit,
            announcements,
            verdict: None,
            score,
            output,
        }
    }

    pub fn answer(&mut self, option_index: usize) -> Result<Verdict> {
        if self.verdict.is_some() {
            return Err(anyhow!("This question was already answered"));
        }
        if self.is_timed_out() {
            return Err(anyhow!("Time is up for this question"));
        }

        let selected = self
            .question
            .option(option_index)
            .with_context(|| format!("There is no option {}", option_index + 1))?
            .to_owned();

        let is_correct = self.question.is_correct(&selected);
        self.score.write().record(is_correct);

        let verdict = if is_correct {
            self.output.say(&Message::AnswerCorrect(selected));
            Verdict::Correct
        } else {
            self.output.say(&Message::AnswerIncorrect {
                selected,
                answer: self.question.answer.clone(),
            });
            Verdict::Incorrect
        };
        self.verdict = Some(verdict);
        Ok(verdict)
    }

    /// `None` while the question is still open.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.verdict {
            Some(verdict) => Some(verdict),
            None if self.is_timed_out() => Some(Verdict::TimedOut),
            None => None,
        }
    }

    fn is_timed_out(&self) -> bool {
        self.time_elapsed >= self.time_limit
    }

    fn print_time_remaining(&self, before: Option<Duration>, after: Option<Duration>) {
        if let (Some(before), Some(after)) = (before, after) {
            let crossed = self
                .announcements
                .iter()
                .filter(|threshold| before > **threshold && after <= **threshold)
                .min();
            if let Some(threshold) = crossed {
                self.output.say(&Message::TimeRemaining(*threshold));
            }
        }
    }
}

impl<O: GameOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuestionBegins {
            number: self.number,
            total: self.total,
            question: self.question.clone(),
            time_limit: self.time_limit,
        });
    }

    fn on_tick(&mut self, dt: Duration) {
        // Answering stops the countdown.
        if self.verdict.is_some() {
            return;
        }
        let time_remaining_before = self.time_limit.checked_sub(self.time_elapsed);
        self.time_elapsed += dt;
        let time_remaining_after = self.time_limit.checked_sub(self.time_elapsed);
        self.print_time_remaining(time_remaining_before, time_remaining_after);
    }

    fn on_end(&mut self) {
        if self.verdict.is_none() {
            self.score.write().record(false);
            self.output
                .say(&Message::TimeUp(self.question.answer.clone()));
        }
    }

    fn is_over(&self) -> bool {
        self.verdict.is_some() || self.is_timed_out()
    }
}
