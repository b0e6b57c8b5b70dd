use anyhow::{anyhow, Result};
use log::debug;
use std::time::Duration;

use self::definition::*;
use self::phase::*;
use crate::game::score::ScoreHandle;
use crate::game::settings::Settings;
use crate::output::GameOutput;

pub mod definition;
mod phase;

#[cfg(test)]
mod tests;

trait State {
    fn on_begin(&mut self);
    fn on_tick(&mut self, dt: Duration);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

enum Phase<O: GameOutput> {
    Question(QuestionState<O>),
    Feedback(FeedbackState),
    Results(ResultsState<O>),
}

impl<O: GameOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Question(s) => s,
            Phase::Feedback(s) => s,
            Phase::Results(s) => s,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Phase::Question(_) => "question",
            Phase::Feedback(_) => "feedback",
            Phase::Results(_) => "results",
        }
    }
}

/// One run through a fetched question list.
pub struct Quiz<O: GameOutput + Clone> {
    settings: Settings,
    questions: Vec<Question>,
    current_index: usize,
    current_phase: Phase<O>,
    score: ScoreHandle,
    output: O,
}

impl<O: GameOutput + Clone> Quiz<O> {
    pub fn new(
        definition: QuizDefinition,
        settings: Settings,
        score: ScoreHandle,
        output: O,
    ) -> Quiz<O> {
        let questions = definition.into_questions();
        let first_phase = if questions.is_empty() {
            Phase::Results(ResultsState::new(score.clone(), 0, output.clone()))
        } else {
            Phase::Question(QuestionState::new(
                questions[0].clone(),
                1,
                questions.len(),
                settings.question_duration,
                settings.countdown_announcements.clone(),
                score.clone(),
                output.clone(),
            ))
        };

        let mut quiz = Quiz {
            settings,
            questions,
            current_index: 0,
            current_phase: first_phase,
            score,
            output,
        };
        debug!("Entering quiz phase: {}", quiz.current_phase.name());
        quiz.current_phase.get_state().on_begin();
        quiz
    }

    pub fn is_over(&self) -> bool {
        match self.current_phase {
            Phase::Results(_) => true,
            _ => false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_accepting_answers(&self) -> bool {
        match &self.current_phase {
            Phase::Question(s) => !s.is_over(),
            _ => false,
        }
    }

    /// The verdict on screen while the quiz pauses between questions.
    pub fn feedback(&self) -> Option<Verdict> {
        match &self.current_phase {
            Phase::Feedback(s) => Some(s.verdict()),
            _ => None,
        }
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        self.current_phase.get_state().on_end();
        debug!("Entering quiz phase: {}", phase.name());
        self.current_phase = phase;
        self.current_phase.get_state().on_begin();
    }

    pub fn tick(&mut self, dt: Duration) {
        let state = self.current_phase.get_state();
        state.on_tick(dt);
        if state.is_over() {
            self.advance();
        }
    }

    pub fn answer(&mut self, option_index: usize) -> Result<Verdict> {
        match &mut self.current_phase {
            Phase::Question(question_state) => {
                let verdict = question_state.answer(option_index)?;
                self.advance();
                Ok(verdict)
            }
            _ => Err(anyhow!("There is no question to answer right now")),
        }
    }

    fn advance(&mut self) {
        match &self.current_phase {
            Phase::Question(question_state) => {
                let verdict = question_state.verdict().unwrap_or(Verdict::TimedOut);
                let state = FeedbackState::new(verdict, self.settings.feedback_duration);
                self.set_current_phase(Phase::Feedback(state));
            }
            Phase::Feedback(_) => {
                self.current_index += 1;
                if self.current_index < self.questions.len() {
                    self.begin_question();
                } else {
                    let state = ResultsState::new(
                        self.score.clone(),
                        self.questions.len(),
                        self.output.clone(),
                    );
                    self.set_current_phase(Phase::Results(state));
                }
            }
            Phase::Results(_) => (),
        }
    }

    fn begin_question(&mut self) {
        let state = QuestionState::new(
            self.questions[self.current_index].clone(),
            self.current_index + 1,
            self.questions.len(),
            self.settings.question_duration,
            self.settings.countdown_announcements.clone(),
            self.score.clone(),
            self.output.clone(),
        );
        self.set_current_phase(Phase::Question(state));
    }
}
