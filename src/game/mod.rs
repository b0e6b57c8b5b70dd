use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

pub mod quiz;
pub mod score;
pub mod settings;
pub mod ticker;

use crate::game::quiz::Quiz;
use crate::game::score::{Score, ScoreHandle};
use crate::game::settings::Settings;
use crate::output::{GameOutput, Message};
use crate::source::{Department, QuestionSource, QuizRequest};


/// Menu screens shown before a quiz starts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LobbyStep {
    Home,
    Departments,
    QuestionCounts(Department),
    /// The question fetch failed. Only `cancel` leaves this step.
    Stalled(Department),
}

enum Phase<O: GameOutput + Clone> {
    Lobby(LobbyStep),
    Quiz(Quiz<O>),
}

impl<O: GameOutput + Clone> Phase<O> {
    fn describe(&self) -> String {
        match self {
            Phase::Lobby(step) => format!("lobby ({:?})", step),
            Phase::Quiz(quiz) => format!("quiz ({} questions)", quiz.question_count()),
        }
    }
}

pub struct Game<O: GameOutput + Clone, S: QuestionSource> {
    current_phase: Phase<O>,
    settings: Settings,
    score: ScoreHandle,
    output: O,
    source: S,
}

impl<O: GameOutput + Clone, S: QuestionSource> Game<O, S> {
    pub fn new(settings: Settings, output: O, source: S) -> Game<O, S> {
        let game = Game {
            current_phase: Phase::Lobby(LobbyStep::Home),
            settings,
            score: Arc::new(RwLock::new(Score::default())),
            output,
            source,
        };
        game.output.say(&Message::Welcome);
        game
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        debug!("Entering game phase: {}", phase.describe());
        self.current_phase = phase;
    }

    pub fn lobby_step(&self) -> Option<LobbyStep> {
        match &self.current_phase {
            Phase::Lobby(step) => Some(*step),
            Phase::Quiz(_) => None,
        }
    }

    #[cfg(test)]
    pub fn current_question_index(&self) -> Option<usize> {
        match &self.current_phase {
            Phase::Quiz(quiz) if !quiz.is_over() => Some(quiz.current_index()),
            _ => None,
        }
    }

    pub fn score(&self) -> Score {
        *self.score.read()
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Phase::Quiz(quiz) = &mut self.current_phase {
            quiz.tick(dt);
        }
        self.end_quiz_if_over();
    }

    fn end_quiz_if_over(&mut self) {
        let is_over = match &self.current_phase {
            Phase::Quiz(quiz) => quiz.is_over(),
            Phase::Lobby(_) => false,
        };
        if is_over {
            let score = self.score();
            info!(
                "Quiz finished: {} correct out of {} played",
                score.correct, score.played
            );
            self.set_current_phase(Phase::Lobby(LobbyStep::Home));
            self.output.say(&Message::Welcome);
        }
    }

    pub fn help(&self) {
        self.output.say(&Message::Help);
    }

    pub fn play(&mut self) -> Result<()> {
        match self.current_phase {
            Phase::Lobby(LobbyStep::Home) => {
                self.set_current_phase(Phase::Lobby(LobbyStep::Departments));
                self.output
                    .say(&Message::DepartmentMenu(Department::ALL.to_vec()));
                Ok(())
            }
            _ => Err(anyhow!("A quiz is already being set up, `cancel` first")),
        }
    }

    pub fn select_department(&mut self, department: Department) -> Result<()> {
        match self.current_phase {
            Phase::Lobby(LobbyStep::Departments) => {
                self.set_current_phase(Phase::Lobby(LobbyStep::QuestionCounts(department)));
                self.output.say(&Message::QuestionCountMenu(
                    department,
                    self.settings.question_counts.clone(),
                ));
                Ok(())
            }
            Phase::Lobby(LobbyStep::Home) => Err(anyhow!("Choose `play` first")),
            _ => Err(anyhow!("Departments cannot be chosen right now")),
        }
    }

    pub fn select_question_count(&mut self, amount: u32) -> Result<()> {
        let department = match self.current_phase {
            Phase::Lobby(LobbyStep::QuestionCounts(department)) => department,
            Phase::Lobby(LobbyStep::Stalled(department)) => {
                debug!(
                    "Ignoring question count {} for {}, fetch already failed",
                    amount, department
                );
                return Ok(());
            }
            _ => return Err(anyhow!("Question counts cannot be chosen right now")),
        };

        if !self.settings.question_counts.contains(&amount) {
            return Err(anyhow!("{} questions is not one of the offered quiz sizes", amount));
        }
        let request = QuizRequest::new(department, amount)?;

        match self.source.fetch(&request) {
            Ok(definition) => {
                if definition.is_empty() {
                    warn!("The trivia API returned no {} questions", department);
                }
                info!(
                    "Starting {} quiz with {} questions",
                    department,
                    definition.len()
                );
                self.score.write().reset();
                let quiz = Quiz::new(
                    definition,
                    self.settings.clone(),
                    self.score.clone(),
                    self.output.clone(),
                );
                self.set_current_phase(Phase::Quiz(quiz));
                // An empty result set is over as soon as it starts.
                self.end_quiz_if_over();
            }
            Err(e) => {
                error!("Error fetching questions: {:#}", e);
                self.set_current_phase(Phase::Lobby(LobbyStep::Stalled(department)));
            }
        }
        Ok(())
    }

    pub fn answer(&mut self, option_index: usize) -> Result<()> {
        match &mut self.current_phase {
            Phase::Quiz(quiz) => match quiz.feedback() {
                Some(verdict) => Err(anyhow!(
                    "Wait for the next question, question {} was {}",
                    quiz.current_index() + 1,
                    verdict
                )),
                None if !quiz.is_accepting_answers() => {
                    Err(anyhow!("Wait for the next question"))
                }
                None => {
                    let verdict = quiz.answer(option_index)?;
                    debug!(
                        "Question {} {} with option {}",
                        quiz.current_index() + 1,
                        verdict,
                        option_index + 1
                    );
                    Ok(())
                }
            },
            Phase::Lobby(_) => Err(anyhow!("There is no quiz in progress")),
        }
    }

    /// Picks the `choice`-th (1-based) entry of whatever is on screen.
    pub fn choose(&mut self, choice: usize) -> Result<()> {
        let index = choice
            .checked_sub(1)
            .context("Choices are numbered from 1")?;
        match self.current_phase {
            Phase::Lobby(LobbyStep::Home) => match index {
                0 => self.play(),
                _ => Err(anyhow!("There is no choice {}", choice)),
            },
            Phase::Lobby(LobbyStep::Departments) => {
                let department = *Department::ALL
                    .get(index)
                    .with_context(|| format!("There is no department {}", choice))?;
                self.select_department(department)
            }
            Phase::Lobby(LobbyStep::QuestionCounts(_)) => {
                let amount = *self
                    .settings
                    .question_counts
                    .get(index)
                    .with_context(|| format!("There is no quiz size {}", choice))?;
                self.select_question_count(amount)
            }
            Phase::Lobby(LobbyStep::Stalled(_)) => Ok(()),
            Phase::Quiz(_) => self.answer(index),
        }
    }

    pub fn cancel(&mut self) {
        self.score.write().reset();
        if self.lobby_step() != Some(LobbyStep::Home) {
            self.output.say(&Message::QuizCancelled);
        }
        self.set_current_phase(Phase::Lobby(LobbyStep::Home));
        self.output.say(&Message::Welcome);
    }
}
