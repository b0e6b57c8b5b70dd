use std::time::Duration;

use crate::game::quiz::definition::Question;
use crate::source::Department;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    ActionRejected(String),
    AnswerCorrect(String),
    AnswerIncorrect { selected: String, answer: String },
    DepartmentMenu(Vec<Department>),
    FinalScore { correct: u32, total: usize },
    Help,
    QuestionBegins {
        number: usize,
        total: usize,
        question: Question,
        time_limit: Duration,
    },
    QuestionCountMenu(Department, Vec<u32>),
    QuizCancelled,
    TimeRemaining(Duration),
    TimeUp(String),
    Welcome,
}

pub trait GameOutput {
    fn say(&self, message: &Message);
}
