pub mod question;

pub use question::{Question, RawQuestion};

/// The ordered questions of one quiz.
#[derive(Debug, Default)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn new(questions: Vec<Question>) -> QuizDefinition {
        QuizDefinition { questions }
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
