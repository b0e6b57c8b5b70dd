use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::game::quiz::definition::{Question, QuizDefinition};
use crate::source::{QuestionSource, QuizRequest, SourceError};

pub fn sample_question(index: usize) -> Question {
    Question {
        text: format!("Question #{}", index),
        category: "General Knowledge".to_owned(),
        difficulty: "easy".to_owned(),
        options: vec![
            format!("wrong {}-a", index),
            format!("right {}", index),
            format!("wrong {}-b", index),
            format!("wrong {}-c", index),
        ],
        answer: format!("right {}", index),
    }
}

pub const SAMPLE_CORRECT_OPTION: usize = 1;
pub const SAMPLE_WRONG_OPTION: usize = 0;

pub fn sample_questions(count: usize) -> Vec<Question> {
    (0..count).map(sample_question).collect()
}

#[derive(Clone)]
pub struct MockQuestionSource {
    questions: Option<Vec<Question>>,
    requests: Arc<RwLock<Vec<QuizRequest>>>,
    delay: Duration,
}

impl MockQuestionSource {
    pub fn new(questions: Vec<Question>) -> Self {
        MockQuestionSource {
            questions: Some(questions),
            requests: Arc::new(RwLock::new(Vec::new())),
            delay: Duration::default(),
        }
    }

    pub fn failing() -> Self {
        MockQuestionSource {
            questions: None,
            requests: Arc::new(RwLock::new(Vec::new())),
            delay: Duration::default(),
        }
    }

    /// Makes every fetch block for `delay`, like a slow network.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn requests(&self) -> Vec<QuizRequest> {
        self.requests.read().clone()
    }
}

impl QuestionSource for MockQuestionSource {
    fn fetch(&self, request: &QuizRequest) -> Result<QuizDefinition> {
        self.requests.write().push(*request);
        thread::sleep(self.delay);
        match &self.questions {
            Some(questions) => Ok(QuizDefinition::new(questions.clone())),
            None => Err(SourceError::Network("connection refused".to_owned()).into()),
        }
    }
}
