use anyhow::{anyhow, Result};

use crate::game::quiz::definition::QuizDefinition;

pub mod department;
mod error;
#[cfg(test)]
pub mod mock;
mod opentdb;

pub use self::department::Department;
pub use self::error::SourceError;
pub use self::opentdb::{OpenTdbSource, DEFAULT_BASE_URL};

pub const MAX_QUESTIONS_PER_REQUEST: u32 = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuizRequest {
    pub department: Department,
    pub amount: u32,
}

impl QuizRequest {
    pub fn new(department: Department, amount: u32) -> Result<Self> {
        if amount == 0 || amount > MAX_QUESTIONS_PER_REQUEST {
            return Err(anyhow!(
                "A quiz must have between 1 and {} questions",
                MAX_QUESTIONS_PER_REQUEST
            ));
        }
        Ok(QuizRequest { department, amount })
    }
}

pub trait QuestionSource {
    fn fetch(&self, request: &QuizRequest) -> Result<QuizDefinition>;
}
