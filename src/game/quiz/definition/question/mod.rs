use rand::seq::SliceRandom;
use rand::Rng;
use serde::de;
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use urlencoding::decode;


fn percent_decoded<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    decode(&raw).map(Cow::into_owned).map_err(de::Error::custom)
}

fn percent_decoded_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer)?
        .iter()
        .map(|raw| decode(raw).map(Cow::into_owned).map_err(de::Error::custom))
        .collect()
}

/// A question as served by the trivia API.
#[derive(Clone, Debug, Deserialize)]
pub struct RawQuestion {
    #[serde(deserialize_with = "percent_decoded")]
    pub category: String,
    #[serde(deserialize_with = "percent_decoded")]
    pub difficulty: String,
    #[serde(deserialize_with = "percent_decoded")]
    pub question: String,
    #[serde(deserialize_with = "percent_decoded")]
    pub correct_answer: String,
    #[serde(deserialize_with = "percent_decoded_list")]
    pub incorrect_answers: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub text: String,
    pub category: String,
    pub difficulty: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Question {
    pub fn from_raw<R: Rng + ?Sized>(raw_question: RawQuestion, rng: &mut R) -> Self {
        let mut options = raw_question.incorrect_answers;
        options.push(raw_question.correct_answer.clone());
        options.shuffle(rng);

        Question {
            text: raw_question.question,
            category: raw_question.category,
            difficulty: raw_question.difficulty,
            options,
            answer: raw_question.correct_answer,
        }
    }

    pub fn is_correct(&self, option: &str) -> bool {
        option == self.answer
    }

    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        Question::from_raw(raw_question, &mut rand::thread_rng())
    }
}
