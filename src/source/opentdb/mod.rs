use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::time::Duration;

use crate::game::quiz::definition::{Question, QuizDefinition, RawQuestion};
use crate::source::{QuestionSource, QuizRequest, SourceError};


pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";
const TIMEOUT_SECS: u64 = 15;
const QUESTION_TYPE: &str = "multiple";
// Percent-encoded strings decode losslessly, HTML entities would leak into the terminal.
const ENCODING: &str = "url3986";

#[derive(Deserialize)]
struct ApiResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

/// Fetches multiple-choice questions from Open Trivia DB.
pub struct OpenTdbSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl OpenTdbSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .context("Could not build HTTP client")?;
        Ok(OpenTdbSource {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    pub fn request_url(&self, request: &QuizRequest) -> String {
        format!(
            "{}/api.php?amount={}&category={}&type={}&encode={}",
            self.base_url,
            request.amount,
            request.department.category_id(),
            QUESTION_TYPE,
            ENCODING
        )
    }
}

fn parse_response(body: &str) -> Result<QuizDefinition> {
    let response: ApiResponse =
        serde_json::from_str(body).context("Could not parse trivia API response")?;
    if let Some(error) = SourceError::from_response_code(response.response_code) {
        return Err(error.into());
    }
    let questions: Vec<Question> = response.results.into_iter().map(Question::from).collect();
    Ok(QuizDefinition::new(questions))
}

impl QuestionSource for OpenTdbSource {
    fn fetch(&self, request: &QuizRequest) -> Result<QuizDefinition> {
        let url = self.request_url(request);
        info!(
            "Fetching {} {} questions from {}",
            request.amount, request.department, url
        );

        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout(TIMEOUT_SECS)
            } else {
                SourceError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .text()
            .map_err(|e| SourceError::Network(e.to_string()))?;
        let definition = parse_response(&body)?;
        debug!("Received {} questions", definition.len());
        Ok(definition)
    }
}
