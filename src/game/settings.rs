use std::time::Duration;

use crate::source::DEFAULT_BASE_URL;

#[derive(Clone, Debug)]
pub struct Settings {
    pub api_url: String,
    pub question_duration: Duration,
    pub feedback_duration: Duration,
    pub countdown_announcements: Vec<Duration>,
    pub question_counts: Vec<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: DEFAULT_BASE_URL.to_owned(),
            question_duration: Duration::from_secs(30),
            feedback_duration: Duration::from_secs(1),
            countdown_announcements: vec![
                Duration::from_secs(20),
                Duration::from_secs(10),
                Duration::from_secs(5),
            ],
            question_counts: vec![5, 10, 15, 20],
        }
    }
}
