use itertools::Itertools;
use std::io::Write;

use crate::output::{GameOutput, Message};


fn numbered<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| format!("  {}. {}", index + 1, item))
        .join("\n")
}

pub fn interpret_message(message: &Message) -> String {
    use Message::*;
    match message {
        Welcome => format!(
            "🎲 Welcome to Pop Quiz!\n{}\nType a number to choose, or `help` to list commands.",
            numbered(&["Play for free"])
        ),
        Help => "📋 Commands\n- `<number>` picks a menu entry or answers the current question.\n- `play` opens the department list.\n- `<department name>` picks a department, e.g. `history`.\n- `cancel` abandons the current quiz.\n- `quit` exits.".into(),
        DepartmentMenu(departments) => {
            format!("🏫 Choose a department\n{}", numbered(departments))
        }
        QuestionCountMenu(department, counts) => format!(
            "🔢 How many {} questions?\n{}",
            department,
            numbered(counts.iter().map(|c| format!("{} questions", c)))
        ),
        QuestionBegins {
            number,
            total,
            question,
            time_limit,
        } => format!(
            "\nQuestion {}/{} ({}, {})\n{}\n{}\n🕒 Time left: {} seconds",
            number,
            total,
            question.category,
            question.difficulty,
            question.text,
            numbered(&question.options),
            time_limit.as_secs()
        ),
        TimeRemaining(duration) => format!("🕒 Time left: {} seconds", duration.as_secs()),
        AnswerCorrect(answer) => format!("✅ {} is correct!", answer),
        AnswerIncorrect { selected, answer } => format!(
            "❌ {} is wrong. ✅ The answer was {}.",
            selected, answer
        ),
        TimeUp(answer) => format!("⏰ Time's up! ✅ The answer was {}.", answer),
        FinalScore { correct, total } => {
            format!("Your final score is {} out of {}", correct, total)
        }
        QuizCancelled => "The quiz was cancelled.".into(),
        ActionRejected(reason) => format!("⚠️ {}", reason),
    }
}

/// Prints game messages on stdout.
#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }
}

impl GameOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{}", interpret_message(message)) {
            log::warn!("Could not write to terminal: {}", e);
        }
    }
}
