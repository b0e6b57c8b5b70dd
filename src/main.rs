use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use parking_lot::Mutex;
use std::io::BufRead;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

mod commands;
mod game;
mod output;
mod source;

use crate::commands::{Command, Flow};
use crate::game::settings::Settings;
use crate::game::ticker::Ticker;
use crate::game::Game;
use crate::output::terminal::TerminalOutput;
use crate::output::{GameOutput, Message};
use crate::source::{OpenTdbSource, DEFAULT_BASE_URL};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "pop-quiz", version, about = "Multiple-choice trivia in the terminal")]
struct Cli {
    /// Base URL of the Open Trivia DB compatible API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Seconds allowed per question
    #[arg(long, default_value_t = 30)]
    countdown_secs: u64,

    /// How long the verdict stays on screen before the next question, in milliseconds
    #[arg(long, default_value_t = 1000)]
    feedback_millis: u64,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            api_url: self.api_url.clone(),
            question_duration: Duration::from_secs(self.countdown_secs),
            feedback_duration: Duration::from_millis(self.feedback_millis),
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let settings = cli.settings();
    let source = OpenTdbSource::new(&settings.api_url)?;
    let output = TerminalOutput::new();
    let game = Arc::new(Mutex::new(Game::new(settings, output.clone(), source)));

    {
        let game = Arc::clone(&game);
        thread::Builder::new()
            .name("ticker".to_owned())
            .spawn(move || {
                let mut ticker = Ticker::new();
                loop {
                    thread::sleep(TICK_INTERVAL);
                    ticker.tick(&game);
                }
            })
            .context("Could not spawn ticker thread")?;
    }

    info!("Reading commands from stdin");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Could not read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| commands::execute(command, &mut *game.lock()));

        match result {
            Ok(Flow::Continue) => (),
            Ok(Flow::Quit) => break,
            Err(e) => {
                warn!("Rejected `{}`: {:#}", line.trim(), e);
                output.say(&Message::ActionRejected(e.to_string()));
            }
        }
    }

    info!("Exiting");
    Ok(())
}
