use anyhow::{anyhow, Result};
use std::str::FromStr;

use crate::game::Game;
use crate::output::GameOutput;
use crate::source::department::sanitize;
use crate::source::{Department, QuestionSource};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Choose(usize),
    Play,
    Department(Department),
    Cancel,
    Help,
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Command> {
        let input = input.trim();
        if let Ok(choice) = input.parse::<usize>() {
            return Ok(Command::Choose(choice));
        }
        let command = match sanitize(input).as_str() {
            "play" | "playforfree" => Command::Play,
            "cancel" => Command::Cancel,
            "help" | "h" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Department::from_name(input)
                .map(Command::Department)
                .ok_or_else(|| anyhow!("Unknown command `{}`, type `help` to list commands", input))?,
        };
        Ok(command)
    }
}

pub fn execute<O, S>(command: Command, game: &mut Game<O, S>) -> Result<Flow>
where
    O: GameOutput + Clone,
    S: QuestionSource,
{
    match command {
        Command::Choose(choice) => game.choose(choice)?,
        Command::Play => game.play()?,
        Command::Department(department) => game.select_department(department)?,
        Command::Cancel => game.cancel(),
        Command::Help => game.help(),
        Command::Quit => return Ok(Flow::Quit),
    };
    Ok(Flow::Continue)
}
