use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use unidecode::unidecode;

lazy_static! {
    static ref FORBIDDEN_NAME_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9]").unwrap();
}

pub fn sanitize(input: &str) -> String {
    let input = unidecode(input);
    FORBIDDEN_NAME_CHARACTERS_REGEX
        .replace_all(&input.to_lowercase(), "")
        .into()
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Department {
    English,
    Mathematics,
    Biology,
    Chemistry,
    Physics,
    ComputerScience,
    Geography,
    History,
}

impl Department {
    pub const ALL: [Department; 8] = [
        Department::English,
        Department::Mathematics,
        Department::Biology,
        Department::Chemistry,
        Department::Physics,
        Department::ComputerScience,
        Department::Geography,
        Department::History,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Department::English => "English",
            Department::Mathematics => "Mathematics",
            Department::Biology => "Biology",
            Department::Chemistry => "Chemistry",
            Department::Physics => "Physics",
            Department::ComputerScience => "Computer Science",
            Department::Geography => "Geography",
            Department::History => "History",
        }
    }

    /// Open Trivia DB category. The three natural sciences share "Science & Nature".
    pub fn category_id(self) -> u32 {
        match self {
            Department::English => 10,
            Department::Mathematics => 19,
            Department::Biology | Department::Chemistry | Department::Physics => 17,
            Department::ComputerScience => 18,
            Department::Geography => 22,
            Department::History => 23,
        }
    }

    pub fn from_name(name: &str) -> Option<Department> {
        let wanted = sanitize(name);
        if wanted.is_empty() {
            return None;
        }
        Department::ALL
            .iter()
            .copied()
            .find(|d| sanitize(d.name()) == wanted)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
