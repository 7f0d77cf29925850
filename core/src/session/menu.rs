use std::fmt::{self, Display};
use std::str::FromStr;

use estate_common::building::BuildingKind;
use thiserror::Error;

/// A valid answer to the building-type menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `0`: exit at the first menu, finish the project at later ones.
    Finish,
    Build(BuildingKind),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{0} is not one of 0, 1 or 2")]
    OutOfRange(i64),
}

impl FromStr for MenuChoice {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| ChoiceError::NotANumber(trimmed.to_string()))?;

        match number {
            0 => Ok(MenuChoice::Finish),
            1 => Ok(MenuChoice::Build(BuildingKind::Residential)),
            2 => Ok(MenuChoice::Build(BuildingKind::Commercial)),
            n => Err(ChoiceError::OutOfRange(n)),
        }
    }
}

/// Which building-type menu is on screen. Only the label of option `0` differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Start,
    Continue,
}

impl Menu {
    pub fn finish_label(&self) -> &'static str {
        match self {
            Menu::Start => "0. Exit",
            Menu::Continue => "0. Finish and view project",
        }
    }
}

impl Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Menu::Continue {
            writeln!(f)?;
        }
        writeln!(f, "Select building type:")?;
        writeln!(f, "1. Residential Building")?;
        writeln!(f, "2. Commercial Building")?;
        writeln!(f, "{}", self.finish_label())?;
        write!(f, "Enter your choice: ")
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
