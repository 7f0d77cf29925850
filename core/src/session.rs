//! The interactive console session.
//!
//! A [`Session`] walks the user through picking a first building, naming the
//! project and optionally adding more buildings, then prints the finished
//! project. Each step is a [`Stage`]; the loop in [`Session::run`] moves from one
//! stage to the next until the user exits or the project is done.
//!
//! Input and output are plain [`BufRead`] / [`Write`] handles so the whole flow
//! can be driven from a script in tests.

use std::io::{self, BufRead, Write};

use estate_common::building::Building;
use estate_common::project::BuildingProject;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::generator::BuildingGenerator;

mod menu;

pub use menu::{ChoiceError, Menu, MenuChoice};

pub const ADD_MORE_PROMPT: &str = "Do you want to add more buildings to the project? (yes/no)";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// How a session ended.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// `0` at the first menu; no project was created.
    Exited,
    Completed(BuildingProject),
}

enum Stage {
    SelectingFirstBuilding,
    DescribingProject(Building),
    AskingAddMore(BuildingProject),
    SelectingBuilding(BuildingProject),
    Done(BuildingProject),
}

impl Stage {
    fn name(&self) -> &'static str {
        match self {
            Stage::SelectingFirstBuilding => "selecting-first-building",
            Stage::DescribingProject(_) => "describing-project",
            Stage::AskingAddMore(_) => "asking-add-more",
            Stage::SelectingBuilding(_) => "selecting-building",
            Stage::Done(_) => "done",
        }
    }
}

pub struct Session<I, O, R: Rng> {
    input: I,
    output: O,
    generator: BuildingGenerator<R>,
}

impl<I, O, R> Session<I, O, R>
where
    I: BufRead,
    O: Write,
    R: Rng,
{
    pub fn new(input: I, output: O, generator: BuildingGenerator<R>) -> Self {
        Self {
            input,
            output,
            generator,
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        let mut stage = Stage::SelectingFirstBuilding;

        loop {
            debug!(stage = stage.name(), "entering stage");

            stage = match stage {
                Stage::SelectingFirstBuilding => match self.select_building(Menu::Start)? {
                    Some(building) => Stage::DescribingProject(building),
                    None => {
                        writeln!(self.output, "Exiting program...")?;
                        self.output.flush()?;
                        info!("exited before a project was started");
                        return Ok(Outcome::Exited);
                    }
                },
                Stage::DescribingProject(first) => {
                    writeln!(self.output, "\nEnter project description:")?;
                    self.output.flush()?;

                    let description = self.read_line()?.unwrap_or_default();
                    let mut project = BuildingProject::new(description);
                    project.add_building(first);
                    Stage::AskingAddMore(project)
                }
                Stage::AskingAddMore(project) => {
                    writeln!(self.output, "\n{ADD_MORE_PROMPT}")?;
                    self.output.flush()?;

                    match self.read_line()? {
                        Some(answer) if wants_more(&answer) => Stage::SelectingBuilding(project),
                        _ => Stage::Done(project),
                    }
                }
                Stage::SelectingBuilding(mut project) => {
                    match self.select_building(Menu::Continue)? {
                        Some(building) => {
                            project.add_building(building);
                            Stage::AskingAddMore(project)
                        }
                        None => Stage::Done(project),
                    }
                }
                Stage::Done(project) => {
                    writeln!(self.output, "\nFinal Building Project:")?;
                    writeln!(self.output, "{project}")?;
                    self.output.flush()?;
                    info!(buildings = project.len(), "project complete");
                    return Ok(Outcome::Completed(project));
                }
            };
        }
    }

    /// Shows `menu` until a valid choice comes in, then generates and prints the building.
    ///
    /// Returns `None` for `0` or when input runs out.
    fn select_building(&mut self, menu: Menu) -> Result<Option<Building>, SessionError> {
        let kind = loop {
            write!(self.output, "{menu}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("input closed at the building menu");
                return Ok(None);
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Finish) => return Ok(None),
                Ok(MenuChoice::Build(kind)) => break kind,
                Err(e) => debug!("rejected menu input: {e}"),
            }
        };

        let building = self.generator.generate(kind);
        writeln!(self.output, "\nGenerated {}:", building.kind_name())?;
        writeln!(self.output, "{building}")?;
        Ok(Some(building))
    }

    /// Reads one line without its line ending. `None` once input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the session.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

/// Case-insensitive match against `yes`. Anything else, including an empty line, means no.
pub fn wants_more(answer: &str) -> bool {
    answer.to_lowercase() == "yes"
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
