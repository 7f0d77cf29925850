pub mod project;

use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "estate")]
#[command(about = "Assemble a building project from randomly generated buildings.")]
pub struct CommandLine {
    /// Seed the building generator for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,
    /// Hide the banner and section headers
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
