use std::io;

use anyhow::Context;
use colored::*;
use tracing::info;

use crate::terminal::print;
use estate_common::config::Config;
use estate_core::generator::BuildingGenerator;
use estate_core::session::{Outcome, Session};

pub fn project(cfg: &Config) -> anyhow::Result<()> {
    let generator = match cfg.seed {
        Some(seed) => {
            info!("Seeding generator with {seed}");
            BuildingGenerator::seeded(seed)
        }
        None => BuildingGenerator::from_os_rng(),
    };

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), generator);
    let outcome = session.run().context("building session failed")?;
    drop(session);

    if let Outcome::Completed(project) = outcome {
        print_summary(project.len(), cfg);
    }

    Ok(())
}

fn print_summary(buildings: usize, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let count: ColoredString = building_count(buildings).bold().green();
    let output: String = format!("Project Complete: {count} assembled");

    print::fat_separator();
    print::centerln(&output);
    print::end_of_program();
}

fn building_count(buildings: usize) -> String {
    match buildings {
        1 => String::from("1 building"),
        n => format!("{n} buildings"),
    }
}
