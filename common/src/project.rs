use std::fmt::{self, Display};

use crate::building::Building;

/// A described, ordered collection of buildings.
///
/// Buildings are only ever appended; insertion order is kept and duplicates are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingProject {
    description: String,
    buildings: Vec<Building>,
}

impl BuildingProject {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            buildings: Vec::new(),
        }
    }

    pub fn add_building(&mut self, building: Building) {
        self.buildings.push(building);
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}

impl Display for BuildingProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project Description: {}", self.description)?;
        writeln!(f, "Buildings:")?;
        for building in &self.buildings {
            writeln!(f, "{building}")?;
        }
        Ok(())
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
