//! Shared data model for `estate`.
//!
//! * [`building`]: the [`building::Building`] record and its closed set of variants.
//! * [`project`]: the [`project::BuildingProject`] aggregate that owns a list of buildings.
//! * [`config`]: runtime options handed from the CLI to the rest of the program.

pub mod building;
pub mod config;
pub mod project;
