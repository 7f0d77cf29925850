//! Building generation and the interactive project session.
//!
//! * [`generator`]: randomized [`estate_common::building::Building`] instances within fixed ranges.
//! * [`session`]: the console state machine that assembles a project from user choices.

pub mod generator;
pub mod session;
