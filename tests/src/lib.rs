//! End-to-end scenarios for the interactive session, driven by scripted input.

mod session;
