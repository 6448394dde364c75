//! Demo tool built on `verbs`: one binary, many verbs.

pub mod commands;
pub mod logging;
