//! Registry-based dispatch for multi-command CLIs.
//!
//! A tool registers named commands, each with a typed flag schema and a
//! handler, then hands the process arguments to a [`Dispatcher`]:
//!
//! ```no_run
//! use std::io::Write;
//! use std::process::ExitCode;
//! use verbs::{Config, Dispatcher, FlagSchema, Registry};
//!
//! fn main() -> ExitCode {
//!     let mut registry = Registry::new();
//!     registry
//!         .register("hello", "Print hello world", |flags, out| {
//!             let name = flags.get("name").map(|v| v.to_string());
//!             writeln!(out, "Hello, {}!", name.as_deref().unwrap_or("world"))?;
//!             Ok(())
//!         })
//!         .and_then(|()| {
//!             registry.declare_flags("hello", vec![FlagSchema::string("name", "Tell your Name")])
//!         })
//!         .expect("valid command table");
//!
//!     Dispatcher::new(&registry).with_config(Config::from_env()).run()
//! }
//! ```

pub mod command;
pub mod compiler;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod flags;
pub mod registry;
pub mod schema;
pub mod usage;

pub use command::{CommandSpec, Handler};
pub use compiler::{FlagParser, SchemaCompiler};
pub use config::{ColorMode, Config, ErrorFormat};
pub use dispatch::{Dispatcher, EXIT_FAILURE, EXIT_SUCCESS};
pub use error::{Error, Result};
pub use flags::ParsedFlags;
pub use registry::{DuplicatePolicy, Registry};
pub use schema::{FlagKind, FlagSchema, FlagValue};
pub use usage::render_usage;
