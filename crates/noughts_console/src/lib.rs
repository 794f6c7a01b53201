//! Console front end for the noughts and crosses engine.
//!
//! The engine in `noughts_engine` only exposes state; this crate draws it,
//! reads moves from the terminal and wires up configuration and logging.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;
pub mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ConsoleConfig};
pub use render::BoardRenderer;
pub use session::{run_interactive, run_replay};
