//! Terminal host for the maze engine.
//!
//! The binary is a composition root: it loads [`config::ClientConfig`],
//! installs logging, and feeds stdin lines through a [`session::Session`].
pub mod config;
pub mod logging;
pub mod session;

pub use config::ClientConfig;
pub use session::{Command, CommandError, Session};
