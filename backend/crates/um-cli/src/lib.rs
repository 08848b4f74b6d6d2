//! um-cli library
//!
//! Argument definitions, the login server client and the terminal
//! collaborators used by the `um` binary.

pub mod app;
pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod error;
pub mod terminal;
pub mod user_commands;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
pub use error::{CliError, Result as CliResult};
