//! Terminal host for the shareword editor.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod script;

pub use self::{cli::Cli, commands::run, error::AppError};
