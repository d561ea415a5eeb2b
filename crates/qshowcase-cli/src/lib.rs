mod args;
mod commands;
pub mod config;
pub mod context;
pub mod error;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
