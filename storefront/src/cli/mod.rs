//! Command-line front end

pub mod args;
pub mod commands;

pub use args::{Args, Commands};
pub use commands::{build_session, run};
