//! CLI argument model and validation for the gdbot binary.
//!
//! Every flag has an environment fallback so the bot can be configured
//! entirely from the process environment.

pub mod cli_args;
pub mod cli_types;
pub mod validation;

pub use cli_args::Cli;
pub use cli_types::*;
pub use validation::*;
