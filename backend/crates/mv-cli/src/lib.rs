//! mv-cli library
//!
//! Command definitions, service wiring and logging for the `mv` binary,
//! exported for use in tests.

pub mod app;
pub mod auth_commands;
pub mod cli;
pub mod commands;
pub mod diagnosis_commands;
pub mod error;
pub mod logger;
pub mod note_commands;


pub use app::App;
pub use auth_commands::AuthCommands;
pub use cli::Cli;
pub use commands::Commands;
pub use diagnosis_commands::DiagnosisCommands;
pub use error::{CliError, Result};
pub use note_commands::NoteCommands;
