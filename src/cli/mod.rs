pub mod args;
pub mod sessions;
pub mod transcript;

pub use args::{Cli, CliCommand};
pub use sessions::handle_sessions_command;
pub use transcript::handle_transcript_command;
