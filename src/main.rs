use anyhow::Result;
use clap::Parser;
use meetscribe::{
    cli::{handle_sessions_command, handle_transcript_command, Cli, CliCommand},
    config::Config,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout carries only command output.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(CliCommand::Version) => {
            println!("meetscribe {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(CliCommand::Sessions) => {
            let config = load_config(cli.language)?;
            handle_sessions_command(&config).await
        }
        None => {
            let config = load_config(cli.language)?;
            handle_transcript_command(&config, cli.only_transcribed).await
        }
    }
}

fn load_config(language: Option<String>) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(language) = language {
        config.language = language;
    }
    Ok(config)
}
