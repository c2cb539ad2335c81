use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "meetscribe")]
#[command(about = "Print meeting transcripts from the sessions API", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Language code used to pick transcript content (default: nl)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Only consider sessions with transcription active
    #[arg(long)]
    pub only_transcribed: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// List available sessions
    Sessions,
    /// Print version information
    Version,
}
