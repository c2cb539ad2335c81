pub mod cli;
pub mod config;
pub mod sessions;
pub mod transcript;
