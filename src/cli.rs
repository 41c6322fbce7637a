use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path; every known data source is registered without one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the registered data sources as JSON
    Sources,

    /// Create a data access object from a "<data source>.<service>" id
    Dao {
        id: String,

        /// Parameter passed to the data source, as KEY=VALUE
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", s))
}

pub fn parse_config() -> Result<(Cli, Option<AppConfig>), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| cli.log_level.clone()))
        .with_writer(std::io::stderr)
        .init();

    let config = cli
        .config
        .as_ref()
        .map(AppConfig::load_from_file)
        .transpose()?;

    Ok((cli, config))
}
