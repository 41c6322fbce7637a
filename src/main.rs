mod app;
mod cli;
mod config;
mod manager;
mod sources;

use mvvmd_core::InstanceStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (cli, config) = cli::parse_config()?;

    let manager = app::build_manager(config, InstanceStore::global())?;
    let outcome = app::execute(&manager, &cli.command)?;
    println!("{}", serde_json::to_string_pretty(&outcome.output)?);

    if !outcome.success {
        std::process::exit(1);
    }

    Ok(())
}
