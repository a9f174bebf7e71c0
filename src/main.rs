use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands, RunArgs};
use pomo::cli::commands;
use pomo::config::Config;
use pomo::logging;
use pomo::PomoError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        let code = e.downcast_ref::<PomoError>().map_or(1, PomoError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    let output = match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => commands::run(&args, &config)?,
        Commands::Simulate(args) => {
            logging::init_stderr(&config.log)?;
            commands::simulate(&args, &config, format)?
        }
        Commands::Config(args) => {
            commands::config(&args.command, &config, cli.config.as_deref(), format)?
        }
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
