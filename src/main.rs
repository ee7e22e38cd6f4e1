use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use xlim_errors::labels::TEMPORARY_TXN_FAILURE;
use xlim_errors::{Config, DatabaseError};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file with extra labels
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a server error code carries a label
    Classify {
        /// Server error code
        #[arg(long, allow_hyphen_values = true)]
        code: i32,

        /// Label to check
        #[arg(short, long, default_value = TEMPORARY_TXN_FAILURE)]
        label: String,
    },
    /// List the label table
    Labels,
    /// Write a default configuration file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, DatabaseError> {
    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

/// Execute a command and return the lines to print
fn run(command: Commands, config: &Config) -> Result<Vec<String>, DatabaseError> {
    let table = config.label_table()?;

    match command {
        Commands::Classify { code, label } => {
            info!("Classifying code {} against label {}", code, label);

            Ok(vec![
                format!("{}: {}", label, table.contains(&label, Some(code))),
                format!("labels: {}", table.labels_for(Some(code)).join(", ")),
            ])
        }
        Commands::Labels => Ok(table
            .iter()
            .map(|(label, codes)| {
                let codes: Vec<String> = codes.iter().map(i32::to_string).collect();
                format!("{}: {}", label, codes.join(", "))
            })
            .collect()),
        Commands::InitConfig { path } => {
            config.save_to_file(&path)?;
            info!("Wrote configuration to {:?}", path);
            Ok(Vec::new())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    match run(cli.command, &config) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
