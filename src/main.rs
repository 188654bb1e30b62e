extern crate pretty_env_logger;
#[macro_use]
extern crate log;

use std::env;
use std::process;

use anyhow::{Context, Result};

mod acquire;
mod config;
mod convert;
mod ddb;
mod error;
mod lxnav;
mod output;

use crate::config::{Config, OutputFormat};

fn main() {
    let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&log_filter)
        .init();

    let matches = config::app().get_matches();

    if let Err(error) = Config::from_matches(&matches).and_then(|config| run(&config)) {
        eprintln!("Error: {:?}", error);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let json = config
        .input
        .acquire()
        .context("Could not load the OGN device database")?;

    let data = match config.format {
        OutputFormat::Lxnav => convert::convert(&json)?,
        OutputFormat::Xml => convert::convert_to_xml(&json)?,
    };

    output::write_file(&config.output, &data)?;

    info!("Done");
    Ok(())
}
