use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches};

use crate::acquire::{AcquireInput, DDB_URL};

const DEFAULT_TIMEOUT: &str = "120";
const DEFAULT_MAX_SIZE: &str = "67108864";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    /// Byte-shifted file as expected by LXNAV devices.
    Lxnav,
    /// Plain FLARMNET XML.
    Xml,
}

/// Resolved settings for one conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: AcquireInput,
    pub output: PathBuf,
    pub format: OutputFormat,
}

pub fn app() -> App<'static, 'static> {
    App::new("ogn-lxnav")
        .about("Converts the OGN device database into an LXNAV FLARMNET file")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("FILES")
                .value_name("FILE")
                .help("[INPUT] OUTPUT: reads INPUT if given, downloads the OGN device database otherwise")
                .required(true)
                .multiple(true)
                .min_values(1)
                .max_values(2),
        )
        .arg(
            Arg::with_name("url")
                .long("url")
                .value_name("URL")
                .env("OGN_DDB_URL")
                .default_value(DDB_URL)
                .help("Download location of the OGN device database"),
        )
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .env("OGN_DDB_TIMEOUT")
                .default_value(DEFAULT_TIMEOUT)
                .help("Download timeout"),
        )
        .arg(
            Arg::with_name("max-size")
                .long("max-size")
                .value_name("BYTES")
                .default_value(DEFAULT_MAX_SIZE)
                .help("Largest accepted download"),
        )
        .arg(
            Arg::with_name("xml")
                .long("xml")
                .help("Writes plain FLARMNET XML instead of the LXNAV file"),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Config> {
        let files: Vec<PathBuf> = matches
            .values_of_os("FILES")
            .map(|values| values.map(PathBuf::from).collect())
            .unwrap_or_default();

        let (input, output) = match files.as_slice() {
            [output] => {
                let url = matches.value_of("url").unwrap_or(DDB_URL).to_string();

                let timeout = matches.value_of("timeout").unwrap_or(DEFAULT_TIMEOUT);
                let timeout = timeout
                    .parse::<u64>()
                    .with_context(|| format!("invalid timeout: {}", timeout))?;

                let max_size = matches.value_of("max-size").unwrap_or(DEFAULT_MAX_SIZE);
                let max_size = max_size
                    .parse::<u64>()
                    .with_context(|| format!("invalid maximum download size: {}", max_size))?;

                let input = AcquireInput::FromNetwork {
                    url,
                    timeout: Duration::from_secs(timeout),
                    max_size,
                };

                (input, output.clone())
            }
            [input, output] => {
                if matches.occurrences_of("url") > 0 {
                    warn!("Ignoring --url since an input file was given");
                }

                (AcquireInput::FromFile(input.clone()), output.clone())
            }
            _ => anyhow::bail!("expected `[INPUT] OUTPUT`, got {} paths", files.len()),
        };

        let format = if matches.is_present("xml") {
            OutputFormat::Xml
        } else {
            OutputFormat::Lxnav
        };

        Ok(Config { input, output, format })
    }
}
