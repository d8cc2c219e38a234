use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Parser;
use log::{debug, info};

use crate::coordinates::{parse_latitude, parse_longitude};
use crate::error::{Result, SundirError};
use crate::output::{ConsoleSink, CsvSink, Report, ResultSink};
use crate::sequence;
use crate::time::{self, ZoneRule};
use crate::types::Site;

/// Calculate the AZ, EL of the sun.
#[derive(Parser, Debug, Clone)]
#[command(name = "sundir", version, about = "Calculate the AZ, EL of the sun.")]
pub struct Args {
    /// latitude ex: 35d37m51s or 35.6799d
    #[arg(allow_hyphen_values = true)]
    pub lat: String,

    /// longitude ex: 139d47m3s or 139.6806d
    #[arg(allow_hyphen_values = true)]
    pub lon: String,

    /// start date time "YYYY/MM/DD HH:MM:SS" (default: now)
    #[arg(long)]
    pub date: Option<String>,

    /// time interval(s) when calculating multiple times
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub interval: i64,

    /// number of calculations
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub repeat: i64,

    /// write the result to this CSV file instead of the console
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// sea level altitude (m)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub altitude: f64,

    /// time zone of --date and of printed times: local, an IANA name or +HH:MM
    #[arg(long, default_value = "local")]
    pub timezone: String,
}

/// Fully resolved run parameters; nothing here can fail to parse any more.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub site: Site,
    pub start: DateTime<Utc>,
    pub interval_seconds: i64,
    pub repeat: i64,
    pub csv: Option<PathBuf>,
    pub zone: ZoneRule,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        let latitude = parse_latitude(&args.lat)?;
        let longitude = parse_longitude(&args.lon)?;
        let zone: ZoneRule = args.timezone.parse()?;
        let start = match args.date.as_deref() {
            Some(text) => time::to_utc(&time::parse_local_time(text)?, &zone)?,
            None => time::now(),
        };
        sequence::validate_repeat(args.repeat)?;
        if let Some(path) = &args.csv {
            check_output_path(path)?;
        }

        let config = Config {
            site: Site {
                latitude,
                longitude,
                altitude: args.altitude,
            },
            start,
            interval_seconds: args.interval,
            repeat: args.repeat,
            csv: args.csv.clone(),
            zone,
        };
        debug!("resolved configuration: {config:?}");
        Ok(config)
    }
}

fn check_output_path(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(SundirError::OutputPath {
            path: path.to_path_buf(),
            reason: "path is a directory",
        });
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(SundirError::OutputPath {
                path: path.to_path_buf(),
                reason: "parent directory does not exist",
            })
        }
        _ => Ok(()),
    }
}

/// Computes every sample, then hands the finished report to the CSV file or
/// to `console`.
pub fn execute<W: Write>(config: &Config, console: W) -> Result<Report> {
    let location = config.site.location();
    let samples = sequence::generate(
        config.start,
        &location,
        config.interval_seconds,
        config.repeat,
    )?;
    let report = Report::new(&config.site, &samples, &config.zone);

    match &config.csv {
        Some(path) => {
            info!("saving {} samples to {}", samples.len(), path.display());
            CsvSink::new(path).emit(&report)?;
        }
        None => ConsoleSink::new(console).emit(&report)?,
    }
    Ok(report)
}
