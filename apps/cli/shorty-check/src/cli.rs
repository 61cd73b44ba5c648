use std::path::PathBuf;

use crate::logger::LOG_LEVEL;

use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Check a long URL and an optional custom slug against a shortening service,
/// exactly as the web form would.
#[derive(Debug, Parser)]
#[command(name = "shorty-check", version)]
pub struct Args {
    /// Service base URL (overrides SHORTY_BASE_URL and the config file).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory holding config.json [default: platform config dir/shorty].
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Also write logs to DIR/shorty-check.log.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Long URL to check.
    #[arg(long, value_name = "URL")]
    pub long: Option<String>,

    /// Custom slug to check; ticks the "provide short url" box.
    #[arg(long, value_name = "SLUG")]
    pub short: Option<String>,

    /// Persist the effective configuration after the check.
    #[arg(long)]
    pub save_config: bool,

    /// Raise log verbosity one level per flag, up to trace.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The build's default level, raised once per `-v`.
    pub fn log_level(&self) -> LevelFilter {
        (0..self.verbose).fold(LOG_LEVEL, |level, _| raise(level))
    }
}

pub(crate) fn raise(level: LevelFilter) -> LevelFilter {
    match level {
        LevelFilter::Off => LevelFilter::Error,
        LevelFilter::Error => LevelFilter::Warn,
        LevelFilter::Warn => LevelFilter::Info,
        LevelFilter::Info => LevelFilter::Debug,
        LevelFilter::Debug | LevelFilter::Trace => LevelFilter::Trace,
    }
}
