use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use clap::arg_enum;
use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug, PartialEq, Clone, Copy)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// Suite execution result to convert, JSON encoded
    #[structopt(parse(from_os_str))]
    pub file: PathBuf,

    /// Directory the yml-report folder is created in, overrides settings and environment
    #[structopt(long, short = "d", parse(from_os_str))]
    pub reports_dir: Option<PathBuf>,

    /// Set a custom settings file. Supported: YAML, JSON, TOML, HJSON
    #[structopt(long, short = "s", parse(from_os_str))]
    pub settings: Option<PathBuf>,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,
}

impl Opt {
    /// Requested level, `Info` when none was given.
    pub fn level_filter(&self) -> LevelFilter {
        self.logging.unwrap_or(LogLevel::Info).into()
    }
}

impl Into<LevelFilter> for LogLevel {
    fn into(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing_arguments() {
        let opt = Opt::from_iter(vec![
            "yml-report",
            "result.json",
            "-d",
            "out",
            "--logging",
            "debug",
        ]);

        assert_eq!(opt.file, PathBuf::from("result.json"));
        assert_eq!(opt.reports_dir, Some(PathBuf::from("out")));
        assert_eq!(opt.settings, None);
        assert_eq!(opt.logging, Some(LogLevel::Debug));
    }

    #[test]
    fn test_level_filter_leaves_options_usable() {
        let opt = Opt::from_iter(vec!["yml-report", "result.json", "-L", "trace"]);
        assert_eq!(opt.level_filter(), LevelFilter::Trace);
        assert_eq!(opt.logging, Some(LogLevel::Trace));
        assert_eq!(opt.file, PathBuf::from("result.json"));

        let defaulted = Opt::from_iter(vec!["yml-report", "result.json"]);
        if std::env::var_os("LOG_LEVEL").is_none() {
            assert_eq!(defaulted.level_filter(), LevelFilter::Info);
        }
    }

    #[test]
    fn test_log_level_conversion() {
        let level: LevelFilter = LogLevel::Warn.into();
        assert_eq!(level, LevelFilter::Warn);
    }
}
