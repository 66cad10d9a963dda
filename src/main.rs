#[macro_use]
extern crate log;

mod configuration;
mod error;
mod messages;
mod reporter;

use log::LevelFilter;
use std::{path::PathBuf, process::exit};
use structopt::StructOpt;

use self::{
    configuration::command_line::Opt,
    configuration::settings::Settings,
    error::{Error, Result},
    messages::ProtoSuiteResult,
};

fn main() {
    let options = Opt::from_args();

    if let Err(e) = init_logging(options.level_filter(), &options.log_output_file) {
        eprintln!("Failed to initialise logging: {}", e);
        exit(1);
    }

    match run(&options) {
        Ok(report_dir) => info!(
            "Successfully generated yml-report to => {}",
            report_dir.display()
        ),
        Err(e) => {
            error!("Failed to generate yml-report: {}", e);
            exit(1);
        }
    }
}

fn run(options: &Opt) -> Result<PathBuf> {
    let settings = Settings::load(options.settings.as_deref(), options.reports_dir.as_deref())?;
    debug!("Resolved settings {:#?}", settings);

    let data = std::fs::read(&options.file).map_err(|e| Error::io(&options.file, e))?;
    let source = ProtoSuiteResult::from_json(&data)?;
    debug!(
        "Loaded execution result with {} specs from {}",
        source.spec_results.len(),
        options.file.display()
    );
    reporter::generate(&source, &settings)
}

fn init_logging(
    level: LevelFilter,
    output: &Option<PathBuf>,
) -> std::result::Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
