pub mod serialize;
pub mod writer;
pub mod yml;

use std::path::PathBuf;

use crate::configuration::settings::Settings;
use crate::error::Result;
use crate::messages::ProtoSuiteResult;

use self::{
    serialize::render,
    writer::{create_report, name_generator},
    yml::mapper::to_suite_result,
};

/// Converts a suite result and writes it under the configured reports
/// directory. Nothing is written unless the whole document rendered.
pub fn generate(source: &ProtoSuiteResult, settings: &Settings) -> Result<PathBuf> {
    let document = to_suite_result(source)?;
    info!(
        "Mapped {} specs of project '{}'",
        document.spec_results.len(),
        document.project_name
    );
    let rendered = render(&document)?;
    let name_gen = name_generator(settings.overwrite_reports);
    create_report(
        &settings.gauge_reports_dir,
        rendered.as_bytes(),
        name_gen.as_deref(),
    )
}
