use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::configuration::constants::report::{
    REPORT_DIR_NAME, REPORT_FILE_NAME, TIMESTAMP_FORMAT,
};
use crate::error::{Error, Result};

/// Produces a folder name that keeps a report apart from earlier runs.
pub trait NameGenerator {
    fn random_name(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampNameGenerator;

impl NameGenerator for TimestampNameGenerator {
    fn random_name(&self) -> String {
        chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// `None` means the previous report is overwritten in place.
pub fn name_generator(overwrite_reports: bool) -> Option<Box<dyn NameGenerator>> {
    if overwrite_reports {
        None
    } else {
        Some(Box::new(TimestampNameGenerator))
    }
}

/// Writes `contents` as the report file and returns the report directory.
///
/// The file is written next to its destination first and renamed over it, so
/// an existing report is left intact when writing fails.
pub fn create_report(
    reports_dir: &Path,
    contents: &[u8],
    name_gen: Option<&dyn NameGenerator>,
) -> Result<PathBuf> {
    let mut destination = reports_dir.join(REPORT_DIR_NAME);
    if let Some(generator) = name_gen {
        destination.push(generator.random_name());
    }
    debug!("Writing report into {}", destination.display());
    std::fs::create_dir_all(&destination).map_err(|e| Error::io(&destination, e))?;

    let target = destination.join(REPORT_FILE_NAME);
    let mut file = NamedTempFile::new_in(&destination).map_err(|e| Error::io(&destination, e))?;
    file.write_all(contents)
        .and_then(|_| file.flush())
        .map_err(|e| Error::io(&target, e))?;
    file.persist(&target)
        .map_err(|e| Error::io(&target, e.error))?;
    Ok(destination)
}
