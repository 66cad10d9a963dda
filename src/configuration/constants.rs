pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
}

pub mod report {
    pub const REPORT_DIR_NAME: &'static str = "yml-report";
    pub const REPORT_FILE_NAME: &'static str = "result.yml";
    pub const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H.%M.%S";
}

pub mod settings {
    pub const REPORTS_DIR_KEY: &'static str = "gauge_reports_dir";
    pub const OVERWRITE_REPORTS_KEY: &'static str = "overwrite_reports";
    pub const DEFAULT_REPORTS_DIR: &'static str = "reports";
}
