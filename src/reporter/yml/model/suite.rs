use serde_derive::Serialize;

use super::{result::HookFailure, spec::Spec, status::Status};

/// Root of the report document.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuiteResult {
    pub project_name: String,
    pub timestamp: String,
    pub success_rate: i32,
    pub environment: String,
    pub tags: String,
    pub execution_time: i64,
    pub execution_status: Status,
    pub spec_results: Vec<Spec>,
    pub before_suite_hook_failure: Option<HookFailure>,
    pub after_suite_hook_failure: Option<HookFailure>,
    pub passed_specs_count: i32,
    pub failed_specs_count: i32,
    pub skipped_specs_count: i32,
}
