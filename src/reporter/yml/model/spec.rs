use serde_derive::Serialize;

use super::{result::HookFailure, scenario::Scenario, status::Status, table::Table};

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Spec {
    pub spec_heading: String,
    pub file_name: String,
    pub tags: Vec<String>,
    pub execution_time: i64,
    pub execution_status: Status,
    pub scenarios: Vec<Scenario>,
    pub is_table_driven: bool,
    pub datatable: Option<Table>,
    pub before_spec_hook_failure: Option<HookFailure>,
    pub after_spec_hook_failure: Option<HookFailure>,
    pub passed_scenario_count: i32,
    pub failed_scenario_count: i32,
    pub skipped_scenario_count: i32,
}
