use serde_derive::Serialize;

use super::{item::Item, result::HookFailure, status::Status};

/// Row index reported for scenarios that are not driven by a data table.
pub const NOT_TABLE_DRIVEN: i32 = -1;

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub scenario_heading: String,
    pub tags: Vec<String>,
    pub execution_time: i64,
    pub execution_status: Status,
    pub contexts: Vec<Item>,
    pub teardowns: Vec<Item>,
    pub items: Vec<Item>,
    pub before_scenario_hook_failure: Option<HookFailure>,
    pub after_scenario_hook_failure: Option<HookFailure>,
    pub skip_errors: Vec<String>,
    pub table_row_index: i32,
}
