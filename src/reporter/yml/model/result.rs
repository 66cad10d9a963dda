use serde_derive::Serialize;

use super::status::{ErrorType, Status};

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StepResult {
    pub status: Status,
    pub stack_trace: String,
    /// Base64 of the captured screenshot, empty when there is none.
    pub screenshot: String,
    pub error_message: String,
    pub execution_time: i64,
    pub skipped_reason: String,
    pub messages: Vec<String>,
    pub error_type: ErrorType,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HookFailure {
    pub error_message: String,
    pub screenshot: String,
    pub stack_trace: String,
}
