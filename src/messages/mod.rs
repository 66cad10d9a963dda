//! Execution result messages as produced by the test engine.
//!
//! These mirror the engine's JSON message mapping. Scalars and sequences fall
//! back to their zero value when absent, nested messages stay `Option` so the
//! mapper can tell a missing message apart from an empty one.

use derivative::*;
use serde_derive::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub enum ItemType {
    Step,
    Comment,
    Concept,
    Scenario,
    TableDrivenScenario,
    Table,
    Tags,
    #[serde(other)]
    Unknown,
}

impl Default for ItemType {
    fn default() -> Self {
        ItemType::Unknown
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExecutionStatus {
    NotExecuted,
    Passed,
    Failed,
    Skipped,
    #[serde(other)]
    Unknown,
}

impl Default for ExecutionStatus {
    fn default() -> Self {
        ExecutionStatus::NotExecuted
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorType {
    Assertion,
    Verification,
    #[serde(other)]
    Unknown,
}

impl Default for ErrorType {
    fn default() -> Self {
        ErrorType::Assertion
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub enum ParameterType {
    Static,
    Dynamic,
    #[serde(rename = "Special_String")]
    SpecialString,
    #[serde(rename = "Special_Table")]
    SpecialTable,
    Table,
    #[serde(other)]
    Unknown,
}

impl Default for ParameterType {
    fn default() -> Self {
        ParameterType::Static
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub enum FragmentType {
    Text,
    Parameter,
    #[serde(other)]
    Unknown,
}

impl Default for FragmentType {
    fn default() -> Self {
        FragmentType::Text
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoSuiteResult {
    pub spec_results: Vec<ProtoSpecResult>,
    pub pre_hook_failure: Option<ProtoHookFailure>,
    pub post_hook_failure: Option<ProtoHookFailure>,
    pub failed: bool,
    pub specs_failed_count: i32,
    pub execution_time: i64,
    pub success_rate: f32,
    pub environment: String,
    pub tags: String,
    pub project_name: String,
    pub timestamp: String,
    pub specs_skipped_count: i32,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoSpecResult {
    pub proto_spec: Option<ProtoSpec>,
    pub scenario_count: i32,
    pub scenario_failed_count: i32,
    pub failed: bool,
    pub execution_time: i64,
    pub skipped: bool,
    pub scenario_skipped_count: i32,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoSpec {
    pub spec_heading: String,
    pub items: Vec<ProtoItem>,
    pub is_table_driven: bool,
    pub pre_hook_failure: Option<ProtoHookFailure>,
    pub post_hook_failure: Option<ProtoHookFailure>,
    pub file_name: String,
    pub tags: Vec<String>,
}

/// One entry of a spec, scenario or concept body. Only the field matching
/// `item_type` is expected to be set.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoItem {
    pub item_type: ItemType,
    pub step: Option<ProtoStep>,
    pub concept: Option<ProtoConcept>,
    pub scenario: Option<ProtoScenario>,
    pub table_driven_scenario: Option<ProtoTableDrivenScenario>,
    pub table: Option<ProtoTable>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoScenario {
    pub scenario_heading: String,
    pub failed: bool,
    pub contexts: Vec<ProtoItem>,
    pub scenario_items: Vec<ProtoItem>,
    pub pre_hook_failure: Option<ProtoHookFailure>,
    pub post_hook_failure: Option<ProtoHookFailure>,
    pub tags: Vec<String>,
    pub execution_time: i64,
    pub skipped: bool,
    pub skip_errors: Vec<String>,
    pub tear_down_steps: Vec<ProtoItem>,
    pub execution_status: ExecutionStatus,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoTableDrivenScenario {
    pub scenario: Option<ProtoScenario>,
    pub table_row_index: i32,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoStep {
    pub actual_text: String,
    pub parsed_text: String,
    pub fragments: Vec<Fragment>,
    pub step_execution_result: Option<ProtoStepExecutionResult>,
}

/// A concept invocation. Its outcome lives in `concept_execution_result`
/// rather than on `concept_step`.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoConcept {
    pub concept_step: Option<ProtoStep>,
    pub steps: Vec<ProtoItem>,
    pub concept_execution_result: Option<ProtoStepExecutionResult>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoStepExecutionResult {
    pub execution_result: Option<ProtoExecutionResult>,
    pub pre_hook_failure: Option<ProtoHookFailure>,
    pub post_hook_failure: Option<ProtoHookFailure>,
    pub skipped: bool,
    pub skipped_reason: String,
}

#[derive(Deserialize, Default, Clone, Derivative)]
#[derivative(Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoExecutionResult {
    pub failed: bool,
    pub recoverable_error: bool,
    pub error_message: String,
    pub stack_trace: String,
    #[derivative(Debug = "ignore")]
    #[serde(with = "crate::configuration::deserialize::base64_property")]
    pub screen_shot: Vec<u8>,
    pub execution_time: i64,
    pub message: Vec<String>,
    pub error_type: ErrorType,
}

#[derive(Deserialize, Default, Clone, Derivative)]
#[derivative(Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoHookFailure {
    pub stack_trace: String,
    pub error_message: String,
    #[derivative(Debug = "ignore")]
    #[serde(with = "crate::configuration::deserialize::base64_property")]
    pub screen_shot: Vec<u8>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtoTable {
    pub headers: Option<ProtoTableRow>,
    pub rows: Vec<ProtoTableRow>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ProtoTableRow {
    pub cells: Vec<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct Fragment {
    pub fragment_type: FragmentType,
    pub text: String,
    pub parameter: Option<Parameter>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct Parameter {
    pub parameter_type: ParameterType,
    pub value: String,
    pub name: String,
    pub table: Option<ProtoTable>,
}

impl ProtoSuiteResult {
    pub fn from_json(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decoding_suite_result_from_json() {
        let value = json!({
            "projectName": "checkout",
            "specsFailedCount": 1,
            "specResults": [{
                "protoSpec": {
                    "specHeading": "Payments",
                    "items": [{ "itemType": "Scenario", "scenario": { "executionStatus": "FAILED" } }]
                }
            }]
        });
        let suite = ProtoSuiteResult::from_json(value.to_string().as_bytes()).unwrap();

        assert_eq!(suite.project_name, "checkout");
        assert_eq!(suite.specs_failed_count, 1);
        let spec = suite.spec_results[0].proto_spec.as_ref().unwrap();
        assert_eq!(spec.spec_heading, "Payments");
        assert!(spec.tags.is_empty());
        assert_eq!(spec.items[0].item_type, ItemType::Scenario);
        assert_eq!(
            spec.items[0].scenario.as_ref().unwrap().execution_status,
            ExecutionStatus::Failed
        );
    }

    #[test]
    fn test_unknown_enum_values_decode_to_catch_all() {
        let item: ProtoItem = serde_json::from_value(json!({ "itemType": "Hologram" })).unwrap();
        assert_eq!(item.item_type, ItemType::Unknown);

        let result: ProtoExecutionResult =
            serde_json::from_value(json!({ "errorType": "PROPHECY" })).unwrap();
        assert_eq!(result.error_type, ErrorType::Unknown);
    }

    #[test]
    fn test_screenshot_is_decoded_from_base64() {
        let failure: ProtoHookFailure =
            serde_json::from_value(json!({ "errorMessage": "boom", "screenShot": "aGVsbG8=" }))
                .unwrap();

        assert_eq!(failure.screen_shot, b"hello".to_vec());
        assert!(!format!("{:?}", failure).contains("104"));
    }

    #[test]
    fn test_special_table_parameter_type() {
        let parameter: Parameter =
            serde_json::from_value(json!({ "parameterType": "Special_Table" })).unwrap();
        assert_eq!(parameter.parameter_type, ParameterType::SpecialTable);
    }
}
