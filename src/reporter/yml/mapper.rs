//! Conversion from engine result messages into the report document.
//!
//! Every function here is a pure tree walk. Unknown item kinds are dropped so
//! newer engines keep working, while a message the engine always sends being
//! absent aborts the whole conversion.

use crate::error::{Error, Result};
use crate::messages::{
    self, ExecutionStatus, ItemType, ParameterType, ProtoConcept, ProtoExecutionResult,
    ProtoHookFailure, ProtoItem, ProtoScenario, ProtoSpecResult, ProtoStep,
    ProtoStepExecutionResult, ProtoSuiteResult, ProtoTable,
};

use super::model::{
    Concept, ErrorType, HookFailure, Item, Row, Scenario, Spec, Status, Step, StepResult,
    SuiteResult, Table, NOT_TABLE_DRIVEN,
};

pub fn to_suite_result(psr: &ProtoSuiteResult) -> Result<SuiteResult> {
    let spec_results = psr
        .spec_results
        .iter()
        .map(to_spec)
        .collect::<Result<Vec<_>>>()?;
    let execution_status = if psr.failed {
        Status::Fail
    } else {
        Status::Pass
    };
    Ok(SuiteResult {
        project_name: psr.project_name.clone(),
        timestamp: psr.timestamp.clone(),
        success_rate: psr.success_rate as i32,
        environment: psr.environment.clone(),
        tags: psr.tags.clone(),
        execution_time: psr.execution_time,
        execution_status,
        passed_specs_count: (psr.spec_results.len() as i32)
            .wrapping_sub(psr.specs_failed_count)
            .wrapping_sub(psr.specs_skipped_count),
        failed_specs_count: psr.specs_failed_count,
        skipped_specs_count: psr.specs_skipped_count,
        spec_results,
        before_suite_hook_failure: to_hook_failure(psr.pre_hook_failure.as_ref()),
        after_suite_hook_failure: to_hook_failure(psr.post_hook_failure.as_ref()),
    })
}

fn to_spec(psr: &ProtoSpecResult) -> Result<Spec> {
    let proto_spec = psr
        .proto_spec
        .as_ref()
        .ok_or(Error::Missing("protoSpec of a spec result"))?;
    trace!("Mapping spec '{}'", proto_spec.spec_heading);

    let mut scenarios = Vec::new();
    let mut datatable = None;
    for item in &proto_spec.items {
        match item.item_type {
            ItemType::Scenario => {
                let scenario = item
                    .scenario
                    .as_ref()
                    .ok_or(Error::Missing("scenario of a scenario item"))?;
                scenarios.push(to_scenario(scenario, NOT_TABLE_DRIVEN)?);
            }
            ItemType::TableDrivenScenario => {
                let wrapper = item
                    .table_driven_scenario
                    .as_ref()
                    .ok_or(Error::Missing("tableDrivenScenario of a table driven item"))?;
                let scenario = wrapper
                    .scenario
                    .as_ref()
                    .ok_or(Error::Missing("scenario of a table driven scenario"))?;
                scenarios.push(to_scenario(scenario, wrapper.table_row_index)?);
            }
            ItemType::Table => {
                let table = item
                    .table
                    .as_ref()
                    .ok_or(Error::Missing("table of a table item"))?;
                datatable = Some(to_table(table));
            }
            ItemType::Unknown => debug!(
                "Skipping unrecognized item in spec '{}'",
                proto_spec.spec_heading
            ),
            _ => {}
        }
    }

    Ok(Spec {
        spec_heading: proto_spec.spec_heading.clone(),
        file_name: proto_spec.file_name.clone(),
        tags: proto_spec.tags.clone(),
        execution_time: psr.execution_time,
        execution_status: Status::from_flags(psr.failed, psr.skipped),
        scenarios,
        is_table_driven: proto_spec.is_table_driven,
        datatable,
        before_spec_hook_failure: to_hook_failure(proto_spec.pre_hook_failure.as_ref()),
        after_spec_hook_failure: to_hook_failure(proto_spec.post_hook_failure.as_ref()),
        passed_scenario_count: psr
            .scenario_count
            .wrapping_sub(psr.scenario_failed_count)
            .wrapping_sub(psr.scenario_skipped_count),
        failed_scenario_count: psr.scenario_failed_count,
        skipped_scenario_count: psr.scenario_skipped_count,
    })
}

fn to_scenario(scenario: &ProtoScenario, table_row_index: i32) -> Result<Scenario> {
    trace!("Mapping scenario '{}'", scenario.scenario_heading);
    Ok(Scenario {
        scenario_heading: scenario.scenario_heading.clone(),
        tags: scenario.tags.clone(),
        execution_time: scenario.execution_time,
        execution_status: scenario_status(scenario.execution_status),
        contexts: to_items(&scenario.contexts)?,
        teardowns: to_items(&scenario.tear_down_steps)?,
        items: to_items(&scenario.scenario_items)?,
        before_scenario_hook_failure: to_hook_failure(scenario.pre_hook_failure.as_ref()),
        after_scenario_hook_failure: to_hook_failure(scenario.post_hook_failure.as_ref()),
        skip_errors: scenario.skip_errors.clone(),
        table_row_index,
    })
}

fn scenario_status(status: ExecutionStatus) -> Status {
    match status {
        ExecutionStatus::Failed => Status::Fail,
        ExecutionStatus::Passed => Status::Pass,
        ExecutionStatus::Skipped => Status::Skip,
        _ => Status::NotExecuted,
    }
}

fn to_items(items: &[ProtoItem]) -> Result<Vec<Item>> {
    let mut mapped = Vec::with_capacity(items.len());
    for item in items {
        match item.item_type {
            ItemType::Step => {
                let step = item
                    .step
                    .as_ref()
                    .ok_or(Error::Missing("step of a step item"))?;
                mapped.push(Item::Step(to_step(step)?));
            }
            ItemType::Concept => {
                let concept = item
                    .concept
                    .as_ref()
                    .ok_or(Error::Missing("concept of a concept item"))?;
                mapped.push(Item::Concept(to_concept(concept)?));
            }
            other => debug!("Dropping {:?} item from step list", other),
        }
    }
    Ok(mapped)
}

fn to_step(step: &ProtoStep) -> Result<Step> {
    to_step_with(step, step.step_execution_result.as_ref())
}

fn to_step_with(step: &ProtoStep, execution: Option<&ProtoStepExecutionResult>) -> Result<Step> {
    // Every table parameter is visited, the last one is kept.
    let mut table = None;
    for parameter in step.fragments.iter().filter_map(|f| f.parameter.as_ref()) {
        if let ParameterType::Table | ParameterType::SpecialTable = parameter.parameter_type {
            let source = parameter
                .table
                .as_ref()
                .ok_or(Error::Missing("table of a table parameter"))?;
            table = Some(to_table(source));
        }
    }

    Ok(Step {
        step_text: step.actual_text.clone(),
        table,
        before_step_hook_failure: execution
            .and_then(|execution| to_hook_failure(execution.pre_hook_failure.as_ref())),
        after_step_hook_failure: execution
            .and_then(|execution| to_hook_failure(execution.post_hook_failure.as_ref())),
        result: to_step_result(execution),
    })
}

fn to_concept(concept: &ProtoConcept) -> Result<Concept> {
    let concept_step = concept
        .concept_step
        .as_ref()
        .ok_or(Error::Missing("conceptStep of a concept"))?;
    // The outcome of a concept is recorded on the concept, never on its step.
    let execution = concept.concept_execution_result.as_ref();
    Ok(Concept {
        concept_step: to_step_with(concept_step, execution)?,
        // Children come from `steps` and are reported as `items`.
        items: to_items(&concept.steps)?,
        result: to_step_result(execution),
    })
}

fn to_step_result(execution: Option<&ProtoStepExecutionResult>) -> StepResult {
    let empty = ProtoExecutionResult::default();
    let result = execution
        .and_then(|execution| execution.execution_result.as_ref())
        .unwrap_or(&empty);
    let skipped_reason = match execution {
        Some(execution) if execution.skipped => execution.skipped_reason.clone(),
        _ => String::new(),
    };
    StepResult {
        status: step_status(execution),
        stack_trace: result.stack_trace.clone(),
        screenshot: encode_screenshot(&result.screen_shot),
        error_message: result.error_message.clone(),
        execution_time: result.execution_time,
        skipped_reason,
        messages: result.message.clone(),
        error_type: to_error_type(result.error_type),
    }
}

/// Skip wins over a missing result, which wins over failure.
fn step_status(execution: Option<&ProtoStepExecutionResult>) -> Status {
    let execution = match execution {
        Some(execution) => execution,
        None => return Status::NotExecuted,
    };
    if execution.skipped {
        return Status::Skip;
    }
    match &execution.execution_result {
        None => Status::NotExecuted,
        Some(result) if result.failed => Status::Fail,
        Some(_) => Status::Pass,
    }
}

fn to_error_type(error_type: messages::ErrorType) -> ErrorType {
    match error_type {
        messages::ErrorType::Verification => ErrorType::Verification,
        _ => ErrorType::Assertion,
    }
}

fn to_table(table: &ProtoTable) -> Table {
    Table {
        headers: table
            .headers
            .as_ref()
            .map(|headers| headers.cells.clone())
            .unwrap_or_default(),
        rows: table
            .rows
            .iter()
            .map(|row| Row {
                cells: row.cells.clone(),
            })
            .collect(),
    }
}

fn to_hook_failure(failure: Option<&ProtoHookFailure>) -> Option<HookFailure> {
    failure.map(|failure| HookFailure {
        error_message: failure.error_message.clone(),
        screenshot: encode_screenshot(&failure.screen_shot),
        stack_trace: failure.stack_trace.clone(),
    })
}

fn encode_screenshot(screenshot: &[u8]) -> String {
    base64::encode(screenshot)
}
