use serde_derive::Serialize;

use super::{
    result::{HookFailure, StepResult},
    table::Table,
};

/// Entry of a scenario or concept body, tagged by `itemType`.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "itemType", rename_all = "lowercase")]
pub enum Item {
    Step(Step),
    Concept(Concept),
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub step_text: String,
    pub table: Option<Table>,
    pub before_step_hook_failure: Option<HookFailure>,
    pub after_step_hook_failure: Option<HookFailure>,
    pub result: StepResult,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub concept_step: Step,
    pub items: Vec<Item>,
    pub result: StepResult,
}

#[cfg(test)]
impl Item {
    pub fn result(&self) -> &StepResult {
        match self {
            Item::Step(step) => &step.result,
            Item::Concept(concept) => &concept.result,
        }
    }
}
