pub mod item;
pub mod result;
pub mod scenario;
pub mod spec;
pub mod status;
pub mod suite;
pub mod table;

pub use self::{
    item::{Concept, Item, Step},
    result::{HookFailure, StepResult},
    scenario::{Scenario, NOT_TABLE_DRIVEN},
    spec::Spec,
    status::{ErrorType, Status},
    suite::SuiteResult,
    table::{Row, Table},
};
