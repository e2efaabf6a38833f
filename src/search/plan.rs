//! A plan is a sequence of actions that can be executed to achieve a goal. This
//! module provides the [`Plan`] struct, which represents a plan.

use crate::error::PlanningError;
use crate::parsed_types::{Name, Plan as ParsedPlan, PlanStep};
use crate::parsers::Parser;
use crate::search::{Action, Task};
use std::collections::HashMap;
use std::ops::Deref;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Action>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Action>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path, task: &Task) -> Result<Self, PlanningError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PlanningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&contents, task)
    }

    pub fn from_text(text: &str, task: &Task) -> Result<Self, PlanningError> {
        let parsed_plan = ParsedPlan::from_str(text)?;
        Self::from_parsed(&parsed_plan, task)
    }

    /// Resolves every step against its action schema. Steps are not checked
    /// for applicability here, that is the job of [`crate::search::validate`].
    pub fn from_parsed(parsed_plan: &ParsedPlan, task: &Task) -> Result<Self, PlanningError> {
        let action_table: HashMap<Name, usize> = task
            .action_schemas()
            .iter()
            .map(|action_schema| (*action_schema.name(), action_schema.index()))
            .collect();
        let symbols = task.symbols();

        let steps = parsed_plan
            .steps()
            .iter()
            .enumerate()
            .map(|(step_index, step)| {
                resolve_step(step, task, &action_table, |name| symbols.object_index(name))
                    .map_err(|reason| PlanningError::InvalidPlanStep {
                        step: step_index,
                        reason,
                    })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Action] {
        &self.steps
    }

    pub fn to_string(&self, task: &Task) -> String {
        self.steps
            .iter()
            .map(|action| action.to_string(task))
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Writes the plan in the format [`Plan::from_path`] reads back.
    pub fn write_to(&self, path: &Path, task: &Task) -> Result<(), PlanningError> {
        std::fs::write(path, format!("{}\n", self.to_string(task))).map_err(|source| {
            PlanningError::Output {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

fn resolve_step(
    step: &PlanStep,
    task: &Task,
    action_table: &HashMap<Name, usize>,
    object_index: impl Fn(&Name) -> Option<usize>,
) -> Result<Action, String> {
    let schema = action_table
        .get(step.action_name())
        .map(|&index| &task.action_schemas()[index])
        .ok_or_else(|| format!("unknown action `{}`", step.action_name()))?;
    if step.parameters().len() != schema.parameters().len() {
        return Err(format!(
            "action `{}` takes {} arguments but {} were given",
            schema.name(),
            schema.parameters().len(),
            step.parameters().len()
        ));
    }

    let mut instantiation = Vec::with_capacity(step.parameters().len());
    for (argument, parameter) in step.parameters().iter().zip(schema.parameters()) {
        let object = object_index(argument).ok_or_else(|| format!("unknown object `{}`", argument))?;
        if !task
            .types
            .is_subtype(task.objects[object].type_index, parameter.type_index())
        {
            return Err(format!(
                "object `{}` is not of type `{}` required by parameter `?{}`",
                argument,
                task.types.name(parameter.type_index()),
                parameter.name()
            ));
        }
        instantiation.push(object);
    }
    Ok(schema.ground(&instantiation))
}

impl IntoIterator for Plan {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Action];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
