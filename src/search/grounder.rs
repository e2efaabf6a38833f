//! Expands action schemas into ground actions.

use crate::search::{Action, ActionSchema, Task};
use itertools::Itertools;
use tracing::{debug, info};

/// Every well-typed instantiation of every action schema of the task.
///
/// The order is stable: schemas by name, then bindings lexicographically by
/// object index. Breadth-first search breaks ties in this order, so equal
/// inputs always produce the same plan.
pub fn ground_actions(task: &Task) -> Vec<Action> {
    let mut actions = vec![];
    for schema in task
        .action_schemas()
        .iter()
        .sorted_by(|a, b| a.name().as_str().cmp(b.name().as_str()))
    {
        let before = actions.len();
        ground_schema(task, schema, &mut actions);
        debug!(
            schema = %schema.name(),
            ground_actions = actions.len() - before,
        );
    }
    info!(ground_actions = actions.len(), "grounding finished");
    actions
}

fn ground_schema(task: &Task, schema: &ActionSchema, actions: &mut Vec<Action>) {
    if schema.is_ground() {
        actions.push(schema.ground(&[]));
        return;
    }
    let candidates = schema
        .parameters()
        .iter()
        .map(|parameter| task.objects_of_type(parameter.type_index()).iter().copied());
    for instantiation in candidates.multi_cartesian_product() {
        actions.push(schema.ground(&instantiation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{GroundLiteral, Negatable};
    use crate::test_utils::*;

    fn rendered(task: &Task, actions: &[Action]) -> Vec<String> {
        actions.iter().map(|action| action.to_string(task)).collect()
    }

    #[test]
    fn research_grounding() {
        let task = Task::from_text(RESEARCH_DOMAIN_TEXT, RESEARCH_PROBLEM_TEXT).unwrap();
        let actions = ground_actions(&task);

        // analyze-paper 3, analyze-web-result 2, compose-answer 1,
        // execute-query 1, initialize-role 1, verify-answer 2 (two agents)
        assert_eq!(actions.len(), 10);
        assert_eq!(
            rendered(&task, &actions),
            vec![
                "(analyze-paper paper1 query1 inventory1)",
                "(analyze-paper paper2 query1 inventory1)",
                "(analyze-paper paper3 query1 inventory1)",
                "(analyze-web-result web1 query1 inventory1)",
                "(analyze-web-result web2 query1 inventory1)",
                "(compose-answer role1 answer1 inventory1)",
                "(execute-query role1 topic1 query1 inventory1)",
                "(initialize-role role1 topic1)",
                "(verify-answer role1 role1 answer1 inventory1)",
                "(verify-answer verifier1 role1 answer1 inventory1)",
            ]
        );
    }

    #[test]
    fn grounding_is_deterministic() {
        let task = Task::from_text(BLOCKSWORLD_DOMAIN_TEXT, BLOCKSWORLD_PROBLEM01_TEXT).unwrap();
        assert_eq!(ground_actions(&task), ground_actions(&task));
    }

    #[test]
    fn bindings_respect_parameter_types() {
        let task = Task::from_text(RESEARCH_DOMAIN_TEXT, RESEARCH_PROBLEM_TEXT).unwrap();
        for action in ground_actions(&task) {
            let schema = &task.action_schemas()[action.index];
            for (parameter, &object) in schema.parameters().iter().zip(&action.instantiation) {
                assert!(task
                    .types
                    .is_subtype(task.objects[object].type_index, parameter.type_index()));
            }
        }
    }

    #[test]
    fn blocksworld_grounding_keeps_equality_literals() {
        let task = Task::from_text(BLOCKSWORLD_DOMAIN_TEXT, BLOCKSWORLD_PROBLEM01_TEXT).unwrap();
        let actions = ground_actions(&task);

        // pick-up 3, put-down 3, stack 9, unstack 9
        assert_eq!(actions.len(), 24);
        let stack_a_a = actions
            .iter()
            .find(|action| action.to_string(&task) == "(stack a a)")
            .unwrap();
        assert!(stack_a_a
            .precondition()
            .literals()
            .contains(&GroundLiteral::Equality(Negatable::Negative((0, 0)))));
    }

    #[test]
    fn parameterless_schema_grounds_once() {
        let domain = r#"(define (domain d) (:predicates (p))
            (:action a :parameters () :effect (p)))"#;
        let problem = "(define (problem q) (:domain d) (:init) (:goal (p)))";
        let task = Task::from_text(domain, problem).unwrap();
        let actions = ground_actions(&task);
        assert_eq!(rendered(&task, &actions), vec!["(a)"]);
    }

    #[test]
    fn empty_type_yields_no_actions() {
        let domain = r#"(define (domain d) (:types block) (:predicates (p ?b - block))
            (:action a :parameters (?b - block) :effect (p ?b)))"#;
        let problem = "(define (problem q) (:domain d) (:init) (:goal (and)))";
        let task = Task::from_text(domain, problem).unwrap();
        assert!(ground_actions(&task).is_empty());
    }
}
