use crate::error::ValidationFailure;
use crate::search::{Action, Condition, State};
use tracing::debug;

/// Replays `plan` from `initial_state` and returns the final state.
///
/// Fails at the first step whose precondition does not hold, naming the
/// first violated literal. A plan that runs to completion without reaching
/// the goal fails with a goal failure whose step is the plan length.
pub fn validate(
    initial_state: &State,
    plan: &[Action],
    goal: &Condition,
) -> Result<State, ValidationFailure> {
    let mut state = initial_state.clone();
    for (step, action) in plan.iter().enumerate() {
        if let Some(literal) = action.precondition().first_violation(&state) {
            return Err(ValidationFailure::precondition_violated(step, literal.clone()));
        }
        state = state.apply(action);
    }

    if let Some(literal) = goal.first_violation(&state) {
        return Err(ValidationFailure::goal_not_reached(plan.len(), literal.clone()));
    }
    debug!(steps = plan.len(), "plan is valid");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Plan, Task};
    use crate::test_utils::*;

    fn validate_plan(plan: &str) -> Result<State, ValidationFailure> {
        let task = Task::from_text(BLOCKSWORLD_DOMAIN_TEXT, BLOCKSWORLD_PROBLEM01_TEXT).unwrap();
        let plan = Plan::from_text(plan, &task).unwrap();
        validate(&task.initial_state, &plan, &task.goal)
    }

    fn describe(plan: &str) -> String {
        let task = Task::from_text(BLOCKSWORLD_DOMAIN_TEXT, BLOCKSWORLD_PROBLEM01_TEXT).unwrap();
        let plan = Plan::from_text(plan, &task).unwrap();
        validate(&task.initial_state, &plan, &task.goal)
            .unwrap_err()
            .describe(&task)
    }

    #[test]
    fn validate_good_plan_ok() {
        let plan = r#"
        (unstack c a)
        (put-down c)
        (pick-up b)
        (stack b c)
        (pick-up a)
        (stack a b)
        ; cost = 6 (unit cost)
        "#;

        let final_state = validate_plan(plan).unwrap();
        assert_eq!(final_state.len(), 5);
    }

    #[test]
    fn validate_bad_plan_not_applicable() {
        let plan = r#"
        (unstack c a)
        (put-down c)
        (pick-up a)
        (pick-up b)
        "#;

        let failure = validate_plan(plan).unwrap_err();
        assert_eq!(failure.step, 3);
        assert!(!failure.is_goal_failure());
        assert_eq!(
            describe(plan),
            "step 3: precondition (handempty) is violated"
        );
    }

    #[test]
    fn validate_bad_plan_incomplete() {
        let plan = r#"
        (unstack c a)
        (put-down c)
        (pick-up b)
        (stack b c)
        "#;

        let failure = validate_plan(plan).unwrap_err();
        assert_eq!(failure.step, 4);
        assert!(failure.is_goal_failure());
        assert_eq!(describe(plan), "goal literal (on a b) is not reached after 4 steps");
    }

    #[test]
    fn inequality_is_enforced() {
        let domain = r#"(define (domain d) (:predicates (touched))
            (:action touch :parameters (?x ?y) :precondition (not (= ?x ?y)) :effect (touched)))"#;
        let problem = "(define (problem p) (:domain d) (:objects a b) (:init) (:goal (touched)))";
        let task = Task::from_text(domain, problem).unwrap();

        let good = Plan::from_text("(touch a b)", &task).unwrap();
        assert!(validate(&task.initial_state, &good, &task.goal).is_ok());

        let bad = Plan::from_text("(touch a a)", &task).unwrap();
        let failure = validate(&task.initial_state, &bad, &task.goal).unwrap_err();
        assert_eq!(failure.step, 0);
        assert_eq!(failure.describe(&task), "step 0: precondition (not (= a a)) is violated");
    }

    #[test]
    fn empty_plan_checks_the_goal_only() {
        let failure = validate_plan("").unwrap_err();
        assert_eq!(failure.step, 0);
        assert!(failure.is_goal_failure());
    }
}
