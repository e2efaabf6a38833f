//! The two operations of the command surface: solving a task and validating
//! an externally supplied plan.

use crate::config::SearchConfig;
use crate::error::{PlanningError, ValidationFailure};
use crate::parsed_types::{Domain, Plan as ParsedPlan, Problem};
use crate::search::search_engines::SearchResult;
use crate::search::{ground_actions, validate, Action, Condition, Plan, State, Task};
use tracing::info;

/// Searches for a plan and re-checks any plan found with the validator, so a
/// returned plan is always valid. A validation failure here means the engine
/// itself is broken.
pub fn solve(
    initial_state: &State,
    goal: &Condition,
    actions: &[Action],
    config: &SearchConfig,
) -> Result<SearchResult, ValidationFailure> {
    let mut engine = config.create_engine();
    let (result, _statistics) = engine.search(initial_state, goal, actions);
    if let SearchResult::Success(plan) = &result {
        validate(initial_state, plan, goal)?;
        info!(plan_length = plan.len(), "plan validated");
    }
    Ok(result)
}

pub fn solve_task(task: &Task, config: &SearchConfig) -> Result<SearchResult, PlanningError> {
    let actions = ground_actions(task);
    Ok(solve(&task.initial_state, &task.goal, &actions, config)?)
}

/// Resolves and solves a parsed domain and problem. Grounding errors are
/// reported before any search starts.
pub fn solve_problem(
    domain: &Domain,
    problem: &Problem,
    config: &SearchConfig,
) -> Result<(Task, SearchResult), PlanningError> {
    let task = Task::new(domain, problem)?;
    let result = solve_task(&task, config)?;
    Ok((task, result))
}

/// Checks a parsed plan against a parsed domain and problem and returns the
/// final state.
pub fn validate_problem(
    domain: &Domain,
    problem: &Problem,
    plan: &ParsedPlan,
) -> Result<State, PlanningError> {
    let task = Task::new(domain, problem)?;
    let plan = Plan::from_parsed(plan, &task)?;
    Ok(validate(&task.initial_state, &plan, &task.goal)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GroundingError;
    use crate::parsers::Parser;
    use crate::search::search_engines::{BoundKind, SearchBound, SearchEngineName};
    use crate::test_utils::*;

    fn parsed(problem: &str) -> (Domain, Problem) {
        (
            Domain::from_str(RESEARCH_DOMAIN_TEXT).unwrap(),
            Problem::from_str(problem).unwrap(),
        )
    }

    #[test]
    fn solve_research_problem() {
        let (domain, problem) = parsed(RESEARCH_PROBLEM_TEXT);
        for engine in [SearchEngineName::Bfs, SearchEngineName::ParallelBfs] {
            let config = SearchConfig::default().with_engine(engine).with_workers(2);
            let (task, result) = solve_problem(&domain, &problem, &config).unwrap();
            let plan = expect_plan(result);
            assert!(plan.len() <= 20);
            assert_eq!(plan.len(), 6);
            assert_eq!(task.action_schemas()[plan[0].index].name(), "initialize-role");
        }
    }

    #[test]
    fn outcomes_stay_distinct() {
        let (domain, problem) = parsed(RESEARCH_PROBLEM_NO_WEBSEARCH_TEXT);
        let (_, result) = solve_problem(&domain, &problem, &SearchConfig::default()).unwrap();
        assert_eq!(result, SearchResult::Exhausted);
        assert_eq!(result.exit_code(), 1);

        let (domain, problem) = parsed(RESEARCH_PROBLEM_TEXT);
        let config =
            SearchConfig::default().with_bound(SearchBound::default().with_max_expansions(1));
        let (_, result) = solve_problem(&domain, &problem, &config).unwrap();
        assert_eq!(result, SearchResult::BoundExceeded(BoundKind::Expansions));
        assert_eq!(result.exit_code(), 2);
    }

    #[test]
    fn concurrent_solves_do_not_interfere() {
        let solvable = Task::from_text(RESEARCH_DOMAIN_TEXT, RESEARCH_PROBLEM_TEXT).unwrap();
        let unsolvable =
            Task::from_text(RESEARCH_DOMAIN_TEXT, RESEARCH_PROBLEM_NO_WEBSEARCH_TEXT).unwrap();
        let bounded = SearchBound::default().with_max_expansions(1);

        let mut runs = Vec::new();
        for engine in [SearchEngineName::Bfs, SearchEngineName::ParallelBfs] {
            let config = SearchConfig::default().with_engine(engine).with_workers(2);
            runs.push((&solvable, config, Some(6)));
            runs.push((&unsolvable, config, None));
            runs.push((&solvable, config.with_bound(bounded), None));
        }

        let results: Vec<SearchResult> = std::thread::scope(|scope| {
            let handles: Vec<_> = runs
                .iter()
                .map(|(task, config, _)| scope.spawn(move || solve_task(task, config).unwrap()))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        for (index, result) in results.into_iter().enumerate() {
            match index % 3 {
                0 => {
                    let plan = expect_plan(result);
                    assert_eq!(Some(plan.len()), runs[index].2);
                    validate(&solvable.initial_state, &plan, &solvable.goal).unwrap();
                }
                1 => assert_eq!(result, SearchResult::Exhausted),
                _ => assert_eq!(result, SearchResult::BoundExceeded(BoundKind::Expansions)),
            }
        }
    }

    #[test]
    fn grounding_errors_abort_before_search() {
        let domain = Domain::from_str(RESEARCH_DOMAIN_TEXT).unwrap();
        let problem = Problem::from_str(BLOCKSWORLD_PROBLEM01_TEXT).unwrap();
        let error = solve_problem(&domain, &problem, &SearchConfig::default()).unwrap_err();
        assert!(matches!(
            error,
            PlanningError::Grounding(GroundingError::DomainMismatch { .. })
        ));
        assert!(error.is_malformed_input());
    }

    #[test]
    fn validate_external_plan() {
        let (domain, problem) = parsed(RESEARCH_PROBLEM_TEXT);
        let plan = ParsedPlan::from_str(RESEARCH_PLAN_TEXT).unwrap();
        let final_state = validate_problem(&domain, &problem, &plan).unwrap();
        assert!(final_state.len() > 9);
    }

    #[test]
    fn validate_plan_skipping_web_results() {
        let (domain, problem) = parsed(RESEARCH_PROBLEM_TEXT);
        let plan = ParsedPlan::from_str(
            "(initialize-role role1 topic1)
             (execute-query role1 topic1 query1 inventory1)
             (analyze-paper paper1 query1 inventory1)
             (compose-answer role1 answer1 inventory1)",
        )
        .unwrap();
        let error = validate_problem(&domain, &problem, &plan).unwrap_err();
        let PlanningError::Validation(failure) = &error else {
            panic!("expected a validation failure, got {:?}", error);
        };
        assert_eq!(failure.step, 3);
        assert!(!failure.is_goal_failure());
        assert!(!error.is_malformed_input());
    }
}
