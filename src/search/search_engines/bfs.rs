//! Breadth first search

use crate::search::search_engines::{
    SearchBound, SearchEngine, SearchResult, SearchSpace, SearchStatistics, TerminationCondition,
};
use crate::search::{Action, Condition, Plan, State};
use std::collections::VecDeque;
use tracing::info;

#[derive(Debug)]
pub struct Bfs {
    bound: SearchBound,
}

impl Bfs {
    pub fn new(bound: SearchBound) -> Self {
        Self { bound }
    }
}

impl SearchEngine for Bfs {
    fn search(
        &mut self,
        initial_state: &State,
        goal: &Condition,
        actions: &[Action],
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut termination = TerminationCondition::new(self.bound);

        if goal.is_satisfied(initial_state) {
            info!("initial state satisfies the goal");
            statistics.finalise_search();
            return (SearchResult::Success(Plan::empty()), statistics);
        }

        let mut search_space = SearchSpace::new(initial_state.clone());
        let mut queue = VecDeque::from([search_space.root_id()]);

        let result = 'search: loop {
            let Some(&node_id) = queue.front() else {
                break SearchResult::Exhausted;
            };
            termination.log_if_needed();
            if let Some(kind) = termination.should_terminate(statistics.expanded_nodes(), queue.len())
            {
                break SearchResult::BoundExceeded(kind);
            }
            queue.pop_front();
            statistics.increment_expanded_nodes();

            let state = search_space.get_state(node_id).clone();
            for (action_index, action) in actions.iter().enumerate() {
                if !action.is_applicable(&state) {
                    continue;
                }
                statistics.increment_generated_actions(1);

                let successor = state.apply(action);
                let is_goal = goal.is_satisfied(&successor);
                match search_space.insert_if_new(successor, node_id, action_index) {
                    Some(child_id) => {
                        statistics.increment_generated_nodes(1);
                        if is_goal {
                            break 'search SearchResult::Success(
                                search_space.extract_plan(child_id, actions),
                            );
                        }
                        queue.push_back(child_id);
                    }
                    None => statistics.increment_duplicate_nodes(),
                }
            }
        };

        info!(outcome = %result, reached_states = search_space.len());
        statistics.finalise_search();
        termination.finalise();
        (result, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::BoundKind;
    use crate::search::{ground_actions, validate, Task};
    use crate::test_utils::*;

    fn search(domain: &str, problem: &str, bound: SearchBound) -> (Task, SearchResult, SearchStatistics) {
        let task = Task::from_text(domain, problem).unwrap();
        let actions = ground_actions(&task);
        let (result, statistics) =
            Bfs::new(bound).search(&task.initial_state, &task.goal, &actions);
        (task, result, statistics)
    }

    #[test]
    fn research_plan_is_shortest_and_valid() {
        let (task, result, _) =
            search(RESEARCH_DOMAIN_TEXT, RESEARCH_PROBLEM_TEXT, SearchBound::unbounded());
        let plan = expect_plan(result);

        let expected: Vec<&str> = RESEARCH_PLAN_TEXT
            .lines()
            .filter(|line| !line.starts_with(';'))
            .collect();
        assert_eq!(plan.to_string(&task), expected.join("\n"));
        assert!(validate(&task.initial_state, &plan, &task.goal).is_ok());
    }

    #[test]
    fn research_without_websearch_is_exhausted() {
        let (_, result, statistics) = search(
            RESEARCH_DOMAIN_TEXT,
            RESEARCH_PROBLEM_NO_WEBSEARCH_TEXT,
            SearchBound::unbounded(),
        );
        assert_eq!(result, SearchResult::Exhausted);
        // the initial state and the one after initialize-role
        assert_eq!(statistics.expanded_nodes(), 2);
    }

    #[test]
    fn one_expansion_is_not_enough() {
        let (_, result, statistics) = search(
            RESEARCH_DOMAIN_TEXT,
            RESEARCH_PROBLEM_TEXT,
            SearchBound::default().with_max_expansions(1),
        );
        assert_eq!(result, SearchResult::BoundExceeded(BoundKind::Expansions));
        assert_eq!(statistics.expanded_nodes(), 1);
    }

    #[test]
    fn bound_large_enough_finds_the_plan() {
        let (_, unbounded, statistics) =
            search(RESEARCH_DOMAIN_TEXT, RESEARCH_PROBLEM_TEXT, SearchBound::unbounded());
        let (_, bounded, _) = search(
            RESEARCH_DOMAIN_TEXT,
            RESEARCH_PROBLEM_TEXT,
            SearchBound::default().with_max_expansions(statistics.expanded_nodes()),
        );
        assert_eq!(bounded, unbounded);
    }

    #[test]
    fn frontier_bound() {
        // three interchangeable papers and two web results open five branches
        let (_, result, _) = search(
            RESEARCH_DOMAIN_TEXT,
            RESEARCH_PROBLEM_TEXT,
            SearchBound::default().with_max_frontier(4),
        );
        assert_eq!(result, SearchResult::BoundExceeded(BoundKind::Frontier));
    }

    #[test]
    fn sussman_anomaly_takes_six_steps() {
        let (task, result, _) =
            search(BLOCKSWORLD_DOMAIN_TEXT, BLOCKSWORLD_PROBLEM01_TEXT, SearchBound::unbounded());
        let plan = expect_plan(result);
        assert_eq!(
            plan.to_string(&task),
            "(unstack c a)\n(put-down c)\n(pick-up b)\n(stack b c)\n(pick-up a)\n(stack a b)"
        );
    }

    #[test]
    fn goal_holding_initially_gives_empty_plan() {
        let problem = r#"(define (problem done) (:domain blocksworld)
            (:objects a b - block)
            (:init (on a b) (ontable b) (clear a) (handempty))
            (:goal (on a b)))"#;
        let (_, result, statistics) =
            search(BLOCKSWORLD_DOMAIN_TEXT, problem, SearchBound::default().with_max_expansions(0));
        assert_eq!(result, SearchResult::Success(Plan::empty()));
        assert_eq!(statistics.expanded_nodes(), 0);
    }

    #[test]
    fn negative_goal_uses_closed_world() {
        let problem = r#"(define (problem clear-table) (:domain blocksworld)
            (:objects a - block)
            (:init (ontable a) (clear a) (handempty))
            (:goal (and (not (ontable a)) (not (handempty)))))"#;
        let (task, result, _) =
            search(BLOCKSWORLD_DOMAIN_TEXT, problem, SearchBound::unbounded());
        let plan = expect_plan(result);
        assert_eq!(plan.to_string(&task), "(pick-up a)");
    }
}
