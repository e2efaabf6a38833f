//! Level-synchronous breadth first search over a pool of scoped worker
//! threads.
//!
//! Each layer of the search is split into contiguous chunks, one per worker.
//! Workers share a concurrent visited set: whichever worker inserts a state
//! first owns it and adds it to its part of the next layer. Layers are
//! processed in order, so the first goal state found is at minimum depth.

use crate::search::search_engines::{
    BoundKind, SearchBound, SearchCounts, SearchEngine, SearchResult, SearchStatistics,
    TerminationCondition,
};
use crate::search::{Action, Condition, Plan, State};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread;
use tracing::{debug, info};

/// Maps each reached state to the state and action it was first reached by.
type VisitedStates = DashMap<Arc<State>, Option<(Arc<State>, usize)>>;

#[derive(Debug)]
pub struct ParallelBfs {
    bound: SearchBound,
    workers: usize,
}

impl ParallelBfs {
    pub fn new(bound: SearchBound, workers: usize) -> Self {
        Self {
            bound,
            workers: workers.max(1),
        }
    }
}

/// State shared by the workers of one layer.
struct Layer<'a> {
    goal: &'a Condition,
    actions: &'a [Action],
    visited: &'a VisitedStates,
    termination: &'a TerminationCondition,
    expansions: &'a AtomicUsize,
    stop: &'a AtomicBool,
    goal_state: &'a OnceLock<Arc<State>>,
    exceeded: &'a OnceLock<BoundKind>,
}

impl Layer<'_> {
    fn expand_chunk(&self, chunk: &[Arc<State>]) -> (Vec<Arc<State>>, SearchCounts) {
        let mut next = vec![];
        let mut counts = SearchCounts::default();

        for state in chunk {
            if self.stop.load(Ordering::Relaxed) {
                break;
            }
            let expanded_so_far = self.expansions.fetch_add(1, Ordering::Relaxed);
            if let Some(kind) = self.termination.should_terminate(expanded_so_far, 0) {
                let _ = self.exceeded.set(kind);
                self.stop.store(true, Ordering::Relaxed);
                break;
            }
            counts.expanded_nodes += 1;

            for (action_index, action) in self.actions.iter().enumerate() {
                if !action.is_applicable(state) {
                    continue;
                }
                counts.generated_actions += 1;

                let successor = Arc::new(state.apply(action));
                let is_new = match self.visited.entry(successor.clone()) {
                    Entry::Vacant(entry) => {
                        entry.insert(Some((state.clone(), action_index)));
                        true
                    }
                    Entry::Occupied(_) => false,
                };
                if !is_new {
                    counts.duplicate_nodes += 1;
                    continue;
                }
                counts.generated_nodes += 1;

                if self.goal.is_satisfied(&successor) {
                    let _ = self.goal_state.set(successor);
                    self.stop.store(true, Ordering::Relaxed);
                    return (next, counts);
                }
                next.push(successor);
            }
        }
        (next, counts)
    }
}

impl SearchEngine for ParallelBfs {
    fn search(
        &mut self,
        initial_state: &State,
        goal: &Condition,
        actions: &[Action],
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut termination = TerminationCondition::new(self.bound);
        info!(workers = self.workers);

        if goal.is_satisfied(initial_state) {
            info!("initial state satisfies the goal");
            statistics.finalise_search();
            return (SearchResult::Success(Plan::empty()), statistics);
        }

        let visited = VisitedStates::new();
        let root = Arc::new(initial_state.clone());
        visited.insert(root.clone(), None);

        let expansions = AtomicUsize::new(0);
        let stop = AtomicBool::new(false);
        let goal_state = OnceLock::new();
        let exceeded = OnceLock::new();

        let mut layer = vec![root];
        let mut depth = 0;
        let result = loop {
            if layer.is_empty() {
                break SearchResult::Exhausted;
            }
            termination.log_if_needed();
            if let Some(kind) = termination.should_terminate(expansions.load(Ordering::Relaxed), layer.len())
            {
                break SearchResult::BoundExceeded(kind);
            }
            debug!(depth, layer_size = layer.len());

            let shared = Layer {
                goal,
                actions,
                visited: &visited,
                termination: &termination,
                expansions: &expansions,
                stop: &stop,
                goal_state: &goal_state,
                exceeded: &exceeded,
            };
            let chunk_size = layer.len().div_ceil(self.workers);
            let results: Vec<(Vec<Arc<State>>, SearchCounts)> = thread::scope(|scope| {
                let handles: Vec<_> = layer
                    .chunks(chunk_size)
                    .map(|chunk| {
                        let shared = &shared;
                        scope.spawn(move || shared.expand_chunk(chunk))
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|handle| handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                    .collect()
            });

            let mut next_layer = vec![];
            for (states, counts) in results {
                statistics.add_counts(counts);
                next_layer.extend(states);
            }

            if let Some(goal_state) = goal_state.get() {
                break SearchResult::Success(extract_plan(&visited, goal_state.clone(), actions));
            }
            if let Some(&kind) = exceeded.get() {
                break SearchResult::BoundExceeded(kind);
            }
            layer = next_layer;
            depth += 1;
        };

        info!(outcome = %result, reached_states = visited.len());
        statistics.finalise_search();
        termination.finalise();
        (result, statistics)
    }
}

fn extract_plan(visited: &VisitedStates, goal_state: Arc<State>, actions: &[Action]) -> Plan {
    let mut steps = vec![];
    let mut current = goal_state;
    while let Some((parent, action_index)) = visited
        .get(current.as_ref())
        .and_then(|entry| entry.value().clone())
    {
        steps.push(actions[action_index].clone());
        current = parent;
    }
    steps.reverse();
    Plan::new(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::Bfs;
    use crate::search::{ground_actions, validate, Task};
    use crate::test_utils::*;

    fn search(problem: &str, bound: SearchBound, workers: usize) -> (Task, SearchResult, SearchStatistics) {
        let task = Task::from_text(RESEARCH_DOMAIN_TEXT, problem).unwrap();
        let actions = ground_actions(&task);
        let (result, statistics) =
            ParallelBfs::new(bound, workers).search(&task.initial_state, &task.goal, &actions);
        (task, result, statistics)
    }

    #[test]
    fn finds_a_shortest_valid_plan() {
        for workers in [1, 2, 4] {
            let (task, result, _) = search(RESEARCH_PROBLEM_TEXT, SearchBound::unbounded(), workers);
            let plan = expect_plan(result);
            assert_eq!(plan.len(), 6);
            assert_eq!(task.action_schemas()[plan[0].index].name(), "initialize-role");
            assert_eq!(task.action_schemas()[plan[5].index].name(), "verify-answer");
            assert!(validate(&task.initial_state, &plan, &task.goal).is_ok());
        }
    }

    #[test]
    fn single_worker_matches_sequential_search() {
        let task = Task::from_text(BLOCKSWORLD_DOMAIN_TEXT, BLOCKSWORLD_PROBLEM01_TEXT).unwrap();
        let actions = ground_actions(&task);
        let (parallel, _) = ParallelBfs::new(SearchBound::unbounded(), 1).search(
            &task.initial_state,
            &task.goal,
            &actions,
        );
        let (sequential, _) =
            Bfs::new(SearchBound::unbounded()).search(&task.initial_state, &task.goal, &actions);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn without_websearch_is_exhausted() {
        let (_, result, statistics) =
            search(RESEARCH_PROBLEM_NO_WEBSEARCH_TEXT, SearchBound::unbounded(), 3);
        assert_eq!(result, SearchResult::Exhausted);
        assert_eq!(statistics.expanded_nodes(), 2);
    }

    #[test]
    fn one_expansion_is_not_enough() {
        let (_, result, _) = search(
            RESEARCH_PROBLEM_TEXT,
            SearchBound::default().with_max_expansions(1),
            4,
        );
        assert_eq!(result, SearchResult::BoundExceeded(BoundKind::Expansions));
    }

    #[test]
    fn frontier_bound() {
        let (_, result, _) = search(
            RESEARCH_PROBLEM_TEXT,
            SearchBound::default().with_max_frontier(4),
            2,
        );
        assert_eq!(result, SearchResult::BoundExceeded(BoundKind::Frontier));
    }

    #[test]
    fn zero_workers_means_one() {
        let (_, result, _) = search(RESEARCH_PROBLEM_TEXT, SearchBound::unbounded(), 0);
        assert!(result.is_success());
    }
}
