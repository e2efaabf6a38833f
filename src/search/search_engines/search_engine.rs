use crate::search::search_engines::{Bfs, ParallelBfs, SearchBound, SearchStatistics};
use crate::search::{Action, Condition, Plan, State};
use serde::Deserialize;
use std::fmt::{self, Display, Formatter};

/// Which limit of a [`SearchBound`] stopped the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum BoundKind {
    Expansions,
    Frontier,
    Time,
}

/// The three outcomes of a search. None of them is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A plan of minimum length
    Success(Plan),
    /// Every reachable state was expanded and none satisfies the goal, so
    /// the problem is provably unsolvable
    Exhausted,
    /// A bound was hit first; nothing is known about solvability
    BoundExceeded(BoundKind),
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    /// Exit status of the planner binary for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            SearchResult::Success(_) => 0,
            SearchResult::Exhausted => 1,
            SearchResult::BoundExceeded(_) => 2,
        }
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SearchResult::Success(plan) => write!(f, "plan of length {}", plan.len()),
            SearchResult::Exhausted => write!(f, "search space exhausted"),
            SearchResult::BoundExceeded(kind) => write!(f, "{} bound exceeded", kind),
        }
    }
}

pub trait SearchEngine {
    /// Searches for a plan from `initial_state` to a state satisfying `goal`
    /// using `actions`, whose order decides ties between equally short plans.
    fn search(
        &mut self,
        initial_state: &State,
        goal: &Condition,
        actions: &[Action],
    ) -> (SearchResult, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    /// Sequential breadth-first search
    #[default]
    Bfs,
    /// Level-synchronous breadth-first search over worker threads
    ParallelBfs,
}

impl SearchEngineName {
    pub fn create(&self, bound: SearchBound, workers: usize) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Bfs => Box::new(Bfs::new(bound)),
            SearchEngineName::ParallelBfs => Box::new(ParallelBfs::new(bound, workers)),
        }
    }
}
