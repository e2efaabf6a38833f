mod bfs;
mod parallel_bfs;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;

pub use bfs::Bfs;
pub use parallel_bfs::ParallelBfs;
pub use search_engine::{BoundKind, SearchEngine, SearchEngineName, SearchResult};
pub use search_node::{NodeId, SearchNode};
pub use search_space::SearchSpace;
pub use search_statistics::{SearchCounts, SearchStatistics};
pub use termination_condition::{SearchBound, TerminationCondition};
