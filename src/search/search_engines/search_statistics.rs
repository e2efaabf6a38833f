use std::ops::AddAssign;
use std::time::{Duration, Instant};
use tracing::info;

/// Raw search counters. Parallel workers keep their own and the engine adds
/// them up after every layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCounts {
    /// Number of nodes expanded
    pub expanded_nodes: usize,
    /// Number of unique nodes generated
    pub generated_nodes: usize,
    /// Number of applicable actions generated
    pub generated_actions: usize,
    /// Number of successors that were already visited
    pub duplicate_nodes: usize,
}

impl AddAssign for SearchCounts {
    fn add_assign(&mut self, other: Self) {
        self.expanded_nodes += other.expanded_nodes;
        self.generated_nodes += other.generated_nodes;
        self.generated_actions += other.generated_actions;
        self.duplicate_nodes += other.duplicate_nodes;
    }
}

#[derive(Debug)]
pub struct SearchStatistics {
    counts: SearchCounts,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            counts: SearchCounts::default(),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn counts(&self) -> SearchCounts {
        self.counts
    }

    pub fn expanded_nodes(&self) -> usize {
        self.counts.expanded_nodes
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.counts.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.counts.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_generated_actions(&mut self, num_actions: usize) {
        self.counts.generated_actions += num_actions;
        self.log_if_needed();
    }

    pub fn increment_duplicate_nodes(&mut self) {
        self.counts.duplicate_nodes += 1;
    }

    pub fn add_counts(&mut self, counts: SearchCounts) {
        self.counts += counts;
        self.log_if_needed();
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.counts.expanded_nodes,
            generated_nodes = self.counts.generated_nodes,
            generated_actions = self.counts.generated_actions,
            duplicate_nodes = self.counts.duplicate_nodes,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
