use crate::search::search_engines::BoundKind;
use memory_stats::memory_stats;
use serde::{Deserialize, Deserializer};
use std::time::{Duration, Instant};
use tracing::info;

/// Caller-imposed limits on a search. `None` means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchBound {
    /// Maximum number of node expansions, the initial state's being the first.
    #[serde(default)]
    pub max_expansions: Option<usize>,
    /// Maximum number of states waiting to be expanded.
    #[serde(default)]
    pub max_frontier: Option<usize>,
    /// Wall-clock limit, written as a humantime duration such as `"30s"`.
    #[serde(default, deserialize_with = "deserialize_duration")]
    pub time_limit: Option<Duration>,
}

impl SearchBound {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(self, max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..self
        }
    }

    pub fn with_max_frontier(self, max_frontier: usize) -> Self {
        Self {
            max_frontier: Some(max_frontier),
            ..self
        }
    }

    pub fn with_time_limit(self, time_limit: Duration) -> Self {
        Self {
            time_limit: Some(time_limit),
            ..self
        }
    }

    /// Fills every limit not set here from `other`.
    pub fn or(self, other: SearchBound) -> Self {
        Self {
            max_expansions: self.max_expansions.or(other.max_expansions),
            max_frontier: self.max_frontier.or(other.max_frontier),
            time_limit: self.time_limit.or(other.time_limit),
        }
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|text| humantime::parse_duration(&text).map_err(serde::de::Error::custom))
        .transpose()
}

/// Decides when a search has to give up, and keeps an eye on time and memory
/// while it runs. Shared by reference between parallel workers.
#[derive(Debug)]
pub struct TerminationCondition {
    bound: SearchBound,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(bound: SearchBound) -> Self {
        info!(
            max_expansions = bound.max_expansions,
            max_frontier = bound.max_frontier,
            time_limit = bound.time_limit.map(|d| d.as_secs_f64()),
        );
        Self {
            bound,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        self.log();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
        );
    }

    /// Checked before every expansion. `expanded_nodes` counts the
    /// expansions done so far, so a bound of `B` expansions stops the search
    /// when the `B + 1`-th would start.
    pub fn should_terminate(&self, expanded_nodes: usize, frontier_size: usize) -> Option<BoundKind> {
        if let Some(time_limit) = self.bound.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(BoundKind::Time);
            }
        }
        if let Some(max_frontier) = self.bound.max_frontier {
            if frontier_size > max_frontier {
                return Some(BoundKind::Frontier);
            }
        }
        if let Some(max_expansions) = self.bound.max_expansions {
            if expanded_nodes >= max_expansions {
                return Some(BoundKind::Expansions);
            }
        }
        None
    }
}
