//! Search configuration, loadable from TOML:
//!
//! ```toml
//! engine = "parallel-bfs"
//! workers = 4
//!
//! [bound]
//! max-expansions = 100000
//! time-limit = "30s"
//! ```

use crate::error::PlanningError;
use crate::search::search_engines::{SearchBound, SearchEngine, SearchEngineName};
use serde::Deserialize;
use std::path::Path;
use std::thread;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default)]
    pub engine: SearchEngineName,
    /// Worker threads for the parallel engine, defaults to the available
    /// parallelism.
    #[serde(default)]
    pub workers: Option<usize>,
    #[serde(default)]
    pub bound: SearchBound,
}

impl SearchConfig {
    pub fn from_path(path: &Path) -> Result<Self, PlanningError> {
        let text = std::fs::read_to_string(path).map_err(|source| PlanningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, PlanningError> {
        toml::from_str(text).map_err(|e| PlanningError::Config(e.to_string()))
    }

    pub fn with_engine(self, engine: SearchEngineName) -> Self {
        Self { engine, ..self }
    }

    pub fn with_bound(self, bound: SearchBound) -> Self {
        Self { bound, ..self }
    }

    pub fn with_workers(self, workers: usize) -> Self {
        Self {
            workers: Some(workers),
            ..self
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
            .unwrap_or_else(|| thread::available_parallelism().map_or(1, |n| n.get()))
    }

    pub fn create_engine(&self) -> Box<dyn SearchEngine> {
        self.engine.create(self.bound, self.workers())
    }
}
