//! Solve configuration and fail-fast validation.

use thiserror::Error;

/// Invalid configuration, reported before any search work starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 1 (got {0})")]
    BoardSize(usize),
    #[error("worker count must be at least 1 (got {0})")]
    WorkerCount(usize),
}

/// Configuration for one solve call.
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Board size N; the search places N queens on an N x N board.
    pub board_size: usize,
    /// Requested worker threads; the pool is capped at `board_size`.
    pub num_workers: usize,
    /// Stop at the first solution instead of enumerating all of them.
    pub first_only: bool,
    /// Keep found solutions in the summary (counting works without).
    pub collect_solutions: bool,
    /// Print each solution through the shared printer as it is discovered.
    pub emit_solutions: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            num_workers: num_cpus::get(),
            first_only: false,
            collect_solutions: true,
            emit_solutions: false,
        }
    }
}

impl SolveConfig {
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Set the requested worker count.
    ///
    /// Stored verbatim: a zero count is a configuration error surfaced by
    /// [`SolveConfig::validate`], not silently clamped.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    pub fn with_first_only(mut self, first_only: bool) -> Self {
        self.first_only = first_only;
        self
    }

    pub fn with_collect_solutions(mut self, collect_solutions: bool) -> Self {
        self.collect_solutions = collect_solutions;
        self
    }

    pub fn with_emit_solutions(mut self, emit_solutions: bool) -> Self {
        self.emit_solutions = emit_solutions;
        self
    }

    /// Number of worker threads the pool will actually use.
    ///
    /// There are exactly `board_size` partitions, so more workers than that
    /// would idle.
    pub fn pool_size(&self) -> usize {
        self.num_workers.min(self.board_size)
    }

    /// Check the fail-fast constraints: board size and worker count must
    /// both be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 1 {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.num_workers < 1 {
            return Err(ConfigError::WorkerCount(self.num_workers));
        }
        Ok(())
    }
}
