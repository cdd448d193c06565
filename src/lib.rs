//! N-queens enumeration with iterative backtracking and first-rank
//! partitioning.
//!
//! The search never recurses: each solver keeps an explicit stack of placed
//! ranks plus a board that tracks attacked ranks, files, and diagonals,
//! giving O(1) safety checks and O(1) undo. The N possible ranks of the
//! file-0 queen split the search space into N disjoint partitions, which
//! the parallel layer fans out across a bounded thread pool and merges.
//!
//! # Example
//!
//! ```
//! use nqueens::search::{solve, SolveConfig};
//!
//! let config = SolveConfig::default().with_board_size(6).with_workers(2);
//! let summary = solve(&config).unwrap();
//! assert_eq!(summary.solution_count, 4);
//! ```

pub mod board;
pub mod display;
pub mod search;

pub use board::{Board, Square};
pub use search::{solve, ConfigError, SearchSummary, SolveConfig, Solution, Solver};
