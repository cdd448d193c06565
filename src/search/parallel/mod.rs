//! Parallel execution of the first-rank partitions.
//!
//! Fixing the file-0 queen's rank splits the search space into N disjoint
//! sub-searches that share no mutable state, so they parallelize without
//! synchronization.
//!
//! # Architecture
//!
//! - A **coordinator** validates the configuration, dispatches one solver
//!   task per first rank, and merges the per-partition summaries
//! - A bounded pool of **worker threads** pulls rank tasks from a shared
//!   channel and runs each solver to completion
//! - A **result channel** streams summaries back; the coordinator collects
//!   until every worker's sender is dropped
//!
//! First-solution mode bypasses the pool entirely and tries the partitions
//! sequentially in ascending rank order, so "first" is reproducible rather
//! than scheduler-dependent.

pub mod coordinator;

pub use coordinator::solve;
