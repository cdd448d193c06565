//! Solve outcomes: solutions, statistics, and the mergeable summary.

use crate::board::Square;
use std::fmt;
use std::time::Duration;

/// One complete non-attacking placement: the queen's rank for each file.
///
/// Immutable once produced; a copy of the placement stack taken at the
/// moment every file held a queen.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution {
    ranks: Vec<usize>,
}

impl Solution {
    pub fn new(ranks: Vec<usize>) -> Solution {
        Solution { ranks }
    }

    /// Queen rank per file, index = file.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Board size this solution was found on.
    pub fn size(&self) -> usize {
        self.ranks.len()
    }

    /// The placement as squares in file order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.ranks
            .iter()
            .enumerate()
            .map(|(file, &rank)| Square::new(file, rank))
    }

    /// Whether no two queens share a rank or a diagonal.
    ///
    /// Files are distinct by construction (one rank per file), so only rank
    /// and diagonal collisions need checking.
    pub fn is_non_attacking(&self) -> bool {
        for (file, &rank) in self.ranks.iter().enumerate() {
            for (other_file, &other_rank) in self.ranks.iter().enumerate().skip(file + 1) {
                if rank == other_rank {
                    return false;
                }
                if other_file - file == rank.abs_diff(other_rank) {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Solution {
    /// Comma-separated algebraic squares in file order, e.g. "a2, b4, c1, d3".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, square) in self.squares().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", square)?;
        }
        Ok(())
    }
}

/// Counters accumulated while searching.
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Queens placed (forward steps, including re-placements after a pop).
    pub placements: u64,
    /// Queens removed while backtracking.
    pub backtracks: u64,
    /// Wall time of the whole solve call; stamped by the coordinator.
    pub elapsed_time: Duration,
}

impl SearchStatistics {
    /// Fold another partition's counters into this one.
    ///
    /// Elapsed time is left alone: it belongs to the coordinator's clock,
    /// not to any single partition.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.placements += other.placements;
        self.backtracks += other.backtracks;
    }
}

/// Combined outcome of one or more partition searches.
#[derive(Debug, Clone, Default)]
pub struct SearchSummary {
    /// Number of solutions found.
    pub solution_count: u64,
    /// Collected solutions in discovery order (empty unless collection is
    /// enabled).
    pub solutions: Vec<Solution>,
    /// Aggregated search counters.
    pub statistics: SearchStatistics,
}

impl SearchSummary {
    /// Merge another partition's results into this one: counts add and
    /// solution lists concatenate. Order across merged partitions follows
    /// pool scheduling and is not canonical; callers needing an order must
    /// sort the list themselves.
    pub fn merge(&mut self, other: SearchSummary) {
        self.solution_count += other.solution_count;
        self.solutions.extend(other.solutions);
        self.statistics.merge(&other.statistics);
    }
}
