//! Single-partition backtracking search.
//!
//! One solver owns one board and one placement stack and explores exactly
//! the placements whose file-0 queen sits on its fixed first rank. The loop
//! is iterative: an explicit stack remembers the rank chosen for each file,
//! and getting stuck pops entries instead of unwinding call frames.
//!
//! Ranks within a file are always scanned in ascending order, so discovery
//! order inside a partition is deterministic. The run ends when the stack
//! would drop below depth 1: the first queen is the partition's identity,
//! and moving it would re-explore another partition's space.

use crate::board::Board;
use crate::display::SolutionPrinter;
use crate::search::result::{SearchSummary, Solution};
use crate::search::stack::PlacementStack;
use std::sync::Arc;

/// Iterative backtracking search over one first-rank partition.
pub struct Solver {
    board: Board,
    stack: PlacementStack,
    first_rank: usize,
    first_only: bool,
    collect_solutions: bool,
    printer: Option<Arc<SolutionPrinter>>,
    summary: SearchSummary,
}

impl Solver {
    /// Create a solver for the partition fixing file 0 to `first_rank`.
    ///
    /// # Panics
    ///
    /// Panics if `board_size` is zero or `first_rank` is outside the board.
    pub fn new(board_size: usize, first_rank: usize) -> Solver {
        assert!(
            first_rank < board_size,
            "first rank {} outside board of size {}",
            first_rank,
            board_size
        );
        Solver {
            board: Board::new(board_size),
            stack: PlacementStack::new(board_size),
            first_rank,
            first_only: false,
            collect_solutions: false,
            printer: None,
            summary: SearchSummary::default(),
        }
    }

    /// Stop after the first solution instead of exhausting the partition.
    pub fn with_first_only(mut self, first_only: bool) -> Solver {
        self.first_only = first_only;
        self
    }

    /// Record a copy of every solution in the summary.
    pub fn with_collect_solutions(mut self, collect_solutions: bool) -> Solver {
        self.collect_solutions = collect_solutions;
        self
    }

    /// Emit solutions through a shared printer as they are discovered.
    pub fn with_printer(mut self, printer: Arc<SolutionPrinter>) -> Solver {
        self.printer = Some(printer);
        self
    }

    /// Run the search to exhaustion (or to the first solution when bounded)
    /// and return this partition's results.
    pub fn run(mut self) -> SearchSummary {
        let size = self.board.size();

        // The first queen is always legal on an empty board.
        self.place(0, self.first_rank);

        loop {
            // Forward: fill files left to right until stuck or complete.
            while self.stack.len() < size {
                let file = self.stack.len();
                match self.first_safe_rank(file, 0) {
                    Some(rank) => self.place(file, rank),
                    None => {
                        if !self.backtrack() {
                            return self.summary;
                        }
                    }
                }
            }

            self.record_solution();

            if self.first_only || !self.backtrack() {
                return self.summary;
            }
        }
    }

    /// Lowest safe rank in `file`, scanning upward from `from`.
    fn first_safe_rank(&self, file: usize, from: usize) -> Option<usize> {
        (from..self.board.size()).find(|&rank| !self.board.is_attacked(file, rank))
    }

    fn place(&mut self, file: usize, rank: usize) {
        self.board.add_queen(file, rank);
        self.stack.push(rank);
        self.summary.statistics.placements += 1;
    }

    /// Undo placements until some file can advance to a later rank.
    ///
    /// Returns false when the partition is exhausted. The stack never drops
    /// below depth 1: file 0 holds this partition's fixed queen.
    fn backtrack(&mut self) -> bool {
        while self.stack.len() > 1 {
            let file = self.stack.len() - 1;
            let rank = self.stack.pop();
            self.board.remove_queen(file, rank);
            self.summary.statistics.backtracks += 1;

            if let Some(next) = self.first_safe_rank(file, rank + 1) {
                self.place(file, next);
                return true;
            }
        }
        false
    }

    fn record_solution(&mut self) {
        self.summary.solution_count += 1;
        if self.printer.is_none() && !self.collect_solutions {
            return;
        }

        let solution = Solution::new(self.stack.to_vec());
        if let Some(printer) = &self.printer {
            printer.emit(&solution);
        }
        if self.collect_solutions {
            self.summary.solutions.push(solution);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition_count(board_size: usize, first_rank: usize) -> u64 {
        Solver::new(board_size, first_rank).run().solution_count
    }

    #[test]
    fn test_single_square_board() {
        let summary = Solver::new(1, 0).with_collect_solutions(true).run();
        assert_eq!(summary.solution_count, 1);
        assert_eq!(summary.solutions[0].ranks(), &[0]);
    }

    #[test]
    fn test_no_solutions_on_small_boards() {
        for size in [2, 3] {
            for first_rank in 0..size {
                assert_eq!(partition_count(size, first_rank), 0);
            }
        }
    }

    #[test]
    fn test_four_queens_partition_counts() {
        // Only the two middle first ranks admit solutions on N=4.
        assert_eq!(partition_count(4, 0), 0);
        assert_eq!(partition_count(4, 1), 1);
        assert_eq!(partition_count(4, 2), 1);
        assert_eq!(partition_count(4, 3), 0);
    }

    #[test]
    fn test_partitions_sum_to_exhaustive_count() {
        // A000170: 10 solutions for N=5, 4 for N=6.
        let total5: u64 = (0..5).map(|rank| partition_count(5, rank)).sum();
        assert_eq!(total5, 10);
        let total6: u64 = (0..6).map(|rank| partition_count(6, rank)).sum();
        assert_eq!(total6, 4);
    }

    #[test]
    fn test_collected_solutions_are_valid_and_distinct() {
        let mut all = Vec::new();
        for first_rank in 0..6 {
            let summary = Solver::new(6, first_rank)
                .with_collect_solutions(true)
                .run();
            assert_eq!(summary.solution_count, summary.solutions.len() as u64);
            for solution in &summary.solutions {
                assert!(solution.is_non_attacking());
                assert_eq!(solution.ranks()[0], first_rank);
            }
            all.extend(summary.solutions);
        }
        let distinct: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(distinct.len(), all.len());
    }

    #[test]
    fn test_first_only_stops_at_one_solution() {
        let summary = Solver::new(8, 0)
            .with_first_only(true)
            .with_collect_solutions(true)
            .run();
        assert_eq!(summary.solution_count, 1);
        assert_eq!(summary.solutions.len(), 1);
        assert!(summary.solutions[0].is_non_attacking());
    }

    #[test]
    fn test_first_solution_is_lexicographically_least_in_partition() {
        // With ascending rank scans, the first N=8 solution found from
        // first rank 0 is the classic a1, b5, c8, d6, e3, f7, g2, h4.
        let summary = Solver::new(8, 0)
            .with_first_only(true)
            .with_collect_solutions(true)
            .run();
        assert_eq!(summary.solutions[0].ranks(), &[0, 4, 7, 5, 2, 6, 1, 3]);
    }

    #[test]
    fn test_statistics_count_work() {
        let summary = Solver::new(6, 1).run();
        assert!(summary.statistics.placements > 0);
        assert!(summary.statistics.backtracks > 0);
        // Every backtracked queen was placed first.
        assert!(summary.statistics.placements > summary.statistics.backtracks);
    }

    #[test]
    fn test_count_without_collection_keeps_list_empty() {
        let summary = Solver::new(6, 1).run();
        assert_eq!(summary.solution_count, 1);
        assert!(summary.solutions.is_empty());
    }

    #[test]
    #[should_panic(expected = "outside board")]
    fn test_first_rank_outside_board_panics() {
        let _ = Solver::new(4, 4);
    }
}
