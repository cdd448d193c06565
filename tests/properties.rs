//! Property-based checks over board sizes and worker counts.

use nqueens::search::{solve, SolveConfig};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// The solution multiset never depends on how many workers ran.
    #[test]
    fn worker_count_never_changes_results(size in 1usize..=7, workers in 1usize..=16) {
        let baseline = solve(
            &SolveConfig::default().with_board_size(size).with_workers(1),
        )
        .unwrap();
        let parallel = solve(
            &SolveConfig::default().with_board_size(size).with_workers(workers),
        )
        .unwrap();

        prop_assert_eq!(parallel.solution_count, baseline.solution_count);

        let mut expected = baseline.solutions;
        let mut actual = parallel.solutions;
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    /// First-solution mode always returns exactly one valid placement on
    /// solvable boards.
    #[test]
    fn first_solution_is_single_and_valid(size in 4usize..=9) {
        let summary = solve(
            &SolveConfig::default().with_board_size(size).with_first_only(true),
        )
        .unwrap();

        prop_assert_eq!(summary.solution_count, 1);
        prop_assert_eq!(summary.solutions.len(), 1);
        prop_assert!(summary.solutions[0].is_non_attacking());
    }

    /// Counting with collection off reports the same totals as with it on.
    #[test]
    fn collection_does_not_affect_the_count(size in 1usize..=7) {
        let counted = solve(
            &SolveConfig::default()
                .with_board_size(size)
                .with_collect_solutions(false),
        )
        .unwrap();
        let collected = solve(
            &SolveConfig::default().with_board_size(size),
        )
        .unwrap();

        prop_assert_eq!(counted.solution_count, collected.solution_count);
        prop_assert!(counted.solutions.is_empty());
        prop_assert_eq!(collected.solutions.len() as u64, collected.solution_count);
    }
}
