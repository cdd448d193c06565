//! Coordinator that fans first-rank partitions out across worker threads.

use crate::display::SolutionPrinter;
use crate::search::config::{ConfigError, SolveConfig};
use crate::search::result::SearchSummary;
use crate::search::solver::Solver;
use crossbeam_channel::{bounded, unbounded};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Solve the configured board and return the merged results.
///
/// Validates the configuration first and performs no work on failure. In
/// exhaustive mode the N first-rank partitions run on a pool of
/// `min(N, num_workers)` threads; in first-solution mode they run
/// sequentially in ascending rank order and stop at the first hit.
pub fn solve(config: &SolveConfig) -> Result<SearchSummary, ConfigError> {
    config.validate()?;
    let start_time = Instant::now();

    let printer = if config.emit_solutions {
        Some(Arc::new(SolutionPrinter::new()))
    } else {
        None
    };

    let mut summary = if config.first_only {
        solve_first(config, printer)
    } else {
        solve_exhaustive(config, printer)
    };

    summary.statistics.elapsed_time = start_time.elapsed();
    Ok(summary)
}

/// Try first ranks in ascending order, one bounded solver at a time, and
/// stop at the first partition that yields a solution.
///
/// Sequential on purpose: racing the partitions would tie "first" to pool
/// scheduling, and reproducibility wins over speed in this mode.
fn solve_first(config: &SolveConfig, printer: Option<Arc<SolutionPrinter>>) -> SearchSummary {
    let mut summary = SearchSummary::default();

    for first_rank in 0..config.board_size {
        let mut solver = Solver::new(config.board_size, first_rank)
            .with_first_only(true)
            .with_collect_solutions(config.collect_solutions);
        if let Some(printer) = &printer {
            solver = solver.with_printer(Arc::clone(printer));
        }

        let partial = solver.run();
        let found = partial.solution_count > 0;
        summary.merge(partial);
        if found {
            break;
        }
    }

    summary
}

/// Run every partition to completion on a bounded worker pool and merge
/// the per-partition summaries.
///
/// Workers pull rank tasks from a shared channel as they free up and stream
/// results back; the coordinator merges after the result channel drains, so
/// merge order reflects scheduling, not rank order.
fn solve_exhaustive(config: &SolveConfig, printer: Option<Arc<SolutionPrinter>>) -> SearchSummary {
    let board_size = config.board_size;
    let collect_solutions = config.collect_solutions;
    let pool_size = config.pool_size();

    // One task per first rank; the channel doubles as the work queue.
    let (task_tx, task_rx) = bounded::<usize>(board_size);
    for first_rank in 0..board_size {
        let _ = task_tx.send(first_rank);
    }
    drop(task_tx);

    let (result_tx, result_rx) = unbounded::<SearchSummary>();

    let mut worker_handles = Vec::with_capacity(pool_size);
    for _ in 0..pool_size {
        let task_rx = task_rx.clone();
        let result_tx = result_tx.clone();
        let printer = printer.clone();

        worker_handles.push(thread::spawn(move || {
            while let Ok(first_rank) = task_rx.recv() {
                let mut solver = Solver::new(board_size, first_rank)
                    .with_collect_solutions(collect_solutions);
                if let Some(printer) = &printer {
                    solver = solver.with_printer(Arc::clone(printer));
                }
                let _ = result_tx.send(solver.run());
            }
        }));
    }
    // Workers hold the remaining senders; the iterator below ends once they
    // all finish.
    drop(result_tx);

    let mut summary = SearchSummary::default();
    for partial in result_rx.iter() {
        summary.merge(partial);
    }

    for handle in worker_handles {
        let _ = handle.join();
    }

    summary
}
