use clap::{Parser, Subcommand};

use nqueens::display::render_board;
use nqueens::search::{solve, SearchSummary, SolveConfig};

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "nqueens")]
#[command(about = "nqueens - N-queens enumerator with parallel first-rank partitioning")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count all solutions without collecting them
    Count {
        /// Board size N (N queens on an N x N board)
        size: usize,
        /// Number of worker threads (defaults to available cores)
        #[arg(long, short = 'j')]
        workers: Option<usize>,
    },
    /// Enumerate solutions and print them
    Solve {
        /// Board size N (N queens on an N x N board)
        size: usize,
        /// Number of worker threads (defaults to available cores)
        #[arg(long, short = 'j')]
        workers: Option<usize>,
        /// Stop at the first solution (deterministic sequential scan)
        #[arg(long)]
        first: bool,
        /// Render each solution as an ASCII board
        #[arg(long)]
        boards: bool,
        /// Print solutions as they are discovered instead of at the end
        #[arg(long)]
        immediate: bool,
    },
}

fn main() {
    let args = Args::parse();

    match args.command {
        Commands::Count { size, workers } => {
            let config = apply_workers(
                SolveConfig::default()
                    .with_board_size(size)
                    .with_collect_solutions(false),
                workers,
            );
            let summary = run_solve(&config);
            report(&summary, size);
        }
        Commands::Solve {
            size,
            workers,
            first,
            boards,
            immediate,
        } => {
            // Immediate emission streams through the shared printer, so
            // there is nothing left to list at the end.
            let config = apply_workers(
                SolveConfig::default()
                    .with_board_size(size)
                    .with_first_only(first)
                    .with_collect_solutions(!immediate)
                    .with_emit_solutions(immediate),
                workers,
            );
            let summary = run_solve(&config);

            for (i, solution) in summary.solutions.iter().enumerate() {
                println!("Solution #{}: {}", i + 1, solution);
                if boards {
                    println!("{}", render_board(solution));
                }
            }
            report(&summary, size);
        }
    }
}

fn apply_workers(config: SolveConfig, workers: Option<usize>) -> SolveConfig {
    match workers {
        Some(workers) => config.with_workers(workers),
        None => config,
    }
}

fn run_solve(config: &SolveConfig) -> SearchSummary {
    match solve(config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn report(summary: &SearchSummary, size: usize) {
    if summary.solution_count == 1 {
        println!("1 solution for {} queens", size);
    } else {
        println!("{} solutions for {} queens", summary.solution_count, size);
    }
    println!(
        "Placed {} queens, backtracked {} times",
        summary.statistics.placements, summary.statistics.backtracks
    );
    println!("Elapsed: {:.2?}", summary.statistics.elapsed_time);
}
