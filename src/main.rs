//! N-Queens experiment CLI.
//!
//! Runs a batch of random boards through hill climbing or the genetic solver,
//! prints one line (or one path) per run followed by a summary, and writes a
//! tab-separated results log.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use queensearch::board::BoardGeneration;
use queensearch::error::{Result, ResultExt};
use queensearch::harness::{run_batch, Algorithm, BatchReport, LogFormat, ResultsLog, RunConfig};
use queensearch::local_search::Neighborhood;
use queensearch::successor::GoalBoundary;

#[derive(Parser)]
#[command(name = "queensearch")]
#[command(version)]
#[command(about = "Solve random N-Queens boards with hill climbing or a genetic algorithm")]
struct Cli {
    /// Board size (number of queens)
    #[arg(short = 'n', long, default_value = "8")]
    size: usize,

    /// Number of random problems to generate
    #[arg(short, long, default_value = "100")]
    iterations: usize,

    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::HillClimbing)]
    algorithm: AlgorithmArg,

    /// Print every board visited (hill climbing) or the final board (genetic)
    #[arg(long)]
    print_paths: bool,

    /// Boards per generation (genetic, even)
    #[arg(long, default_value = "20")]
    generation_size: usize,

    /// Probability that a child is mutated (genetic)
    #[arg(long, default_value = "1.0")]
    mutation_chance: f64,

    /// How random boards are drawn
    #[arg(long, value_enum, default_value_t = BoardGenerationArg::Permutation)]
    board_generation: BoardGenerationArg,

    /// Neighbours examined per hill-climbing step
    #[arg(long, value_enum, default_value_t = NeighborhoodArg::Steepest)]
    neighborhood: NeighborhoodArg,

    /// Random neighbours drawn per step with `--neighborhood sampled`
    #[arg(long, default_value = "10")]
    samples: usize,

    /// Whether the improving bucket may step onto a solution
    #[arg(long, value_enum, default_value_t = GoalBoundaryArg::Inclusive)]
    goal_boundary: GoalBoundaryArg,

    /// Consecutive equal-cost moves allowed in steepest ascent
    #[arg(long, default_value = "0")]
    sideways_limit: usize,

    /// Give up on a run after this many moves or generations
    #[arg(long)]
    max_steps: Option<usize>,

    /// Random seed for a reproducible batch
    #[arg(long)]
    seed: Option<u64>,

    /// Number of parallel workers
    #[arg(long, default_value = "1")]
    workers: usize,

    /// Results log path
    #[arg(short, long, default_value = "output/output.txt")]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    HillClimbing,
    Genetic,
}

#[derive(Clone, Copy, ValueEnum)]
enum BoardGenerationArg {
    Permutation,
    Independent,
}

#[derive(Clone, Copy, ValueEnum)]
enum NeighborhoodArg {
    Steepest,
    Bucket,
    Sampled,
}

#[derive(Clone, Copy, ValueEnum)]
enum GoalBoundaryArg {
    Inclusive,
    Exclusive,
}

impl Cli {
    fn config(&self) -> Result<RunConfig> {
        let algorithm = match self.algorithm {
            AlgorithmArg::HillClimbing => Algorithm::HillClimbing,
            AlgorithmArg::Genetic => Algorithm::Genetic,
        };
        let board_generation = match self.board_generation {
            BoardGenerationArg::Permutation => BoardGeneration::Permutation,
            BoardGenerationArg::Independent => BoardGeneration::Independent,
        };
        let neighborhood = match self.neighborhood {
            NeighborhoodArg::Steepest => Neighborhood::SteepestAscent,
            NeighborhoodArg::Bucket => Neighborhood::ImprovingBucket,
            NeighborhoodArg::Sampled => Neighborhood::Sampled {
                samples: self.samples,
            },
        };
        let goal_boundary = match self.goal_boundary {
            GoalBoundaryArg::Inclusive => GoalBoundary::Inclusive,
            GoalBoundaryArg::Exclusive => GoalBoundary::Exclusive,
        };

        RunConfig::builder()
            .board_size(self.size)
            .iterations(self.iterations)
            .algorithm(algorithm)
            .print_paths(self.print_paths)
            .generation_size(self.generation_size)
            .mutation_chance(self.mutation_chance)
            .board_generation(board_generation)
            .neighborhood(neighborhood)
            .goal_boundary(goal_boundary)
            .sideways_limit(self.sideways_limit)
            .max_steps(self.max_steps)
            .seed(self.seed)
            .workers(self.workers)
            .build()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;
    let report = run_batch(&config)?;

    if config.print_paths() {
        print_paths(&report);
    } else {
        print_table(&config, &report);
    }
    println!();
    println!("{}", report.summary());

    write_log(&cli.output, &config, &report)
}

fn print_table(config: &RunConfig, report: &BatchReport) {
    let steps = match config.algorithm() {
        Algorithm::HillClimbing => "moves",
        Algorithm::Genetic => "gens",
    };
    println!(
        "{:<8} {:<8} {:<8} {:<12} {:<16}",
        "#", "queens", steps, "search", "run time (ns)"
    );
    for record in report.records() {
        let result = &record.result;
        let search = result
            .search_cost()
            .map_or_else(|| "-".to_string(), |cost| cost.to_string());
        println!(
            "{:<8} {:<8} {:<8} {:<12} {:<16}",
            record.run,
            result.cost(),
            result.steps(),
            search,
            result.elapsed_nanos()
        );
    }
}

fn print_paths(report: &BatchReport) {
    for record in report.records() {
        let result = &record.result;
        println!("Iteration {}:", record.run);
        match result.path() {
            Some(path) => {
                for (index, board) in path.iter().enumerate() {
                    println!("Move {}", index);
                    println!("{}", board);
                    println!();
                }
            }
            None => println!("{}", result.terminal_board()),
        }
        println!("Elapsed time: {:?}", result.elapsed());
        println!("Finished in {} steps.", result.steps());
        println!("Number of attacking queens: {}", result.cost());
    }
}

fn write_log(path: &Path, config: &RunConfig, report: &BatchReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context(format!("Failed to create {}", parent.display()))?;
    }
    let file = File::create(path).context(format!("Failed to create {}", path.display()))?;

    let format = match config.algorithm() {
        Algorithm::HillClimbing => LogFormat::WithSearchCost,
        Algorithm::Genetic => LogFormat::WithoutSearchCost,
    };
    let mut log = ResultsLog::new(BufWriter::new(file), format)?;
    log.write_all(report.records())
}
