//! Command-line interface for solving one puzzle, a batch of puzzle files,
//! or a generated puzzle

use crate::io::configuration::{
    DEFAULT_SEED, INPUT_EXTENSION, INVALID_INPUT_MESSAGE, MAX_COLS, MAX_ROWS,
    NOT_A_NUMBER_MESSAGE, NO_SOLUTION_MESSAGE, OUTPUT_SUFFIX, RESULT_HEADER, UNVERIFIED_MESSAGE,
};
use crate::io::error::{BrickworkError, Result, WithPath, invalid_parameter, io_error};
use crate::io::image::export_layer_as_png;
use crate::io::input::{parse_layer, read_layer, to_input_text};
use crate::io::progress::ProgressManager;
use crate::io::render::render;
use crate::layer::generate::random_layer;
use crate::layer::{Grid, LayerDefect, Limits, check, is_solution};
use crate::search::{BacktrackingSolver, SearchStats, SnapshotSolver, Solver};
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Search implementation selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SolverKind {
    /// Explicit stack with undo on backtrack
    Backtracking,
    /// Recursive search copying the layer per branch; the current path holds
    /// one layer copy per cell, so layers above the default limits are refused
    Snapshot,
}

#[derive(Parser)]
#[command(name = "brickwork")]
#[command(
    author,
    version,
    about = "Find a second brick layer whose bricks all cross the bricks of the first"
)]
/// Command-line arguments for the brickwork solver
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Puzzle file or directory of puzzle files; reads stdin when omitted or `-`
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Search implementation; `snapshot` is limited to the default layer size
    #[arg(long, value_enum, default_value_t = SolverKind::Backtracking)]
    pub solver: SolverKind,

    /// Largest accepted row count
    #[arg(long, default_value_t = MAX_ROWS)]
    pub max_rows: usize,

    /// Largest accepted column count
    #[arg(long, default_value_t = MAX_COLS)]
    pub max_cols: usize,

    /// Solve a random layer of the given size instead of reading input
    #[arg(short, long, value_name = "ROWSxCOLS", value_parser = parse_dimensions)]
    pub generate: Option<(usize, usize)>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Also write <stem>_result.png next to each solved puzzle file
    #[arg(short, long)]
    pub png: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Dimension limits after command-line overrides
    pub fn limits(&self) -> Limits {
        Limits {
            max_rows: self.max_rows,
            max_cols: self.max_cols,
            ..Limits::default()
        }
    }

    /// Reject option combinations the selected solver cannot handle
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot solver is combined with limits above
    /// the default maximum size
    pub fn check_solver_limits(&self) -> Result<()> {
        let above_defaults = self.max_rows > MAX_ROWS || self.max_cols > MAX_COLS;
        if self.solver == SolverKind::Snapshot && above_defaults {
            return Err(invalid_parameter(
                "solver",
                &"snapshot",
                &format!("only supports layers up to {MAX_ROWS}x{MAX_COLS}"),
            ));
        }
        Ok(())
    }

    /// True when the puzzle comes from standard input
    pub fn reads_stdin(&self) -> bool {
        self.target
            .as_deref()
            .is_none_or(|target| target == Path::new("-"))
    }
}

/// Parse a `ROWSxCOLS` size such as `4x6`
///
/// # Errors
///
/// Returns a message if the text is not two positive integers joined by `x`
pub fn parse_dimensions(text: &str) -> std::result::Result<(usize, usize), String> {
    let (rows, cols) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, found '{text}'"))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .ok()
            .filter(|&value| value > 0)
            .ok_or_else(|| format!("'{part}' is not a positive integer"))
    };

    Ok((parse(rows)?, parse(cols)?))
}

/// Result of running one puzzle through validation and search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Puzzle text held a token that is not an integer
    NotANumber {
        /// 1-based input line
        line: usize,
        /// Offending token
        token: String,
    },
    /// Puzzle text did not have the announced shape
    Malformed {
        /// Reason reported by the parser
        reason: String,
    },
    /// Reference layer was rejected before searching
    Invalid(LayerDefect),
    /// Search exhausted every branch
    NoSolution,
    /// Completed second layer
    Solved(Grid),
    /// Solver returned a layer that fails verification against the reference
    Unverified(Grid),
}

impl Outcome {
    /// Full user-facing report, including the rendered layer when solved
    pub fn report(&self) -> String {
        match self {
            Self::NotANumber { .. } => NOT_A_NUMBER_MESSAGE.to_string(),
            Self::Malformed { .. } | Self::Invalid(_) => INVALID_INPUT_MESSAGE.to_string(),
            Self::NoSolution => NO_SOLUTION_MESSAGE.to_string(),
            Self::Solved(second) => format!("{RESULT_HEADER}\n\n{}", render(second)),
            Self::Unverified(_) => UNVERIFIED_MESSAGE.to_string(),
        }
    }

    /// One-line description for progress display
    pub fn summary(&self) -> String {
        match self {
            Self::NotANumber { line, token } => format!("line {line}: '{token}' is not a number"),
            Self::Malformed { reason } => format!("malformed: {reason}"),
            Self::Invalid(defect) => format!("invalid: {defect}"),
            Self::NoSolution => "no solution".to_string(),
            Self::Solved(second) => format!("solved with {} bricks", second.brick_count()),
            Self::Unverified(_) => "search result failed verification".to_string(),
        }
    }
}

/// Validate a reference layer and, when it passes, search for a second layer
///
/// `observer` receives search counters while the backtracking solver runs.
pub fn evaluate<F>(reference: &Grid, limits: &Limits, solver: SolverKind, observer: F) -> Outcome
where
    F: FnMut(&SearchStats),
{
    if let Err(defect) = check(reference, limits) {
        return Outcome::Invalid(defect);
    }

    let solved = match solver {
        SolverKind::Backtracking => BacktrackingSolver::new().solve_observed(reference, observer).0,
        SolverKind::Snapshot => SnapshotSolver::new().solve(reference),
    };

    verdict(reference, solved)
}

/// Classify a solver result, checking any returned layer against the reference
pub fn verdict(reference: &Grid, solved: Option<Grid>) -> Outcome {
    match solved {
        None => Outcome::NoSolution,
        Some(second) if is_solution(reference, &second) => Outcome::Solved(second),
        Some(second) => Outcome::Unverified(second),
    }
}

/// Evaluate the result of parsing puzzle text
///
/// Text that is not a grid of integers becomes an [`Outcome`] like a
/// rejected layer does; only operational failures remain errors.
///
/// # Errors
///
/// Returns any error of `parsed` other than a parse failure
pub fn evaluate_parsed<F>(
    parsed: Result<Grid>,
    limits: &Limits,
    solver: SolverKind,
    observer: F,
) -> Result<Outcome>
where
    F: FnMut(&SearchStats),
{
    match parsed {
        Ok(reference) => Ok(evaluate(&reference, limits, solver, observer)),
        Err(BrickworkError::NotANumber { line, token, .. }) => {
            Ok(Outcome::NotANumber { line, token })
        }
        Err(error @ BrickworkError::Parse { .. }) => Ok(Outcome::Malformed {
            reason: error.to_string(),
        }),
        Err(error) => Err(error),
    }
}

/// Orchestrates puzzle processing with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process input according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the solver does not support the limits, input
    /// cannot be read, a target is not a puzzle file or directory, or an
    /// output cannot be written
    pub fn process(&mut self) -> Result<()> {
        self.cli.check_solver_limits()?;

        if let Some((rows, cols)) = self.cli.generate {
            return self.process_generated(rows, cols);
        }
        if self.cli.reads_stdin() {
            return self.process_stdin();
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Run one reference layer with this processor's limits and solver
    pub fn evaluate(&self, reference: &Grid) -> Outcome {
        let progress = self.progress_manager.as_ref();
        evaluate(reference, &self.cli.limits(), self.cli.solver, |stats| {
            if let Some(pm) = progress {
                pm.update_search(stats);
            }
        })
    }

    fn evaluate_parsed(&self, parsed: Result<Grid>) -> Result<Outcome> {
        let progress = self.progress_manager.as_ref();
        evaluate_parsed(parsed, &self.cli.limits(), self.cli.solver, |stats| {
            if let Some(pm) = progress {
                pm.update_search(stats);
            }
        })
    }

    // Allow print for the solver's primary output
    #[allow(clippy::print_stdout)]
    fn process_stdin(&self) -> Result<()> {
        let text = std::io::read_to_string(std::io::stdin())
            .with_path(Path::new("<stdin>"), "read puzzle")?;
        let outcome = self.evaluate_parsed(parse_layer(&text))?;
        println!("{}", outcome.report());
        Ok(())
    }

    // Allow print for the solver's primary output
    #[allow(clippy::print_stdout)]
    fn process_generated(&self, rows: usize, cols: usize) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let reference = random_layer(rows, cols, &mut rng)?;
        println!("{}", to_input_text(&reference));
        println!("{}", self.evaluate(&reference).report());
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let Some(target) = self.cli.target.as_deref() else {
            return Ok(vec![]);
        };

        if target.is_file() {
            if is_puzzle_file(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.to_path_buf()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(io_error(target, "Target file must be a .txt puzzle"))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory")?.path();
                if is_puzzle_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error(target, "Target must be a puzzle file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();
        let parsed = read_layer(input_path);

        if let (Some(pm), Ok(reference)) = (&mut self.progress_manager, &parsed) {
            pm.start_file(input_path, reference.dimensions());
        }

        let outcome = self.evaluate_parsed(parsed)?;

        let output_path = Self::get_output_path(input_path);
        std::fs::write(&output_path, format!("{}\n", outcome.report()))
            .with_path(&output_path, "write result")?;

        if self.cli.png {
            if let Outcome::Solved(ref second) = outcome {
                export_layer_as_png(second, &Self::get_image_path(input_path))?;
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(&outcome.summary(), start_time.elapsed());
        }

        Ok(())
    }

    /// Result text path for a puzzle file: `<stem>_result.txt`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, INPUT_EXTENSION)
    }

    /// Result image path for a puzzle file: `<stem>_result.png`
    pub fn get_image_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, "png")
    }

    fn sibling_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// True for `.txt` files that are not themselves result files
pub fn is_puzzle_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
        && !path
            .file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}
