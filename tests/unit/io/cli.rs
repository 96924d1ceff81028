//! Tests for command-line parsing, puzzle evaluation and file processing

#[cfg(test)]
mod tests {
    use brickwork::BrickworkError;
    use brickwork::io::cli::{
        Cli, FileProcessor, Outcome, SolverKind, evaluate, evaluate_parsed, is_puzzle_file,
        parse_dimensions, verdict,
    };
    use brickwork::io::configuration::{
        DEFAULT_SEED, INVALID_INPUT_MESSAGE, MAX_COLS, MAX_ROWS, NOT_A_NUMBER_MESSAGE,
        UNVERIFIED_MESSAGE,
    };
    use brickwork::io::input::{parse_layer, read_layer};
    use brickwork::layer::{Grid, LayerDefect, Limits};
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn grid(rows: &[Vec<i32>]) -> Grid {
        Grid::from_rows(rows).unwrap_or_else(|_| Grid::empty(0, 0))
    }

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["brickwork"]);

        assert_eq!(cli.target, None);
        assert_eq!(cli.solver, SolverKind::Backtracking);
        assert_eq!(cli.max_rows, MAX_ROWS);
        assert_eq!(cli.max_cols, MAX_COLS);
        assert_eq!(cli.generate, None);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(!cli.png);
        assert!(cli.reads_stdin());
    }

    // Tests CLI parsing with all available arguments
    // Verified by modifying custom parsers to ensure they're invoked
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "brickwork",
            "puzzles",
            "--solver",
            "snapshot",
            "--max-rows",
            "10",
            "--max-cols",
            "20",
            "--generate",
            "4x6",
            "--seed",
            "7",
            "--png",
            "--quiet",
            "--no-skip",
        ]);

        assert_eq!(cli.target, Some(PathBuf::from("puzzles")));
        assert_eq!(cli.solver, SolverKind::Snapshot);
        assert_eq!(cli.generate, Some((4, 6)));
        assert_eq!(cli.seed, 7);
        assert!(cli.png);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
        assert!(!cli.reads_stdin());
        assert_eq!(
            cli.limits(),
            Limits {
                max_rows: 10,
                max_cols: 20,
                ..Limits::default()
            }
        );
    }

    // Tests a dash target reads standard input
    // Verified by treating every target as a path
    #[test]
    fn test_dash_reads_stdin() {
        assert!(Cli::parse_from(["brickwork", "-"]).reads_stdin());
        assert!(!Cli::parse_from(["brickwork", "a.txt"]).reads_stdin());
    }

    // Tests file skip behavior based on --no-skip flag
    // Verified by inverting boolean logic in skip_existing method
    #[test]
    fn test_skip_existing_logic() {
        assert!(Cli::parse_from(["brickwork", "a.txt"]).skip_existing());
        assert!(!Cli::parse_from(["brickwork", "a.txt", "--no-skip"]).skip_existing());
    }

    // Tests size parsing accepts ROWSxCOLS only
    // Verified by accepting zero sizes
    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("4x6"), Ok((4, 6)));
        assert_eq!(parse_dimensions("10X2"), Ok((10, 2)));
        assert!(parse_dimensions("4").is_err());
        assert!(parse_dimensions("0x4").is_err());
        assert!(parse_dimensions("ax4").is_err());
        assert!(parse_dimensions("4x-2").is_err());
    }

    // Tests puzzle files are recognised by extension and suffix
    // Verified by accepting result files as puzzles
    #[test]
    fn test_is_puzzle_file() {
        assert!(is_puzzle_file(Path::new("dir/wall.txt")));
        assert!(!is_puzzle_file(Path::new("dir/wall_result.txt")));
        assert!(!is_puzzle_file(Path::new("dir/wall.png")));
        assert!(!is_puzzle_file(Path::new("dir/wall")));
    }

    // Tests output paths sit next to the puzzle with the result suffix
    // Verified by dropping the parent directory
    #[test]
    fn test_output_paths() {
        let input = Path::new("puzzles/wall.txt");
        assert_eq!(
            FileProcessor::get_output_path(input),
            PathBuf::from("puzzles/wall_result.txt")
        );
        assert_eq!(
            FileProcessor::get_image_path(input),
            PathBuf::from("puzzles/wall_result.png")
        );
    }

    // Tests a valid reference layer is solved and reported
    // Verified by skipping the final solution check
    #[test]
    fn test_evaluate_solves() {
        let reference = grid(&[vec![1, 1], vec![2, 2]]);
        for solver in [SolverKind::Backtracking, SolverKind::Snapshot] {
            let outcome = evaluate(&reference, &Limits::default(), solver, |_| {});
            assert_eq!(outcome, Outcome::Solved(grid(&[vec![1, 2], vec![1, 2]])));
        }
    }

    // Tests rejected layers never reach the search
    // Verified by searching before validating
    #[test]
    fn test_evaluate_rejects() {
        let odd = grid(&[vec![1, 1], vec![2, 2], vec![3, 3]]);
        let outcome = evaluate(&odd, &Limits::default(), SolverKind::Backtracking, |_| {});
        assert_eq!(
            outcome,
            Outcome::Invalid(LayerDefect::OddDimensions { rows: 3, cols: 2 })
        );

        let narrow = Limits {
            max_cols: 2,
            ..Limits::default()
        };
        let wide = grid(&[vec![1, 1, 2, 2], vec![3, 3, 4, 4]]);
        let outcome = evaluate(&wide, &narrow, SolverKind::Backtracking, |_| {});
        assert!(matches!(
            outcome,
            Outcome::Invalid(LayerDefect::DimensionsOutOfRange { rows: 2, cols: 4 })
        ));
    }

    // Tests report and summary text for each outcome
    // Verified by omitting the blank line after the header
    #[test]
    fn test_outcome_text() {
        let solved = Outcome::Solved(grid(&[vec![1, 2], vec![1, 2]]));
        assert_eq!(
            solved.report(),
            "The result is:\n\n*******\n*01*02*\n*--*--*\n*01*02*\n*******"
        );
        assert_eq!(solved.summary(), "solved with 2 bricks");

        assert_eq!(Outcome::NoSolution.report(), "There is no solution!");
        assert_eq!(Outcome::NoSolution.summary(), "no solution");

        let invalid = Outcome::Invalid(LayerDefect::Overused { value: 4 });
        assert_eq!(invalid.report(), "Invalid input!");
        assert!(invalid.summary().starts_with("invalid: "));
    }

    // Tests a directory of puzzles produces one result file per puzzle
    // Verified by writing results only for solved puzzles
    #[test]
    fn test_process_directory() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory must be available");
        };
        let solvable = dir.path().join("a.txt");
        let odd = dir.path().join("b.txt");
        assert!(fs::write(&solvable, "2 2\n1 1\n2 2\n").is_ok());
        assert!(fs::write(&odd, "3 2\n1 1\n2 2\n3 3\n").is_ok());
        assert!(fs::write(dir.path().join("notes.md"), "ignored").is_ok());

        let target = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["brickwork", target.as_str(), "--quiet", "--png"]);
        assert!(FileProcessor::new(cli).process().is_ok());

        let solved = fs::read_to_string(dir.path().join("a_result.txt")).unwrap_or_default();
        assert_eq!(
            solved,
            "The result is:\n\n*******\n*01*02*\n*--*--*\n*01*02*\n*******\n"
        );
        assert!(dir.path().join("a_result.png").exists());

        let rejected = fs::read_to_string(dir.path().join("b_result.txt")).unwrap_or_default();
        assert_eq!(rejected, "Invalid input!\n");
        assert!(!dir.path().join("b_result.png").exists());
    }

    // Tests existing results are kept unless --no-skip is given
    // Verified by ignoring the skip flag
    #[test]
    fn test_process_skips_existing() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory must be available");
        };
        let puzzle = dir.path().join("wall.txt");
        let result = dir.path().join("wall_result.txt");
        assert!(fs::write(&puzzle, "2 2\n1 2\n1 2\n").is_ok());
        assert!(fs::write(&result, "stale").is_ok());

        let target = puzzle.to_string_lossy().to_string();
        let skipping = Cli::parse_from(["brickwork", target.as_str(), "--quiet"]);
        assert!(FileProcessor::new(skipping).process().is_ok());
        assert_eq!(fs::read_to_string(&result).unwrap_or_default(), "stale");

        let forced = Cli::parse_from(["brickwork", target.as_str(), "--quiet", "--no-skip"]);
        assert!(FileProcessor::new(forced).process().is_ok());
        assert!(
            fs::read_to_string(&result)
                .unwrap_or_default()
                .starts_with("The result is:")
        );
    }

    // Tests unreadable targets are reported as errors
    // Verified by silently ignoring unknown targets
    #[test]
    fn test_process_rejects_bad_targets() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory must be available");
        };
        let image = dir.path().join("wall.png");
        assert!(fs::write(&image, "not a puzzle").is_ok());

        for path in [image, dir.path().join("missing")] {
            let target = path.to_string_lossy().to_string();
            let cli = Cli::parse_from(["brickwork", target.as_str(), "--quiet"]);
            assert!(FileProcessor::new(cli).process().is_err());
        }
    }

    // Tests malformed puzzle files get a result file instead of an error
    // Verified by propagating parse errors from process_file
    #[test]
    fn test_process_reports_malformed_files() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory must be available");
        };
        assert!(fs::write(dir.path().join("letters.txt"), "2 2\n1 a\n2 2\n").is_ok());
        assert!(fs::write(dir.path().join("short.txt"), "2 2\n1 1\n").is_ok());

        let target = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["brickwork", target.as_str(), "--quiet"]);
        assert!(FileProcessor::new(cli).process().is_ok());

        let letters = fs::read_to_string(dir.path().join("letters_result.txt")).unwrap_or_default();
        assert_eq!(letters, format!("{NOT_A_NUMBER_MESSAGE}\n"));
        let short = fs::read_to_string(dir.path().join("short_result.txt")).unwrap_or_default();
        assert_eq!(short, format!("{INVALID_INPUT_MESSAGE}\n"));
    }

    // Tests non-integer tokens and wrong row lengths map to their messages
    // Verified by returning the parse error instead of an outcome
    #[test]
    fn test_evaluate_parsed_text() {
        let evaluate_text = |text: &str| {
            evaluate_parsed(
                parse_layer(text),
                &Limits::default(),
                SolverKind::Backtracking,
                |_| {},
            )
        };

        let Ok(letters) = evaluate_text("2 2\n1 a\n2 2\n") else {
            unreachable!("parse failures must become outcomes");
        };
        assert_eq!(
            letters,
            Outcome::NotANumber {
                line: 2,
                token: "a".to_string()
            }
        );
        assert_eq!(letters.report(), NOT_A_NUMBER_MESSAGE);

        let Ok(long_row) = evaluate_text("2 2\n1 1 1\n2 2\n") else {
            unreachable!("parse failures must become outcomes");
        };
        assert!(matches!(long_row, Outcome::Malformed { .. }));
        assert_eq!(long_row.report(), INVALID_INPUT_MESSAGE);

        let Ok(solved) = evaluate_text("2 2\n1 1\n2 2\n") else {
            unreachable!("well-formed input must evaluate");
        };
        assert_eq!(solved, Outcome::Solved(grid(&[vec![1, 2], vec![1, 2]])));
    }

    // Tests operational errors still propagate
    // Verified by mapping every error to an outcome
    #[test]
    fn test_evaluate_parsed_keeps_file_errors() {
        let missing = read_layer(Path::new("does/not/exist.txt"));
        let result = evaluate_parsed(missing, &Limits::default(), SolverKind::Backtracking, |_| {});
        assert!(matches!(result, Err(BrickworkError::FileSystem { .. })));
    }

    // Tests a returned layer that fails verification is not reported as unsolvable
    // Verified by mapping every failed check to NoSolution
    #[test]
    fn test_verdict_distinguishes_unverified_layers() {
        let reference = grid(&[vec![1, 1], vec![2, 2]]);
        let same = reference.clone();

        assert_eq!(verdict(&reference, None), Outcome::NoSolution);
        assert_eq!(
            verdict(&reference, Some(same.clone())),
            Outcome::Unverified(same)
        );
        assert_eq!(
            verdict(&reference, Some(grid(&[vec![1, 2], vec![1, 2]]))),
            Outcome::Solved(grid(&[vec![1, 2], vec![1, 2]]))
        );

        let unverified = Outcome::Unverified(reference);
        assert_eq!(unverified.report(), UNVERIFIED_MESSAGE);
        assert_ne!(unverified.report(), Outcome::NoSolution.report());
    }

    // Tests the snapshot solver refuses limits above the default size
    // Verified by removing the solver limit check
    #[test]
    fn test_snapshot_refuses_large_limits() {
        let large = Cli::parse_from(["brickwork", "--solver", "snapshot", "--max-rows", "200"]);
        assert!(matches!(
            large.check_solver_limits(),
            Err(BrickworkError::InvalidParameter {
                parameter: "solver",
                ..
            })
        ));
        let Err(error) = FileProcessor::new(large).process() else {
            unreachable!("oversized snapshot limits must be refused");
        };
        assert!(error.to_string().contains("snapshot"));

        let default = Cli::parse_from(["brickwork", "--solver", "snapshot"]);
        assert!(default.check_solver_limits().is_ok());
        let wide = Cli::parse_from(["brickwork", "--max-cols", "400"]);
        assert!(wide.check_solver_limits().is_ok());
    }
}
