//! End-to-end command-line tests.

#![cfg(feature = "cli")]

use std::fs;
use std::path::{Path, PathBuf};

use fivecard::cli::{self, CliError, ERROR, SUCCESS};
use fivecard::{CardError, InputError};
use tempfile::TempDir;

const HANDS: &str = "\
Ann:2C,2C,2C,2C,2C
Bob:3C,3C,3C,3C,3C
Cid:KS,KH,QD,JC,10S
Dee:4C,4C,4C,4C,4C
Eve:5C,5C,5C,5C,5C
";

struct Run {
    code: i32,
    stdout: String,
    stderr: String,
}

fn setup(input: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("hands.txt");
    let output_path = dir.path().join("winner.txt");
    fs::write(&input_path, input).unwrap();
    (dir, input_path, output_path)
}

fn run(args: &[&str]) -> Run {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["fivecard"];
    argv.extend_from_slice(args);
    let code = cli::run(argv, &mut out, &mut err);
    Run {
        code,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

fn run_paths(input: &Path, output: &Path) -> Run {
    run(&[
        "--in",
        input.to_str().unwrap(),
        "--out",
        output.to_str().unwrap(),
    ])
}

#[test]
fn writes_single_winner_line() {
    let (_dir, input, output) = setup(HANDS);
    let result = run_paths(&input, &output);
    assert_eq!(result.code, SUCCESS, "stderr: {}", result.stderr);
    assert_eq!(fs::read_to_string(&output).unwrap(), "Cid:59\n");
    assert!(result.stderr.is_empty());
}

#[test]
fn writes_tied_winner_line() {
    let (_dir, input, output) = setup(
        "X:2C,3D,5H,10S,10C\nCid:2C,2C,2C,2C,2C\nY:10C,10S,5H,3D,2C\nDee:3C,3C,3C,3C,3C\nEve:4C,4C,4C,4C,4C\n",
    );
    let result = run_paths(&input, &output);
    assert_eq!(result.code, SUCCESS);
    assert_eq!(fs::read_to_string(&output).unwrap(), "X,Y:24\n");
}

#[test]
fn four_cards_halts_without_output() {
    let (_dir, input, output) = setup(
        "Ann:2C,2C,2C,2C,2C\nBob:3C,3C,3C,3C\nCid:4C,4C,4C,4C,4C\nDee:5C,5C,5C,5C,5C\nEve:6C,6C,6C,6C,6C\n",
    );
    let result = run_paths(&input, &output);
    assert_eq!(result.code, ERROR);
    assert!(!output.exists());
    assert!(
        result.stderr.contains("Bob does not have exactly 5 cards"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn invalid_suit_halts_without_output() {
    let (_dir, input, output) = setup(&HANDS.replace("Dee:4C", "Dee:5Z"));
    let result = run_paths(&input, &output);
    assert_eq!(result.code, ERROR);
    assert!(!output.exists());
    assert!(result.stderr.contains("invalid card suit `Z`"));

    match cli::run_files(&input, &output).unwrap_err() {
        CliError::Input(InputError::Card { name, source }) => {
            assert_eq!(name, "Dee");
            assert_eq!(source, CardError::InvalidSuit('Z'));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn wrong_line_count_halts_without_output() {
    let four: String = HANDS.lines().take(4).map(|line| format!("{line}\n")).collect();
    let six = format!("{HANDS}Fay:6C,6C,6C,6C,6C\n");

    for (text, found) in [(four, 4), (six, 6)] {
        let (_dir, input, output) = setup(&text);
        let result = run_paths(&input, &output);
        assert_eq!(result.code, ERROR);
        assert!(!output.exists());
        assert!(result.stderr.contains(&format!("found {found}")));
    }
}

#[test]
fn missing_input_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("winner.txt");
    let result = run_paths(&input, &output);
    assert_eq!(result.code, ERROR);
    assert!(!output.exists());
    assert!(result.stderr.contains("failed to read"));
}

#[test]
fn missing_flags_are_usage_errors() {
    let (_dir, input, output) = setup(HANDS);

    let result = run(&["--in", input.to_str().unwrap()]);
    assert_eq!(result.code, ERROR);
    assert!(result.stderr.contains("--out"), "stderr: {}", result.stderr);
    assert!(!output.exists());

    let result = run(&["--out", output.to_str().unwrap()]);
    assert_eq!(result.code, ERROR);
    assert!(result.stderr.contains("--in"), "stderr: {}", result.stderr);
    assert!(!output.exists());

    let result = run(&[]);
    assert_eq!(result.code, ERROR);
}

#[test]
fn help_goes_to_stdout() {
    let result = run(&["--help"]);
    assert_eq!(result.code, SUCCESS);
    assert!(result.stdout.contains("--in <PATH>"));
    assert!(result.stderr.is_empty());
}

#[test]
fn run_files_returns_outcome() {
    let (_dir, input, output) = setup(HANDS);
    let outcome = cli::run_files(&input, &output).unwrap();
    assert_eq!(outcome.names(), ["Cid"]);
    assert_eq!(outcome.value(), 59);
    assert_eq!(fs::read_to_string(&output).unwrap(), "Cid:59\n");
}

#[test]
fn unknown_argument_is_a_usage_error() {
    let (_dir, input, output) = setup(HANDS);
    let result = run(&[
        "--in",
        input.to_str().unwrap(),
        "--out",
        output.to_str().unwrap(),
        "--extra",
    ]);
    assert_eq!(result.code, ERROR);
    assert!(result.stderr.contains("--extra"), "stderr: {}", result.stderr);
    assert!(!output.exists());
}
