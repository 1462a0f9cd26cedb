use std::fs;

use badcat_test_runner::{run_badcat, run_badcat_in};
use tempfile::TempDir;

const BADCAT: &str = env!("CARGO_BIN_EXE_badcat");

#[test]
fn no_arguments_is_a_usage_error() {
    let run = run_badcat(BADCAT, std::iter::empty::<&str>()).unwrap();
    run.assert_exit_code(2);
    run.assert_stdout(b"");
    run.assert_stderr_contains("Usage");
}

#[test]
fn flag_like_names_are_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("-q"), "Q").unwrap();
    fs::write(dir.path().join("a"), "A").unwrap();
    fs::write(dir.path().join("--help"), "H").unwrap();

    let run = run_badcat_in(BADCAT, dir.path(), ["-q", "a", "--help"]).unwrap();
    run.assert_exit_code(0);
    run.assert_stdout(b"QAH");
    assert_eq!(run.error_lines(), 0);
}

#[test]
fn leading_help_prints_the_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("--help"), "H").unwrap();

    let run = run_badcat_in(BADCAT, dir.path(), ["--help"]).unwrap();
    run.assert_exit_code(0);
    run.assert_stdout(b"H");
}

#[test]
fn relative_paths_resolve_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/inner.txt"), "inner\n").unwrap();

    let run = run_badcat_in(BADCAT, dir.path(), ["sub/inner.txt"]).unwrap();
    run.assert_exit_code(0);
    run.assert_stdout(b"inner\n");
}

#[test]
fn skipped_files_log_nothing_beyond_the_error_line() {
    let run = run_badcat(BADCAT, ["/nonexistent/only"]).unwrap();
    run.assert_exit_code(0);
    assert_eq!(run.error_lines(), 1);
    assert_eq!(run.stderr_str().lines().count(), 1, "stderr:\n{}", run.stderr_str());
}
