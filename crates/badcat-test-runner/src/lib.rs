//! badcat test runner
//!
//! Spawns a built `badcat` binary from host-side integration tests, captures
//! what it wrote and offers assertions over the captured streams.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};

use anyhow::{Context, Result};

/// Prefix badcat puts on every per-file error line
pub const ERROR_PREFIX: &str = "badcat: ";

/// Result of one badcat invocation
pub struct CatRun {
    pub output: Output,
}

impl CatRun {
    /// Wait for a child started with [`spawn_badcat`] and collect whatever
    /// is left on its piped streams.
    pub fn wait(child: Child) -> Result<Self> {
        let output = child
            .wait_with_output()
            .context("Failed to wait for badcat")?;
        Ok(CatRun { output })
    }

    /// Raw bytes written to stdout
    pub fn stdout(&self) -> &[u8] {
        &self.output.stdout
    }

    /// Get stderr as a string
    pub fn stderr_str(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.output.status.code()
    }

    /// Assert that stdout is exactly `expected`, byte for byte
    pub fn assert_stdout(&self, expected: &[u8]) {
        assert!(
            self.stdout() == expected,
            "stdout mismatch: expected {} bytes, got {} bytes\nstderr:\n{}",
            expected.len(),
            self.stdout().len(),
            self.stderr_str()
        );
    }

    /// Assert that `needle` appears somewhere in stderr
    pub fn assert_stderr_contains(&self, needle: &str) {
        let stderr = self.stderr_str();
        assert!(
            stderr.contains(needle),
            "'{}' not found in stderr:\n{}",
            needle,
            stderr
        );
    }

    /// Number of per-file error lines on stderr
    pub fn error_lines(&self) -> usize {
        self.stderr_str()
            .lines()
            .filter(|line| line.starts_with(ERROR_PREFIX))
            .count()
    }

    pub fn assert_exit_code(&self, expected: i32) {
        assert_eq!(
            self.exit_code(),
            Some(expected),
            "unexpected exit status, stderr:\n{}",
            self.stderr_str()
        );
    }
}

fn badcat_command<I, S>(binary: &Path, args: I) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(binary);
    cmd.args(args);
    cmd
}

fn capture(mut cmd: Command, binary: &Path) -> Result<CatRun> {
    let output = cmd
        .output()
        .with_context(|| format!("Failed to spawn {}", binary.display()))?;
    Ok(CatRun { output })
}

/// Run `binary` with `args` and capture its output.
///
/// A non-zero exit is not an error here; callers check the status
/// themselves since some tests expect one.
pub fn run_badcat<I, S>(binary: impl AsRef<Path>, args: I) -> Result<CatRun>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let binary = binary.as_ref();
    capture(badcat_command(binary, args), binary)
}

/// Like [`run_badcat`], with `dir` as the working directory so relative
/// paths resolve inside it.
pub fn run_badcat_in<I, S>(binary: impl AsRef<Path>, dir: &Path, args: I) -> Result<CatRun>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let binary = binary.as_ref();
    let mut cmd = badcat_command(binary, args);
    cmd.current_dir(dir);
    capture(cmd, binary)
}

/// Like [`run_badcat`], sending stdout to `stdout` instead of capturing it.
pub fn run_badcat_to<I, S>(binary: impl AsRef<Path>, stdout: Stdio, args: I) -> Result<CatRun>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let binary = binary.as_ref();
    let mut cmd = badcat_command(binary, args);
    cmd.stdout(stdout);
    capture(cmd, binary)
}

/// Start `binary` with stdout and stderr piped, for tests that read only
/// part of the output. Finish with [`CatRun::wait`].
pub fn spawn_badcat<I, S>(binary: impl AsRef<Path>, args: I) -> Result<Child>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let binary = binary.as_ref();
    let mut cmd = badcat_command(binary, args);
    cmd.stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn {}", binary.display()))
}
