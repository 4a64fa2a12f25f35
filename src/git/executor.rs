use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitRunError {
    #[error("Empty command")]
    EmptyCommand,

    #[error("Command contains potentially unsafe characters")]
    UnsafeCharacters,

    #[error("Failed to execute git: {0}")]
    LaunchFailed(#[from] io::Error),
}

/// Result of executing a chosen git command
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Executes a chosen candidate as a git command
///
/// The candidate string does not include the "git" prefix; it is split
/// on whitespace and passed as arguments, never through a shell.
#[derive(Debug)]
pub struct GitRunner {
    working_dir: PathBuf,
}

impl GitRunner {
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Self {
        Self {
            working_dir: working_dir.as_ref().to_path_buf(),
        }
    }

    /// Run `git <command>` and capture its output
    ///
    /// A non-zero exit from git is not an error here; the caller
    /// decides what to do with the exit code.
    pub fn run(&self, command: &str) -> Result<RunOutput, GitRunError> {
        // No shell interpolation in candidate words
        if command.contains('$') || command.contains('`') {
            return Err(GitRunError::UnsafeCharacters);
        }

        let args: Vec<&str> = command.split_whitespace().collect();
        if args.is_empty() {
            return Err(GitRunError::EmptyCommand);
        }

        let output = Command::new("git")
            .args(&args)
            .current_dir(&self.working_dir)
            .output()?;

        Ok(RunOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            success: output.status.success(),
        })
    }

    /// Get the working directory commands run in
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let repo_path = temp_dir.path().to_path_buf();

        Command::new("git")
            .args(["init"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        (temp_dir, repo_path)
    }

    #[test]
    fn test_run_status() {
        let (_temp, repo_path) = create_test_repo();
        let runner = GitRunner::new(&repo_path);

        let output = runner.run("status --porcelain").unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, 0);
    }

    #[test]
    fn test_failed_command_reports_exit_code() {
        let (_temp, repo_path) = create_test_repo();
        let runner = GitRunner::new(&repo_path);

        // No such subcommand; git exits non-zero but run() succeeds
        let output = runner.run("definitely-not-a-subcommand").unwrap();
        assert!(!output.success);
        assert_ne!(output.exit_code, 0);
    }

    #[test]
    fn test_unsafe_characters_rejected() {
        let (_temp, repo_path) = create_test_repo();
        let runner = GitRunner::new(&repo_path);

        let result = runner.run("push $(whoami) origin");
        assert!(matches!(result.unwrap_err(), GitRunError::UnsafeCharacters));

        let result = runner.run("push `whoami` origin");
        assert!(matches!(result.unwrap_err(), GitRunError::UnsafeCharacters));
    }

    #[test]
    fn test_empty_command_rejected() {
        let (_temp, repo_path) = create_test_repo();
        let runner = GitRunner::new(&repo_path);

        let result = runner.run("   ");
        assert!(matches!(result.unwrap_err(), GitRunError::EmptyCommand));
    }

    #[test]
    fn test_working_dir() {
        let (_temp, repo_path) = create_test_repo();
        let runner = GitRunner::new(&repo_path);

        assert_eq!(runner.working_dir(), repo_path.as_path());
    }
}
