use crate::error::{NlpError, NlpResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Invokes the external dependency parser as a scoped subprocess
///
/// The sentence goes to the parser on stdin; the token table comes back
/// on stdout, with log lines on stderr. The working directory is passed
/// to the child explicitly rather than mutating the process-wide cwd.
#[derive(Debug)]
pub struct DependencyParser {
    script_path: PathBuf,
    working_dir: Option<PathBuf>,
}

impl DependencyParser {
    /// Create a parser handle for the given script path
    pub fn new<P: AsRef<Path>>(script_path: P) -> Self {
        Self {
            script_path: script_path.as_ref().to_path_buf(),
            working_dir: None,
        }
    }

    /// Run the parser from a specific working directory
    pub fn with_working_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Parse one sentence and return the parser's combined output
    ///
    /// Stderr is prepended to stdout so callers see log lines ahead of
    /// the table, matching how the parser interleaves them on a tty.
    /// The child is reaped on every exit path.
    pub fn parse(&self, sentence: &str) -> NlpResult<String> {
        let mut command = Command::new(&self.script_path);
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|source| NlpError::ParserLaunch {
            script: self.script_path.display().to_string(),
            source,
        })?;

        // Write the sentence, then drop stdin so the parser sees EOF.
        // A write failure is surfaced only after the child is reaped.
        let stdin_result = match child.stdin.take() {
            Some(mut stdin) => stdin
                .write_all(sentence.as_bytes())
                .and_then(|_| stdin.write_all(b"\n")),
            None => Ok(()),
        };

        let output = child.wait_with_output();
        stdin_result?;
        let output = output?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(NlpError::ParserFailed {
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(format!("{}{}", stderr, stdout))
    }

    /// Get the parser script path
    pub fn script_path(&self) -> &Path {
        &self.script_path
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();

        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();

        path
    }

    #[test]
    fn test_parse_echoes_output() {
        let dir = TempDir::new().unwrap();
        let script = write_script(
            &dir,
            "parser.sh",
            "#!/bin/sh\ncat > /dev/null\necho 'INFO: model loaded' >&2\necho table\n",
        );

        let parser = DependencyParser::new(&script);
        let output = parser.parse("push branch to remote").unwrap();

        // stderr first, then stdout
        assert_eq!(output, "INFO: model loaded\ntable\n");
    }

    #[test]
    fn test_parse_receives_sentence_on_stdin() {
        let dir = TempDir::new().unwrap();
        let script = write_script(&dir, "parser.sh", "#!/bin/sh\ncat\n");

        let parser = DependencyParser::new(&script);
        let output = parser.parse("push branch test_branch").unwrap();

        assert_eq!(output, "push branch test_branch\n");
    }

    #[test]
    fn test_working_dir_is_passed() {
        let dir = TempDir::new().unwrap();
        let script = write_script(&dir, "parser.sh", "#!/bin/sh\ncat > /dev/null\npwd\n");

        let workdir = TempDir::new().unwrap();
        let parser = DependencyParser::new(&script).with_working_dir(workdir.path());
        let output = parser.parse("anything").unwrap();

        let reported = PathBuf::from(output.trim());
        assert_eq!(
            reported.canonicalize().unwrap(),
            workdir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_missing_script_is_launch_error() {
        let parser = DependencyParser::new("/nonexistent/parser.sh");
        let result = parser.parse("push branch");

        assert!(matches!(
            result.unwrap_err(),
            NlpError::ParserLaunch { .. }
        ));
    }

    #[test]
    fn test_failing_script_reports_exit_code() {
        let dir = TempDir::new().unwrap();
        let script = write_script(
            &dir,
            "parser.sh",
            "#!/bin/sh\ncat > /dev/null\necho 'model not found' >&2\nexit 3\n",
        );

        let parser = DependencyParser::new(&script);
        let err = parser.parse("push branch").unwrap_err();

        match err {
            NlpError::ParserFailed { code, stderr } => {
                assert_eq!(code, 3);
                assert_eq!(stderr, "model not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
