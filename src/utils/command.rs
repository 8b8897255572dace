//! Command execution primitives with captured output.

use std::path::Path;
use std::process::Command;

use serde::Serialize;

/// Captured outcome of a child process invocation.
///
/// Exit status is recorded explicitly alongside the output text so callers
/// can decide whether a failed step matters, instead of having the failure
/// swallowed at the execution layer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: i32,
}

/// Run a program with an explicit argument vector, capturing both streams.
///
/// Arguments are passed directly to the process, never through a shell.
/// Blocks until the child exits. Spawn failures (command not found,
/// permission denied) are reported through the output record with
/// `success: false` and `exit_code: -1` rather than as an error, so a
/// missing tool reads the same as a tool that ran and failed.
pub fn run_in_dir(program: &str, args: &[&str], dir: Option<&Path>) -> CommandOutput {
    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    match cmd.output() {
        Ok(out) => CommandOutput {
            stdout: String::from_utf8_lossy(&out.stdout).to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
            success: out.status.success(),
            exit_code: out.status.code().unwrap_or(-1),
        },
        Err(e) => CommandOutput {
            stdout: String::new(),
            stderr: format!("Command error: {}", e),
            success: false,
            exit_code: -1,
        },
    }
}

/// Run a program in the current working directory.
pub fn run(program: &str, args: &[&str]) -> CommandOutput {
    run_in_dir(program, args, None)
}

/// Extract error text from a command outcome.
///
/// Prefers stderr, falls back to stdout if stderr is empty.
pub fn error_text(output: &CommandOutput) -> &str {
    if !output.stderr.trim().is_empty() {
        &output.stderr
    } else {
        &output.stdout
    }
}

/// Display form of an invocation for reports and diagnostics.
pub fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_captures_stdout_exactly() {
        let output = run("echo", &["hello"]);
        assert!(output.success);
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.stdout, "hello\n");
        assert_eq!(output.stderr, "");
    }

    #[test]
    fn run_reports_missing_command_through_record() {
        let output = run("raybuild-nonexistent-tool-xyz", &[]);
        assert!(!output.success);
        assert_eq!(output.exit_code, -1);
        assert!(output.stderr.contains("Command error"));
    }

    #[test]
    fn run_reports_nonzero_exit() {
        let output = run("false", &[]);
        assert!(!output.success);
        assert_ne!(output.exit_code, 0);
    }

    #[test]
    fn run_in_dir_uses_working_directory() {
        let temp = tempfile::tempdir().unwrap();
        let output = run_in_dir("pwd", &[], Some(temp.path()));
        assert!(output.success);
        let reported = std::path::PathBuf::from(output.stdout.trim());
        assert_eq!(
            reported.canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn error_text_prefers_stderr() {
        let output = CommandOutput {
            stdout: "stdout content".to_string(),
            stderr: "stderr content".to_string(),
            success: false,
            exit_code: 1,
        };
        assert_eq!(error_text(&output), "stderr content");
    }

    #[test]
    fn error_text_falls_back_to_stdout() {
        let output = CommandOutput {
            stdout: "stdout content".to_string(),
            stderr: String::new(),
            success: false,
            exit_code: 1,
        };
        assert_eq!(error_text(&output), "stdout content");
    }

    #[test]
    fn render_command_joins_args() {
        assert_eq!(render_command("cmake", &[".."]), "cmake ..");
        assert_eq!(
            render_command("cmake", &["--build", ".", "--config", "Release"]),
            "cmake --build . --config Release"
        );
        assert_eq!(render_command("./raytracer", &[]), "./raytracer");
    }
}
