use super::{render_command, CommandRunner};
use crate::error::{GistSyncError, Result};
use std::process::Command;

/// Production runner: spawns the program, blocks until it exits, captures
/// stdout. A diagnostic line showing the command goes to stderr before each
/// invocation.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<String>> {
        eprintln!("Running {}", render_command(program, args));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| GistSyncError::Process {
                program: program.to_string(),
                detail: format!("failed to launch: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim_end();
            let detail = if stderr.is_empty() {
                format!("{}", output.status)
            } else {
                format!("{} ({})", output.status, stderr)
            };
            return Err(GistSyncError::Process {
                program: program.to_string(),
                detail,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.is_empty() {
            return Ok(Vec::new());
        }
        Ok(stdout.split('\n').map(|s| s.to_string()).collect())
    }
}
