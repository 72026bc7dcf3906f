//! # External command invocation
//!
//! The gist tool is an opaque collaborator: it is spawned, awaited, and its
//! stdout consumed line by line. The [`CommandRunner`] trait keeps the command
//! layer free of process I/O so tests can script tool behavior with
//! [`fake::FakeRunner`]; [`system::SystemRunner`] is the production
//! implementation.

use crate::error::Result;

pub mod fake;
pub mod system;

/// One blocking invocation of an external program.
pub trait CommandRunner {
    /// Run `program` with `args`, wait for it to exit, and return its stdout
    /// split on line feeds (empty output is an empty vec). Spawn failures and
    /// non-zero exits are errors; the caller decides what to do with them.
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<String>>;
}

/// Runs the program and returns only the first output line, or an empty
/// string when the program printed nothing.
pub fn run_first_line<R: CommandRunner>(runner: &R, program: &str, args: &[&str]) -> Result<String> {
    let lines = runner.run(program, args)?;
    Ok(lines.into_iter().next().unwrap_or_default())
}

/// Renders a command line for diagnostics. Arguments containing a space are
/// wrapped in single quotes for readability; this is not shell-safe escaping.
pub fn render_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program.to_string()];
    for arg in args {
        if arg.contains(' ') {
            parts.push(format!("'{}'", arg));
        } else {
            parts.push((*arg).to_string());
        }
    }
    parts.join(" ")
}
