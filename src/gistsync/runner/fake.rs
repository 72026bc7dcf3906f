use super::CommandRunner;
use crate::error::{GistSyncError, Result};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Scripted {
    Lines(Vec<String>),
    Fail(String),
}

/// Scripted runner for tests. Responses are consumed in order; once the
/// script is exhausted every call succeeds with empty output. All invocations
/// are recorded for assertion.
#[derive(Debug, Default)]
pub struct FakeRunner {
    script: RefCell<VecDeque<Scripted>>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful invocation printing the given lines.
    pub fn respond(self, lines: &[&str]) -> Self {
        self.script
            .borrow_mut()
            .push_back(Scripted::Lines(lines.iter().map(|s| s.to_string()).collect()));
        self
    }

    /// Queue a failing invocation.
    pub fn respond_err(self, detail: &str) -> Self {
        self.script
            .borrow_mut()
            .push_back(Scripted::Fail(detail.to_string()));
        self
    }

    /// Every `(program, args)` pair seen so far, in call order.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<String>> {
        self.calls.borrow_mut().push((
            program.to_string(),
            args.iter().map(|s| s.to_string()).collect(),
        ));
        match self.script.borrow_mut().pop_front() {
            Some(Scripted::Lines(lines)) => Ok(lines),
            Some(Scripted::Fail(detail)) => Err(GistSyncError::Process {
                program: program.to_string(),
                detail,
            }),
            None => Ok(Vec::new()),
        }
    }
}
