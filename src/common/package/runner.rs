//! Child-process execution for the package backends.
//!
//! Programs are always started directly with an argument vector. Nothing
//! here goes through a shell, so package names are never interpreted.

use duct::cmd;
use serde::Serialize;
use std::fmt;

use super::error::BackendError;
use crate::common::command_log::CommandLogger;
use crate::ui::prelude::*;

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Append more arguments (typically package names)
    pub fn with_args<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(extra.into_iter().map(|s| s.as_ref().to_string()));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Outcome of a finished child process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedProcess {
    pub invocation: Invocation,
    /// `None` when the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CompletedProcess {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs one invocation to completion. Implementations must not fail on a
/// non-zero exit status; that is reported through [`CompletedProcess`].
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<CompletedProcess, BackendError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<CompletedProcess, BackendError> {
        (**self).run(invocation)
    }
}

/// Runs programs on the host, capturing stdout and stderr as text
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    logger: Option<CommandLogger>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(logger: CommandLogger) -> Self {
        Self {
            logger: Some(logger),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CompletedProcess, BackendError> {
        emit(
            Level::Debug,
            "command.run",
            &format!("Running: {invocation}"),
            None,
        );

        let output = cmd(invocation.program.as_str(), &invocation.args)
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .map_err(|source| BackendError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        let completed = CompletedProcess {
            invocation: invocation.clone(),
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if let Some(logger) = &self.logger
            && let Err(e) = logger.log(&completed)
        {
            emit(
                Level::Warn,
                "command.log_failed",
                &format!("Warning: failed to write command log: {e:#}"),
                None,
            );
        }

        Ok(completed)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Records every invocation and answers with canned results
    #[derive(Debug, Default)]
    pub struct RecordingRunner {
        pub calls: RefCell<Vec<Invocation>>,
        statuses: HashMap<String, i32>,
        stdout: HashMap<String, String>,
    }

    impl RecordingRunner {
        /// Make invocations whose rendered form starts with `prefix` exit with `code`
        pub fn fail(mut self, prefix: &str, code: i32) -> Self {
            self.statuses.insert(prefix.to_string(), code);
            self
        }

        pub fn stdout(mut self, prefix: &str, text: &str) -> Self {
            self.stdout.insert(prefix.to_string(), text.to_string());
            self
        }

        pub fn rendered_calls(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.to_string()).collect()
        }

        fn lookup<'a, T>(map: &'a HashMap<String, T>, line: &str) -> Option<&'a T> {
            map.iter()
                .find(|(prefix, _)| line.starts_with(prefix.as_str()))
                .map(|(_, v)| v)
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, invocation: &Invocation) -> Result<CompletedProcess, BackendError> {
            self.calls.borrow_mut().push(invocation.clone());
            let line = invocation.to_string();
            let status = Self::lookup(&self.statuses, &line).copied().unwrap_or(0);
            let stdout = Self::lookup(&self.stdout, &line).cloned().unwrap_or_default();
            Ok(CompletedProcess {
                invocation: invocation.clone(),
                status: Some(status),
                stdout,
                stderr: if status == 0 {
                    String::new()
                } else {
                    format!("{} failed", invocation.program)
                },
            })
        }
    }
}
