//! Handlers for the CLI subcommands.

pub mod config;
pub mod detect;
pub mod install;
pub mod list;
pub mod status;

use anyhow::{Context, Result};
use std::collections::BTreeSet;

use crate::common::config::Config;
use crate::common::distro::OsRelease;
use crate::common::package::{Backend, CompletedProcess, PackageManager, parse_installed};
use crate::common::progress::with_spinner;
use crate::ui::prelude::*;

/// State shared by every handler: built once at start-up, never mutated
#[derive(Debug)]
pub struct Session {
    pub os_release: OsRelease,
    pub backend: Backend,
    pub config: Config,
}

/// Report a failed child process and leave with its exit status
pub(crate) fn exit_on_failure(done: &CompletedProcess) {
    if done.success() {
        return;
    }

    let code = done.status.unwrap_or(1);
    let stderr = done.stderr.trim();
    let message = if stderr.is_empty() {
        format!("`{}` failed with exit code {}", done.invocation, code)
    } else {
        format!("`{}` failed with exit code {}:\n{}", done.invocation, code, stderr)
    };
    emit(
        Level::Error,
        "command.failed",
        &message,
        Some(serde_json::json!({
            "command": done.invocation.to_string(),
            "status": done.status,
        })),
    );
    std::process::exit(code);
}

/// Names of installed packages according to the backend
pub(crate) fn installed_packages(session: &Session) -> Result<BTreeSet<String>> {
    let backend = &session.backend;
    let done = with_spinner("Reading installed packages...", || backend.list_installed_libs())
        .context("Failed to list installed packages")?;
    exit_on_failure(&done);
    Ok(parse_installed(backend.kind(), &done.stdout))
}
