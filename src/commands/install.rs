use anyhow::{Context, Result};
use sudo::RunningAs;

use super::{Session, exit_on_failure, installed_packages};
use crate::common::package::{PackageManager, missing_libraries, required_libraries};
use crate::common::progress::with_spinner;
use crate::ui::prelude::*;

pub fn handle_install(session: &Session, packages: &[String]) -> Result<()> {
    let names: Vec<&str> = packages.iter().map(String::as_str).collect();
    install_names(session, &names)
}

pub fn handle_missing(session: &Session) -> Result<()> {
    let missing = missing_for_session(session)?;

    if missing.is_empty() {
        emit(
            Level::Success,
            "missing.none",
            "✓ All required libraries are installed",
            Some(serde_json::json!({ "missing": missing })),
        );
        return Ok(());
    }

    match get_output_format() {
        OutputFormat::Json => emit(
            Level::Info,
            "missing.packages",
            &format!("{} required libraries are missing", missing.len()),
            Some(serde_json::json!({ "missing": missing })),
        ),
        OutputFormat::Text => {
            for name in &missing {
                println!("{name}");
            }
        }
    }
    Ok(())
}

pub fn handle_setup(session: &Session, dry_run: bool) -> Result<()> {
    let missing = missing_for_session(session)?;

    if missing.is_empty() {
        emit(
            Level::Success,
            "setup.nothing_to_do",
            "✓ All required libraries are already installed",
            None,
        );
        return Ok(());
    }

    if dry_run {
        emit(
            Level::Info,
            "setup.dry_run",
            &format!("Would install: {}", missing.join(" ")),
            Some(serde_json::json!({ "packages": missing })),
        );
        return Ok(());
    }

    let names: Vec<&str> = missing.iter().map(String::as_str).collect();
    install_names(session, &names)
}

fn missing_for_session(session: &Session) -> Result<Vec<String>> {
    let installed = installed_packages(session)?;
    let required = required_libraries(session.backend.kind(), &session.config.extra_packages);
    Ok(missing_libraries(&required, &installed))
}

fn install_names(session: &Session, names: &[&str]) -> Result<()> {
    let backend = &session.backend;

    if !matches!(sudo::check(), RunningAs::Root) {
        emit(
            Level::Warn,
            "install.not_root",
            &format!(
                "Warning: not running as root, {} will probably refuse to install",
                backend.kind()
            ),
            None,
        );
    }

    let done = with_spinner(format!("Installing {}...", names.join(" ")), || {
        backend.install(names)
    })
    .with_context(|| format!("Failed to install packages with {}", backend.kind()))?;

    exit_on_failure(&done);

    emit(
        Level::Success,
        "install.done",
        &format!("✓ Installed {}", names.join(" ")),
        Some(serde_json::json!({ "packages": names })),
    );
    Ok(())
}
