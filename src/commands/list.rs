use anyhow::{Context, Result};

use super::{Session, exit_on_failure, installed_packages};
use crate::common::package::PackageManager;
use crate::common::progress::with_spinner;
use crate::ui::prelude::*;

pub fn handle_list(session: &Session, filter: Option<&str>, raw: bool) -> Result<()> {
    if raw {
        let backend = &session.backend;
        let done = with_spinner("Reading installed packages...", || backend.list_installed_libs())
            .context("Failed to list installed packages")?;
        exit_on_failure(&done);
        print!("{}", done.stdout);
        return Ok(());
    }

    let needle = filter.map(str::to_lowercase);
    let packages: Vec<String> = installed_packages(session)?
        .into_iter()
        .filter(|name| {
            needle
                .as_deref()
                .is_none_or(|n| name.to_lowercase().contains(n))
        })
        .collect();

    match get_output_format() {
        OutputFormat::Json => emit(
            Level::Info,
            "list.packages",
            &format!("{} installed packages", packages.len()),
            Some(serde_json::json!({ "packages": packages })),
        ),
        OutputFormat::Text => {
            for name in &packages {
                println!("{name}");
            }
        }
    }
    Ok(())
}
