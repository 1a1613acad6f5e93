use anyhow::Result;
use colored::*;
use sudo::RunningAs;

use super::Session;
use crate::common::package::PackageManager;
use crate::ui::prelude::*;

pub fn handle_status(session: &Session) -> Result<()> {
    let kind = session.backend.kind();
    let mut all_found = true;
    let mut programs = serde_json::Map::new();
    let mut lines = vec![format!("{:<10} {}", "Backend:".bold(), kind.to_string().green())];

    for program in kind.programs() {
        let location = which::which(program).ok();
        let shown = match &location {
            Some(path) => path.display().to_string().normal(),
            None => {
                all_found = false;
                "not found".red()
            }
        };
        lines.push(format!("{:<10} {}", format!("{program}:").bold(), shown));
        programs.insert(
            program.to_string(),
            serde_json::json!(location.map(|p| p.display().to_string())),
        );
    }

    let root = matches!(sudo::check(), RunningAs::Root);
    lines.push(format!(
        "{:<10} {}",
        "Root:".bold(),
        if root { "yes".green() } else { "no (install needs root)".yellow() }
    ));

    emit(
        if all_found { Level::Info } else { Level::Warn },
        "status.result",
        &lines.join("\n"),
        Some(serde_json::json!({
            "backend": kind.display_name(),
            "programs": programs,
            "root": root,
        })),
    );

    if !all_found {
        anyhow::bail!("{} is not usable on this system", kind);
    }
    Ok(())
}
