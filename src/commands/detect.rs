use anyhow::Result;
use colored::*;

use super::Session;
use crate::common::package::PackageManager;
use crate::ui::prelude::*;

pub fn handle_detect(session: &Session) -> Result<()> {
    let os = &session.os_release;
    let family = os.family();
    let backend = session.backend.kind();

    let distribution = os
        .display_value("PRETTY_NAME")
        .or_else(|| os.display_value("NAME"))
        .unwrap_or("unknown");
    let id = os.display_value("ID").unwrap_or("-");
    let id_like = os.display_value("ID_LIKE").unwrap_or("-");

    let text = format!(
        "{:<14} {}\n{:<14} {}\n{:<14} {}\n{:<14} {}\n{:<14} {}",
        "Distribution:".bold(),
        distribution,
        "ID:".bold(),
        id,
        "ID_LIKE:".bold(),
        id_like,
        "Family:".bold(),
        family.to_string().cyan(),
        "Backend:".bold(),
        backend.to_string().green(),
    );

    emit(
        Level::Info,
        "detect.result",
        &text,
        Some(serde_json::json!({
            "distribution": distribution,
            "id": os.display_value("ID"),
            "id_like": os.display_value("ID_LIKE"),
            "family": family.name(),
            "backend": backend.display_name(),
        })),
    );
    Ok(())
}
