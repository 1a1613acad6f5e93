//! Parsing `dpkg -l` and `dnf list --installed` output into package names.

use std::collections::BTreeSet;

use super::manager::PackageManagerKind;

/// Names of installed packages, sorted and deduplicated
pub fn parse_installed(kind: PackageManagerKind, stdout: &str) -> BTreeSet<String> {
    match kind {
        PackageManagerKind::Apt => parse_dpkg(stdout),
        PackageManagerKind::Dnf => parse_dnf(stdout),
    }
}

/// Rows look like `ii  libasound2:amd64  1.2.8-1  amd64  shared library`.
/// Only fully installed (`ii`) rows count.
fn parse_dpkg(stdout: &str) -> BTreeSet<String> {
    stdout
        .lines()
        .filter_map(|line| {
            let mut cols = line.split_whitespace();
            let state = cols.next()?;
            if state != "ii" {
                return None;
            }
            let name = cols.next()?;
            Some(name.split(':').next().unwrap_or(name).to_string())
        })
        .collect()
}

/// Rows look like `mesa-libGLU.x86_64  9.0.3-1.fc39  @fedora`.
fn parse_dnf(stdout: &str) -> BTreeSet<String> {
    stdout
        .lines()
        .filter_map(|line| {
            let cols: Vec<&str> = line.split_whitespace().collect();
            if cols.len() < 3 || line.starts_with(char::is_whitespace) {
                return None;
            }
            let name = cols[0];
            let (base, arch) = name.rsplit_once('.')?;
            if base.is_empty() || arch.is_empty() {
                return None;
            }
            Some(base.to_string())
        })
        .collect()
}
