use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::common::package::{Backend, CommandRunner, PackageManagerKind};

lazy_static! {
    static ref KEY_VALUE: Regex = Regex::new(r"(?m)^(\w+)=(.*)$").expect("valid os-release regex");
}

/// Distribution lineage as far as package management is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistroFamily {
    /// Debian, Ubuntu and derivatives (APT)
    Debian,
    /// Fedora, RHEL and derivatives (DNF)
    Fedora,
    Unsupported,
}

impl DistroFamily {
    /// Classify a lower-cased `ID_LIKE` value. First match wins.
    pub fn from_id_like(id_like: &str) -> Self {
        if id_like.contains("debian") {
            Self::Debian
        } else if id_like.contains("fedora") {
            Self::Fedora
        } else {
            Self::Unsupported
        }
    }

    pub fn package_manager(&self) -> Option<PackageManagerKind> {
        match self {
            Self::Debian => Some(PackageManagerKind::Apt),
            Self::Fedora => Some(PackageManagerKind::Dnf),
            Self::Unsupported => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Debian => "debian-like",
            Self::Fedora => "fedora-like",
            Self::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for DistroFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// `KEY=value` pairs of an os-release file. Values are kept verbatim,
/// quotes included; a later duplicate key replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    fields: HashMap<String, String>,
}

impl OsRelease {
    pub fn parse(content: &str) -> Self {
        let fields = KEY_VALUE
            .captures_iter(content)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
            .collect();
        Self { fields }
    }

    /// Read the descriptor at `path`. A missing or unreadable file gives an
    /// empty descriptor, never an error.
    pub fn read(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Value with surrounding quotes removed, for display
    pub fn display_value(&self, key: &str) -> Option<&str> {
        self.get(key)
            .map(|v| v.trim().trim_matches(|c| c == '"' || c == '\''))
    }

    /// Lower-cased `ID_LIKE`, empty when absent
    pub fn id_like(&self) -> String {
        self.get("ID_LIKE").unwrap_or_default().to_lowercase()
    }

    pub fn family(&self) -> DistroFamily {
        DistroFamily::from_id_like(&self.id_like())
    }
}

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("unsupported distribution (ID_LIKE '{id_like}' is neither 'debian' nor 'fedora')")]
    UnsupportedDistribution { id_like: String },
}

/// Package manager for the described distribution
pub fn package_manager_for(os_release: &OsRelease) -> Result<PackageManagerKind, DetectError> {
    os_release
        .family()
        .package_manager()
        .ok_or_else(|| DetectError::UnsupportedDistribution {
            id_like: os_release
                .display_value("ID_LIKE")
                .unwrap_or_default()
                .to_lowercase(),
        })
}

/// Pick the backend for the distribution described at `path`. The parsed
/// descriptor is returned alongside for display. `make_runner` is only
/// called once the distribution is known to be supported.
pub fn detect_backend<R, F>(
    path: &Path,
    make_runner: F,
) -> Result<(OsRelease, Backend<R>), DetectError>
where
    R: CommandRunner,
    F: FnOnce() -> R,
{
    let os_release = OsRelease::read(path);
    let kind = package_manager_for(&os_release)?;
    Ok((os_release, Backend::new(kind, make_runner())))
}
