//! Libraries DaVinci Resolve needs, per package manager.

use std::collections::BTreeSet;

use super::manager::PackageManagerKind;

const APT_LIBRARIES: &[&str] = &[
    "libapr1",
    "libaprutil1",
    "libasound2",
    "libglib2.0-0",
    "libxcb-composite0",
    "libxcb-cursor0",
    "libxcb-damage0",
    "libxcb-xinput0",
    "libxcb-xinerama0",
    "ocl-icd-libopencl1",
];

const DNF_LIBRARIES: &[&str] = &[
    "libxcrypt-compat",
    "libcurl",
    "libcurl-devel",
    "mesa-libGLU",
    "apr",
    "apr-util",
    "alsa-lib",
];

pub fn builtin_libraries(kind: PackageManagerKind) -> &'static [&'static str] {
    match kind {
        PackageManagerKind::Apt => APT_LIBRARIES,
        PackageManagerKind::Dnf => DNF_LIBRARIES,
    }
}

/// Built-in set followed by `extra`, without duplicates, original order kept.
/// Extras that look like options are dropped so they never reach the
/// package manager's command line.
pub fn required_libraries(kind: PackageManagerKind, extra: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    builtin_libraries(kind)
        .iter()
        .map(|s| s.to_string())
        .chain(extra.iter().map(|s| s.trim().to_string()))
        .filter(|name| is_package_name(name) && seen.insert(name.clone()))
        .collect()
}

/// Non-empty and not starting with `-`
pub fn is_package_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('-')
}

/// Required packages that are not in `installed`
pub fn missing_libraries(required: &[String], installed: &BTreeSet<String>) -> Vec<String> {
    required
        .iter()
        .filter(|name| !installed.contains(name.as_str()))
        .cloned()
        .collect()
}
