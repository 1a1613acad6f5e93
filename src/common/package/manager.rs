//! Package manager capability and the backend selected at start-up.

use super::apt::AptBackend;
use super::dnf::DnfBackend;
use super::error::BackendError;
use super::runner::{CommandRunner, CompletedProcess, SystemRunner};

/// Which native package manager a backend drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManagerKind {
    /// APT - Debian/Ubuntu family
    Apt,
    /// DNF - Fedora/RHEL family
    Dnf,
}

impl PackageManagerKind {
    /// Programs the backend needs on `PATH`
    pub fn programs(&self) -> &'static [&'static str] {
        match self {
            Self::Apt => &["apt", "dpkg"],
            Self::Dnf => &["dnf"],
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Apt => "APT",
            Self::Dnf => "DNF",
        }
    }
}

impl std::fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Listing and installing packages through the host package manager.
///
/// A non-zero exit of the underlying command is not an error: it is returned
/// in the [`CompletedProcess`] for the caller to interpret. Errors are
/// reserved for programs that cannot be started and for steps whose failure
/// makes continuing unsafe.
pub trait PackageManager {
    fn kind(&self) -> PackageManagerKind;

    fn list_installed_libs(&self) -> Result<CompletedProcess, BackendError>;

    fn install(&self, packages: &[&str]) -> Result<CompletedProcess, BackendError>;
}

/// The one backend chosen for this process
#[derive(Debug, Clone)]
pub enum Backend<R = SystemRunner> {
    Apt(AptBackend<R>),
    Dnf(DnfBackend<R>),
}

impl<R: CommandRunner> Backend<R> {
    pub fn new(kind: PackageManagerKind, runner: R) -> Self {
        match kind {
            PackageManagerKind::Apt => Self::Apt(AptBackend::new(runner)),
            PackageManagerKind::Dnf => Self::Dnf(DnfBackend::new(runner)),
        }
    }

    fn inner(&self) -> &dyn PackageManager {
        match self {
            Self::Apt(b) => b,
            Self::Dnf(b) => b,
        }
    }
}

impl<R: CommandRunner> PackageManager for Backend<R> {
    fn kind(&self) -> PackageManagerKind {
        self.inner().kind()
    }

    fn list_installed_libs(&self) -> Result<CompletedProcess, BackendError> {
        self.inner().list_installed_libs()
    }

    fn install(&self, packages: &[&str]) -> Result<CompletedProcess, BackendError> {
        self.inner().install(packages)
    }
}
