//! DNF backend (Fedora/RHEL family).

use super::error::BackendError;
use super::manager::{PackageManager, PackageManagerKind};
use super::runner::{CommandRunner, CompletedProcess, Invocation, SystemRunner};

#[derive(Debug, Clone, Default)]
pub struct DnfBackend<R = SystemRunner> {
    runner: R,
}

impl<R: CommandRunner> DnfBackend<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> PackageManager for DnfBackend<R> {
    fn kind(&self) -> PackageManagerKind {
        PackageManagerKind::Dnf
    }

    fn list_installed_libs(&self) -> Result<CompletedProcess, BackendError> {
        self.runner.run(&Invocation::new("dnf", ["list", "--installed"]))
    }

    // dnf refreshes stale metadata on its own
    fn install(&self, packages: &[&str]) -> Result<CompletedProcess, BackendError> {
        self.runner
            .run(&Invocation::new("dnf", ["install", "-y"]).with_args(packages))
    }
}
