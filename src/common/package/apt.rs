//! APT backend (Debian/Ubuntu family).

use super::error::BackendError;
use super::manager::{PackageManager, PackageManagerKind};
use super::runner::{CommandRunner, CompletedProcess, Invocation, SystemRunner};

#[derive(Debug, Clone, Default)]
pub struct AptBackend<R = SystemRunner> {
    runner: R,
}

impl<R: CommandRunner> AptBackend<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn refresh_index(&self) -> Result<(), BackendError> {
        let done = self.runner.run(&Invocation::new("apt", ["update", "-qq"]))?;
        if !done.success() {
            return Err(BackendError::UpdateFailed {
                status: done.status,
                stderr: done.stderr,
            });
        }
        Ok(())
    }
}

impl<R: CommandRunner> PackageManager for AptBackend<R> {
    fn kind(&self) -> PackageManagerKind {
        PackageManagerKind::Apt
    }

    fn list_installed_libs(&self) -> Result<CompletedProcess, BackendError> {
        self.runner.run(&Invocation::new("dpkg", ["-l"]))
    }

    /// Refreshes the index first, even for an empty list. Installing against
    /// stale package lists is not attempted.
    fn install(&self, packages: &[&str]) -> Result<CompletedProcess, BackendError> {
        self.refresh_index()?;
        self.runner
            .run(&Invocation::new("apt", ["install", "-y"]).with_args(packages))
    }
}
