//! Distro-aware wrapper around the system package manager.
//!
//! # Architecture
//!
//! - [`PackageManager`]: the capability every backend offers (list, install)
//! - `apt` / `dnf`: the two native backends
//! - [`Backend`]: whichever of the two was selected at start-up
//! - [`CommandRunner`]: how backends start child processes; [`SystemRunner`]
//!   on a real system, a recording fake in tests
//!
//! # Example
//!
//! ```ignore
//! let (_, backend) = distro::detect_backend(Path::new("/etc/os-release"), SystemRunner::new)?;
//! let done = backend.install(&["libcurl", "mesa-libGLU"])?;
//! if !done.success() {
//!     eprintln!("{}", done.stderr);
//! }
//! ```

mod apt;
mod dnf;
mod error;
mod inventory;
mod manager;
mod required;
mod runner;

pub use inventory::parse_installed;
pub use manager::{Backend, PackageManager, PackageManagerKind};
pub use required::{is_package_name, missing_libraries, required_libraries};
pub use runner::{CommandRunner, CompletedProcess, SystemRunner};

#[cfg(test)]
pub(crate) use runner::{Invocation, testing};
