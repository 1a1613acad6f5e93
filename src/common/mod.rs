pub mod command_log;
pub mod config;
pub mod distro;
pub mod package;
pub mod paths;
pub mod progress;
