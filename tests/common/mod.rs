use anyhow::Result;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

const FAKE_APT: &str = r#"#!/bin/sh
echo "apt $*" >> "$FAKE_COMMAND_LOG"
case "$1" in
    update)
        status="${FAKE_APT_UPDATE_STATUS:-0}"
        [ "$status" = 0 ] || echo "E: Could not get lock /var/lib/apt/lists/lock" >&2
        exit "$status" ;;
    install) exit "${FAKE_APT_INSTALL_STATUS:-0}" ;;
esac
"#;

const FAKE_DPKG: &str = r#"#!/bin/sh
echo "dpkg $*" >> "$FAKE_COMMAND_LOG"
cat "$FAKE_LIST_OUTPUT" 2>/dev/null
exit 0
"#;

const FAKE_DNF: &str = r#"#!/bin/sh
echo "dnf $*" >> "$FAKE_COMMAND_LOG"
case "$1" in
    list) cat "$FAKE_LIST_OUTPUT" 2>/dev/null; exit 0 ;;
    install)
        status="${FAKE_DNF_INSTALL_STATUS:-0}"
        [ "$status" = 0 ] || echo "Error: Unable to find a match: $3" >&2
        exit "$status" ;;
esac
"#;

/// Sandbox with a fake os-release and fake package manager programs
pub struct TestEnvironment {
    temp_dir: TempDir,
    envs: Vec<(String, String)>,
}

impl TestEnvironment {
    pub fn new(os_release: &str) -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let root = temp_dir.path();

        fs::write(root.join("os-release"), os_release)?;

        let bin = root.join("bin");
        fs::create_dir_all(&bin)?;
        for (name, script) in [("apt", FAKE_APT), ("dpkg", FAKE_DPKG), ("dnf", FAKE_DNF)] {
            let path = bin.join(name);
            fs::write(&path, script)?;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        }

        Ok(Self {
            temp_dir,
            envs: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn os_release_path(&self) -> PathBuf {
        self.path().join("os-release")
    }

    pub fn data_home(&self) -> PathBuf {
        self.path().join("data")
    }

    /// Extra environment for the fake programs (exit statuses)
    pub fn set(&mut self, key: &str, value: &str) {
        self.envs.push((key.to_string(), value.to_string()));
    }

    /// Output the fake `dpkg -l` / `dnf list --installed` prints
    pub fn set_list_output(&self, content: &str) -> Result<()> {
        fs::write(self.path().join("list-output"), content)?;
        Ok(())
    }

    /// Commands the fake programs received, in order
    pub fn recorded_commands(&self) -> Vec<String> {
        fs::read_to_string(self.path().join("commands.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let path_var = format!(
            "{}:{}",
            self.path().join("bin").display(),
            std::env::var("PATH").unwrap_or_default()
        );

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_davinci-helper"));
        cmd.args(args)
            .env("PATH", path_var)
            .env("HOME", self.path())
            .env("XDG_DATA_HOME", self.data_home())
            .env("DAVINCI_HELPER_OS_RELEASE", self.os_release_path())
            .env("DAVINCI_HELPER_CONFIG", self.path().join("config.toml"))
            .env("FAKE_COMMAND_LOG", self.path().join("commands.log"))
            .env("FAKE_LIST_OUTPUT", self.path().join("list-output"))
            .env("NO_COLOR", "1");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        let output = cmd.output()?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
