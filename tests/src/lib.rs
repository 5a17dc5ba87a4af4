//! Helpers for the end-to-end tests: stand-in `hping3`/`arping` executables
//! that record their arguments instead of touching the network.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct FakeTools {
    dir: TempDir,
}

impl FakeTools {
    /// Creates a directory holding the named fake tools. Each one appends
    /// `<name> <args>` to the shared call log and exits with `exit_code`.
    #[cfg(unix)]
    pub fn new(tools: &[(&str, i32)]) -> std::io::Result<Self> {
        let bodies: Vec<(&str, String)> = tools
            .iter()
            .map(|(name, exit_code)| (*name, format!("exit {exit_code}")))
            .collect();
        let scripts: Vec<(&str, &str)> = bodies.iter().map(|(name, body)| (*name, body.as_str())).collect();
        Self::with_scripts(&scripts)
    }

    /// Like `new`, but each tool runs `body` after logging its call.
    #[cfg(unix)]
    pub fn with_scripts(tools: &[(&str, &str)]) -> std::io::Result<Self> {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new()?;
        let log = dir.path().join("calls.log");
        fs::write(&log, "")?;

        for (name, body) in tools {
            let path = dir.path().join(name);
            let script = format!(
                "#!/bin/sh\necho \"{name} $*\" >> '{log}'\n{body}\n",
                log = log.display()
            );
            fs::write(&path, script)?;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        }

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    /// Recorded command lines, in call order.
    pub fn calls(&self) -> std::io::Result<Vec<String>> {
        let log = fs::read_to_string(self.log_path())?;
        Ok(log.lines().map(str::to_string).collect())
    }
}
