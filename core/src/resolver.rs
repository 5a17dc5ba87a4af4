//! Resolution of the external tools against the execution search path.
//!
//! Both tools are always checked, so a single run reports everything that is
//! missing instead of failing on the first absent program.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use pulse_common::error::PulseError;
use pulse_common::tools::Tool;
use tracing::{debug, error};

/// Directories searched for a bare executable name.
#[derive(Clone, Debug, Default)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { dirs: dirs.into_iter().map(Into::into).collect() }
    }

    /// Reads `PATH`. An unset variable yields an empty search path.
    pub fn from_env() -> Self {
        Self::from_path_var(env::var_os("PATH").as_deref())
    }

    fn from_path_var(var: Option<&OsStr>) -> Self {
        match var {
            Some(paths) => Self { dirs: env::split_paths(paths).collect() },
            None => Self::default(),
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Returns the first executable named `program`.
    ///
    /// A name that already contains a directory component is checked as given.
    pub fn resolve(&self, program: &str) -> Option<PathBuf> {
        let candidate: &Path = Path::new(program);
        if candidate.components().count() > 1 {
            return is_executable(candidate).then(|| candidate.to_path_buf());
        }

        self.dirs
            .iter()
            .map(|dir| dir.join(program))
            .find(|path| is_executable(path))
    }
}

fn is_executable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && has_exec_bit(&meta),
        Err(_) => false,
    }
}

#[cfg(unix)]
fn has_exec_bit(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_exec_bit(_meta: &fs::Metadata) -> bool {
    true
}

/// Absolute locations of both tools, available once the dependency check passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTools {
    pub udp_sender: PathBuf,
    pub arp_requester: PathBuf,
}

impl ResolvedTools {
    pub fn path(&self, tool: Tool) -> &Path {
        match tool {
            Tool::UdpSender => &self.udp_sender,
            Tool::ArpRequester => &self.arp_requester,
        }
    }
}

/// Checks every required tool and logs one diagnostic per missing tool.
pub fn check_dependencies(search_path: &SearchPath) -> Result<ResolvedTools, PulseError> {
    let mut missing: Vec<Tool> = Vec::new();
    let mut udp_sender: Option<PathBuf> = None;
    let mut arp_requester: Option<PathBuf> = None;

    for tool in Tool::ALL {
        let Some(path) = search_path.resolve(tool.program()) else {
            error!("{}", PulseError::ToolNotFound { tool });
            missing.push(tool);
            continue;
        };
        debug!("found {} at {}", tool, path.display());
        match tool {
            Tool::UdpSender => udp_sender = Some(path),
            Tool::ArpRequester => arp_requester = Some(path),
        }
    }

    match (udp_sender, arp_requester) {
        (Some(udp_sender), Some(arp_requester)) => Ok(ResolvedTools { udp_sender, arp_requester }),
        _ => Err(PulseError::MissingTools(missing)),
    }
}
