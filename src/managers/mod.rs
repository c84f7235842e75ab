pub mod detect;
pub mod registry;

pub use detect::*;
pub use registry::*;

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Package managers kbt knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PackageManager {
    Apt,
    Dnf,
    Yum,
    Pacman,
    Brew,
    Choco,
    Winget,
    Scoop,
}

const ALL: [PackageManager; 8] = [
    PackageManager::Apt,
    PackageManager::Dnf,
    PackageManager::Yum,
    PackageManager::Pacman,
    PackageManager::Brew,
    PackageManager::Choco,
    PackageManager::Winget,
    PackageManager::Scoop,
];

impl PackageManager {
    pub fn all() -> impl Iterator<Item = PackageManager> {
        ALL.into_iter()
    }

    /// Identifier used in the catalog and in user-facing messages
    pub fn as_str(self) -> &'static str {
        match self {
            PackageManager::Apt => "apt",
            PackageManager::Dnf => "dnf",
            PackageManager::Yum => "yum",
            PackageManager::Pacman => "pacman",
            PackageManager::Brew => "brew",
            PackageManager::Choco => "choco",
            PackageManager::Winget => "winget",
            PackageManager::Scoop => "scoop",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::UnsupportedManager(s.to_string()))
    }
}

/// Operating-system families with distinct package manager sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Linux,
    MacOs,
    Windows,
}

impl OsFamily {
    /// Family of the host this binary was built for, if supported
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "linux") {
            Some(OsFamily::Linux)
        } else if cfg!(target_os = "macos") {
            Some(OsFamily::MacOs)
        } else if cfg!(target_os = "windows") {
            Some(OsFamily::Windows)
        } else {
            None
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            OsFamily::Linux => "Linux",
            OsFamily::MacOs => "macOS",
            OsFamily::Windows => "Windows",
        }
    }
}
