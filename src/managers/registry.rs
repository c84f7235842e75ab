use super::{OsFamily, PackageManager};
use crate::utils::CommandSpec;

/// Command templates and detection data for a package manager.
///
/// Templates list the program followed by its arguments; the package
/// identifier is appended as the final argument.
#[derive(Debug, Clone)]
pub struct ManagerMetadata {
    pub manager: PackageManager,

    /// OS family this manager is probed on
    pub family: OsFamily,

    /// Binary looked up on PATH during detection
    pub binary: &'static str,

    /// Query whose zero exit status means the package is installed
    pub status: &'static [&'static str],

    /// Install a single package
    pub install: &'static [&'static str],

    /// Index refresh run once before a batch of installs
    pub refresh: &'static [&'static str],

    /// Whether commands need `sudo`
    pub elevate: bool,

    /// Extra environment for install commands
    pub env: &'static [(&'static str, &'static str)],
}

/// Registry of supported package managers, in detection priority order
pub static PACKAGE_MANAGERS: &[ManagerMetadata] = &[
    ManagerMetadata {
        manager: PackageManager::Apt,
        family: OsFamily::Linux,
        binary: "apt",
        status: &["dpkg", "-s"],
        install: &["apt-get", "install", "-y"],
        refresh: &["apt-get", "update"],
        elevate: true,
        env: &[],
    },
    ManagerMetadata {
        manager: PackageManager::Dnf,
        family: OsFamily::Linux,
        binary: "dnf",
        status: &["rpm", "-q"],
        install: &["dnf", "install", "-y"],
        refresh: &[],
        elevate: true,
        env: &[],
    },
    ManagerMetadata {
        manager: PackageManager::Yum,
        family: OsFamily::Linux,
        binary: "yum",
        status: &["rpm", "-q"],
        install: &["yum", "install", "-y"],
        refresh: &[],
        elevate: true,
        env: &[],
    },
    ManagerMetadata {
        manager: PackageManager::Pacman,
        family: OsFamily::Linux,
        binary: "pacman",
        status: &["pacman", "-Q"],
        install: &["pacman", "-S", "--noconfirm"],
        refresh: &[],
        elevate: true,
        env: &[],
    },
    ManagerMetadata {
        manager: PackageManager::Brew,
        family: OsFamily::MacOs,
        binary: "brew",
        status: &["brew", "list"],
        install: &["brew", "install"],
        refresh: &[],
        elevate: false,
        env: &[("HOMEBREW_NO_AUTO_UPDATE", "1")],
    },
    ManagerMetadata {
        manager: PackageManager::Choco,
        family: OsFamily::Windows,
        binary: "choco",
        status: &["choco", "list", "--local-only"],
        install: &["choco", "install", "-y"],
        refresh: &[],
        elevate: false,
        env: &[],
    },
    ManagerMetadata {
        manager: PackageManager::Winget,
        family: OsFamily::Windows,
        binary: "winget",
        status: &["winget", "list", "--id"],
        install: &[
            "winget",
            "install",
            "--exact",
            "--accept-package-agreements",
            "--accept-source-agreements",
            "--id",
        ],
        refresh: &[],
        elevate: false,
        env: &[],
    },
    ManagerMetadata {
        manager: PackageManager::Scoop,
        family: OsFamily::Windows,
        binary: "scoop",
        status: &["scoop", "list"],
        install: &["scoop", "install"],
        refresh: &[],
        elevate: false,
        env: &[],
    },
];

impl ManagerMetadata {
    /// Get manager metadata by manager
    pub fn get(manager: PackageManager) -> Option<&'static ManagerMetadata> {
        PACKAGE_MANAGERS.iter().find(|m| m.manager == manager)
    }

    /// Managers probed on an OS family, highest priority first
    pub fn for_family(family: OsFamily) -> impl Iterator<Item = &'static ManagerMetadata> {
        PACKAGE_MANAGERS.iter().filter(move |m| m.family == family)
    }

    /// Status query for a package, if this manager has one
    pub fn status_command(&self, package: &str) -> Option<CommandSpec> {
        CommandSpec::from_template(self.status, package)
    }

    /// Install command for a single package
    pub fn install_command(&self, package: &str, use_sudo: bool) -> Option<CommandSpec> {
        let cmd = CommandSpec::from_template(self.install, package)?;
        Some(self.finish(cmd, use_sudo))
    }

    pub fn refresh_command(&self, use_sudo: bool) -> Option<CommandSpec> {
        let cmd = CommandSpec::from_template(self.refresh, "")?;
        Some(self.finish(cmd, use_sudo))
    }

    fn finish(&self, mut cmd: CommandSpec, use_sudo: bool) -> CommandSpec {
        for (key, value) in self.env {
            cmd = cmd.env(*key, *value);
        }
        if self.elevate && use_sudo {
            cmd.elevated()
        } else {
            cmd
        }
    }
}
