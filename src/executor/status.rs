use crate::managers::{ManagerMetadata, PackageManager};
use crate::utils::CommandRunner;

/// Asks the host whether a package is installed.
///
/// Advisory only: a failed query and an absent package both read as
/// "not installed".
pub struct StatusProbe<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> StatusProbe<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    pub fn is_installed(&self, manager: PackageManager, package: &str) -> bool {
        let Some(cmd) = ManagerMetadata::get(manager).and_then(|m| m.status_command(package))
        else {
            return false;
        };

        self.runner.run_quiet(&cmd)
    }
}
