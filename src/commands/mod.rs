pub mod install;
pub mod list;

use crate::error::Error;
use crate::managers::{detect_package_manager, OsFamily, PackageManager};
use crate::utils::CommandRunner;

/// Detect the host package manager or fail with the supported list
pub fn require_package_manager(
    runner: &dyn CommandRunner,
    family: Option<OsFamily>,
) -> Result<PackageManager, Error> {
    detect_package_manager(runner, family).ok_or_else(Error::no_package_manager)
}
