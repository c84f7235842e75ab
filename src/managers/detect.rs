use super::{ManagerMetadata, OsFamily, PackageManager};
use crate::utils::CommandRunner;

/// Find the first available package manager for an OS family.
///
/// Probes stop at the first binary found on PATH. Nothing is cached; each
/// call probes again.
pub fn detect_package_manager(
    runner: &dyn CommandRunner,
    family: Option<OsFamily>,
) -> Option<PackageManager> {
    let family = family?;

    for meta in ManagerMetadata::for_family(family) {
        if runner.command_exists(meta.binary) {
            log::debug!("Detected package manager: {}", meta.manager);
            return Some(meta.manager);
        }
        log::debug!("{} not found", meta.binary);
    }

    None
}
