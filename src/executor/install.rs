use crate::error::Error;
use crate::managers::{ManagerMetadata, PackageManager};
use crate::utils::{CommandRunner, CommandSpec};

/// Result of installing one package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Succeeded,
    Failed(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOutcome {
    pub package: String,
    pub outcome: InstallOutcome,
}

/// Result of installing packages, in the order they were attempted
#[derive(Debug, Default)]
pub struct InstallResult {
    pub outcomes: Vec<PackageOutcome>,
}

impl InstallResult {
    pub fn all_succeeded(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| o.outcome == InstallOutcome::Succeeded)
    }

    /// (package, exit code) for every failure
    pub fn failed(&self) -> impl Iterator<Item = (&str, i32)> {
        self.outcomes.iter().filter_map(|o| match o.outcome {
            InstallOutcome::Failed(code) => Some((o.package.as_str(), code)),
            InstallOutcome::Succeeded => None,
        })
    }
}

/// Commands an install request will run
#[derive(Debug, Clone)]
pub struct InstallPlan {
    pub manager: PackageManager,
    pub refresh: Option<CommandSpec>,
    /// (package, command), one per package
    pub steps: Vec<(String, CommandSpec)>,
}

/// Drives a package manager through a list of packages, one at a time
pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> Installer<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Build the commands without running anything
    pub fn plan(
        &self,
        manager: PackageManager,
        packages: &[String],
    ) -> Result<InstallPlan, Error> {
        let meta = ManagerMetadata::get(manager)
            .ok_or_else(|| Error::UnsupportedManager(manager.to_string()))?;

        let use_sudo = meta.elevate && self.runner.command_exists("sudo");
        if meta.elevate && !use_sudo {
            log::debug!("sudo not found, running {} directly", manager);
        }

        let steps = packages
            .iter()
            .map(|pkg| {
                meta.install_command(pkg, use_sudo)
                    .map(|cmd| (pkg.clone(), cmd))
                    .ok_or_else(|| Error::UnsupportedManager(manager.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let refresh = if steps.is_empty() {
            None
        } else {
            meta.refresh_command(use_sudo)
        };

        Ok(InstallPlan {
            manager,
            refresh,
            steps,
        })
    }

    /// Install packages by manager identifier
    #[cfg(test)]
    pub fn install_by_id(
        &self,
        manager: &str,
        packages: &[String],
    ) -> Result<InstallResult, Error> {
        let manager: PackageManager = manager.parse()?;
        self.install(manager, packages)
    }

    /// Install each package in order; failures are recorded, never abort the batch
    pub fn install(
        &self,
        manager: PackageManager,
        packages: &[String],
    ) -> Result<InstallResult, Error> {
        let plan = self.plan(manager, packages)?;
        Ok(self.execute(&plan))
    }

    pub fn execute(&self, plan: &InstallPlan) -> InstallResult {
        let mut result = InstallResult::default();

        if let Some(refresh) = &plan.refresh {
            log::info!("→ Refreshing {} package index...", plan.manager);
            let code = self.runner.run(refresh);
            if code != 0 {
                log::warn!(
                    "{} index refresh failed (exit code: {}), continuing",
                    plan.manager,
                    code
                );
            }
        }

        for (package, cmd) in &plan.steps {
            log::info!("→ Installing {} ({})...", package, plan.manager);

            let code = self.runner.run(cmd);
            let outcome = if code == 0 {
                log::info!("✓ {} installed", package);
                InstallOutcome::Succeeded
            } else {
                log::error!("Failed to install {} (exit code: {})", package, code);
                InstallOutcome::Failed(code)
            };

            result.outcomes.push(PackageOutcome {
                package: package.clone(),
                outcome,
            });
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fake::FakeRunner;

    fn packages(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn installs_every_package_once_in_order() {
        let runner = FakeRunner::new();
        let result = Installer::new(&runner)
            .install(PackageManager::Brew, &packages(&["gcc", "cmake"]))
            .unwrap();

        assert!(result.all_succeeded());
        assert_eq!(
            runner.ran(),
            vec![
                "HOMEBREW_NO_AUTO_UPDATE=1 brew install gcc",
                "HOMEBREW_NO_AUTO_UPDATE=1 brew install cmake"
            ]
        );
        assert_eq!(
            result.outcomes,
            vec![
                PackageOutcome {
                    package: "gcc".to_string(),
                    outcome: InstallOutcome::Succeeded
                },
                PackageOutcome {
                    package: "cmake".to_string(),
                    outcome: InstallOutcome::Succeeded
                },
            ]
        );
    }

    #[test]
    fn failure_does_not_abort_remaining_packages() {
        let runner = FakeRunner::new().failing("cmake", 100);
        let result = Installer::new(&runner)
            .install(PackageManager::Choco, &packages(&["cmake", "ninja", "msbuild"]))
            .unwrap();

        assert!(!result.all_succeeded());
        assert_eq!(runner.ran().len(), 3);
        let outcomes: Vec<_> = result.outcomes.iter().map(|o| o.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                InstallOutcome::Failed(100),
                InstallOutcome::Succeeded,
                InstallOutcome::Succeeded
            ]
        );
        assert_eq!(result.failed().collect::<Vec<_>>(), vec![("cmake", 100)]);
    }

    #[test]
    fn apt_refreshes_once_then_installs_with_sudo() {
        let runner = FakeRunner::new().with_binaries(&["sudo"]);
        let result = Installer::new(&runner)
            .install(PackageManager::Apt, &packages(&["python3", "python3-pip"]))
            .unwrap();

        assert!(result.all_succeeded());
        assert_eq!(
            runner.ran(),
            vec![
                "sudo apt-get update",
                "sudo apt-get install -y python3",
                "sudo apt-get install -y python3-pip"
            ]
        );
    }

    #[test]
    fn failed_refresh_still_installs() {
        let runner = FakeRunner::new().failing("update", 100);
        let result = Installer::new(&runner)
            .install(PackageManager::Apt, &packages(&["golang"]))
            .unwrap();

        assert!(result.all_succeeded());
        assert_eq!(
            runner.ran(),
            vec!["apt-get update", "apt-get install -y golang"]
        );
    }

    #[test]
    fn runs_without_sudo_when_missing() {
        let runner = FakeRunner::new();
        Installer::new(&runner)
            .install(PackageManager::Pacman, &packages(&["go"]))
            .unwrap();
        assert_eq!(runner.ran(), vec!["pacman -S --noconfirm go"]);
    }

    #[test]
    fn unknown_manager_fails_before_running_anything() {
        let runner = FakeRunner::new();
        let err = Installer::new(&runner)
            .install_by_id("zypper", &packages(&["go"]))
            .unwrap_err();

        assert!(matches!(err, Error::UnsupportedManager(ref id) if id == "zypper"));
        assert!(runner.ran().is_empty());
        assert!(runner.lookups.borrow().is_empty());
    }

    #[test]
    fn install_by_id_accepts_known_manager() {
        let runner = FakeRunner::new();
        let result = Installer::new(&runner)
            .install_by_id("scoop", &packages(&["go"]))
            .unwrap();
        assert!(result.all_succeeded());
        assert_eq!(runner.ran(), vec!["scoop install go"]);
    }

    #[test]
    fn empty_request_runs_nothing() {
        let runner = FakeRunner::new();
        let result = Installer::new(&runner)
            .install(PackageManager::Apt, &[])
            .unwrap();
        assert!(result.all_succeeded());
        assert!(runner.ran().is_empty());
    }

    #[test]
    fn plan_does_not_execute() {
        let runner = FakeRunner::new().with_binaries(&["sudo"]);
        let plan = Installer::new(&runner)
            .plan(PackageManager::Dnf, &packages(&["golang"]))
            .unwrap();
        assert!(plan.refresh.is_none());
        assert_eq!(plan.steps[0].1.to_string(), "sudo dnf install -y golang");
        assert!(runner.ran().is_empty());
    }
}
