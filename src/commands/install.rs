use crate::catalog::Catalog;
use crate::executor::{Installer, PackageResolver};
use crate::managers::OsFamily;
use crate::utils::CommandRunner;
use anyhow::Result;
use colored::Colorize;

/// Install the toolchain for `language`. Returns whether every package installed.
pub fn run(
    catalog: &Catalog,
    runner: &dyn CommandRunner,
    family: Option<OsFamily>,
    language: &str,
    dry_run: bool,
) -> Result<bool> {
    let manager = super::require_package_manager(runner, family)?;
    let request = PackageResolver::new(catalog).resolve(language, manager)?;

    println!(
        "{}",
        format!(
            "Installing {} with {} ({} package(s))...",
            request.language,
            request.manager,
            request.packages.len()
        )
        .bright_cyan()
        .bold()
    );

    let installer = Installer::new(runner);

    if dry_run {
        let plan = installer.plan(manager, &request.packages)?;
        println!("  Would run:");
        let steps = plan.steps.iter().map(|(_, cmd)| cmd);
        for cmd in plan.refresh.iter().chain(steps) {
            println!("    → {}", cmd);
        }
        return Ok(true);
    }

    let result = installer.install(manager, &request.packages)?;

    println!();
    if result.all_succeeded() {
        println!("{}", "Installation completed successfully.".green());
    } else {
        eprintln!("{}", "Installation completed with errors.".red());
        for (package, code) in result.failed() {
            eprintln!("  ✗ {} (exit code: {})", package, code);
        }
    }

    Ok(result.all_succeeded())
}
