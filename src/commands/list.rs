use crate::catalog::Catalog;
use crate::executor::StatusProbe;
use crate::managers::{OsFamily, PackageManager};
use crate::utils::CommandRunner;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageStatus {
    Installed,
    NotInstalled,
    Unsupported,
}

/// Installed status of one catalog language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageRow {
    pub language: String,
    /// Package that was checked, if the manager can provide the language
    pub package: Option<String>,
    pub status: LanguageStatus,
}

pub fn run(
    catalog: &Catalog,
    runner: &dyn CommandRunner,
    family: Option<OsFamily>,
    json: bool,
) -> Result<()> {
    let manager = super::require_package_manager(runner, family)?;
    let rows = collect_status(catalog, &StatusProbe::new(runner), manager);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &rows).context("Failed to write JSON")?;
        writeln!(out)?;
    } else {
        render(&rows, manager, &mut out)?;
    }

    Ok(())
}

/// Probe the representative package of every language, in catalog order
pub fn collect_status(
    catalog: &Catalog,
    probe: &StatusProbe<'_>,
    manager: PackageManager,
) -> Vec<LanguageRow> {
    catalog
        .entries()
        .iter()
        .map(|entry| match entry.representative(manager) {
            Some(package) => LanguageRow {
                language: entry.name.clone(),
                package: Some(package.to_string()),
                status: if probe.is_installed(manager, package) {
                    LanguageStatus::Installed
                } else {
                    LanguageStatus::NotInstalled
                },
            },
            None => LanguageRow {
                language: entry.name.clone(),
                package: None,
                status: LanguageStatus::Unsupported,
            },
        })
        .collect()
}

pub fn render(
    rows: &[LanguageRow],
    manager: PackageManager,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        out,
        "Supported languages and installation status (using {}):",
        manager
    )?;

    for row in rows {
        match row.status {
            LanguageStatus::Installed => {
                writeln!(out, "{}", format!("  {} : Installed", row.language).green())?
            }
            LanguageStatus::NotInstalled => writeln!(out, "  {} : Not installed", row.language)?,
            LanguageStatus::Unsupported => writeln!(
                out,
                "{}",
                format!("  {} : Not supported by {}", row.language, manager).dimmed()
            )?,
        }
    }

    Ok(())
}
