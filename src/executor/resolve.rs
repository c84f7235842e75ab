use crate::catalog::Catalog;
use crate::error::Error;
use crate::managers::PackageManager;

/// Packages to act on for one command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// Canonical catalog name of the language
    pub language: String,
    pub manager: PackageManager,
    /// Packages in install order
    pub packages: Vec<String>,
}

/// Maps a language name to packages for a manager
pub struct PackageResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> PackageResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn resolve(
        &self,
        language: &str,
        manager: PackageManager,
    ) -> Result<ResolvedRequest, Error> {
        let entry = self
            .catalog
            .lookup(language)
            .ok_or_else(|| Error::UnsupportedLanguage(language.to_string()))?;

        let packages = entry.packages_for(manager).ok_or_else(|| {
            Error::UnsupportedManagerForLanguage {
                language: entry.name.clone(),
                manager,
            }
        })?;

        log::debug!(
            "Resolved {} via {}: {}",
            entry.name,
            manager,
            packages.join(", ")
        );

        Ok(ResolvedRequest {
            language: entry.name.clone(),
            manager,
            packages: packages.to_vec(),
        })
    }
}
