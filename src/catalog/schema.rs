use crate::error::Error;
use crate::managers::PackageManager;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

/// On-disk shape of the catalog
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub language: Vec<LanguageSection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageSection {
    pub name: String,

    /// Package lists keyed by manager identifier
    #[serde(default)]
    pub packages: BTreeMap<String, Vec<String>>,
}

/// One supported language and the packages that provide it per manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub packages: BTreeMap<PackageManager, Vec<String>>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            packages: BTreeMap::new(),
        }
    }

    #[cfg(test)]
    pub fn with_packages(mut self, manager: PackageManager, packages: &[&str]) -> Self {
        self.packages
            .insert(manager, packages.iter().map(|p| p.to_string()).collect());
        self
    }

    /// Packages for a manager; `None` when absent or empty
    pub fn packages_for(&self, manager: PackageManager) -> Option<&[String]> {
        self.packages
            .get(&manager)
            .map(Vec::as_slice)
            .filter(|pkgs| !pkgs.is_empty())
    }

    /// Package checked to decide whether the language is installed
    pub fn representative(&self, manager: PackageManager) -> Option<&str> {
        self.packages_for(manager)
            .and_then(|pkgs| pkgs.first())
            .map(String::as_str)
    }
}

/// Immutable set of languages, fixed at startup
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog; names must be unique ignoring ASCII case
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, Error> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.to_ascii_lowercase()) {
                return Err(Error::DuplicateLanguage(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Exact, ASCII case-insensitive match on the language name
    pub fn lookup(&self, language: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(language))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = Error;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        let mut entries = Vec::with_capacity(file.language.len());

        for section in file.language {
            let mut entry = CatalogEntry::new(section.name);
            for (key, packages) in section.packages {
                let manager: PackageManager = key.parse()?;
                entry.packages.insert(manager, packages);
            }
            entries.push(entry);
        }

        Catalog::new(entries)
    }
}
