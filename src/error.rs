use crate::managers::PackageManager;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No supported package manager found.\nPlease install one of: {supported}.")]
    NoPackageManagerDetected { supported: String },

    #[error("unsupported language '{0}'")]
    UnsupportedLanguage(String),

    #[error("package manager '{manager}' does not support language '{language}'")]
    UnsupportedManagerForLanguage {
        language: String,
        manager: PackageManager,
    },

    #[error("Unsupported package manager: {0}")]
    UnsupportedManager(String),

    #[error("duplicate language in catalog: '{0}'")]
    DuplicateLanguage(String),

    #[error("invalid catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),
}

impl Error {
    pub fn no_package_manager() -> Self {
        let supported = PackageManager::all()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Error::NoPackageManagerDetected { supported }
    }
}
