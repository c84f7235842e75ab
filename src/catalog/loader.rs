use super::{Catalog, CatalogFile};
use crate::error::Error;

const EMBEDDED_CATALOG: &str = include_str!("catalog.toml");

/// Parse a catalog from TOML text
pub fn parse_catalog(content: &str) -> Result<Catalog, Error> {
    let file: CatalogFile = toml::from_str(content)?;
    Catalog::try_from(file)
}

/// Load the catalog compiled into the binary
pub fn load_embedded_catalog() -> Result<Catalog, Error> {
    parse_catalog(EMBEDDED_CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::managers::PackageManager;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = load_embedded_catalog().unwrap();
        assert_eq!(
            catalog.names(),
            vec![
                "C++", "Rust", "Go", "Java", "C#", "Python", "Node.js", "Ruby", "PHP", "Perl",
                "Swift", "Kotlin", "Dart"
            ]
        );
    }

    #[test]
    fn embedded_catalog_keeps_package_order() {
        let catalog = load_embedded_catalog().unwrap();
        let cpp = catalog.lookup("c++").unwrap();
        assert_eq!(
            cpp.packages_for(PackageManager::Apt).unwrap(),
            ["build-essential", "cmake", "gdb"]
        );
    }

    #[test]
    fn swift_has_no_choco_packages() {
        let catalog = load_embedded_catalog().unwrap();
        let swift = catalog.lookup("swift").unwrap();
        assert!(swift.packages.contains_key(&PackageManager::Choco));
        assert!(swift.packages_for(PackageManager::Choco).is_none());
    }

    #[test]
    fn parses_minimal_catalog() {
        let catalog = parse_catalog(
            r#"
            [[language]]
            name = "Go"
            [language.packages]
            apt = ["golang"]
            "#,
        )
        .unwrap();
        let go = catalog.lookup("GO").unwrap();
        assert_eq!(
            go.packages_for(PackageManager::Apt),
            Some(&["golang".to_string()][..])
        );
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(matches!(
            parse_catalog("[[language]]\nname = 3\n"),
            Err(Error::CatalogParse(_))
        ));
    }

    #[test]
    fn duplicate_languages_fail_to_load() {
        let err = parse_catalog(
            r#"
            [[language]]
            name = "Go"
            [[language]]
            name = "go"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateLanguage(_)));
    }
}
