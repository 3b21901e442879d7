//! Vocabulary description loading.
//!
//! A description is read from a YAML file such as:
//!
//! ```yaml
//! identifier: HP
//! name: Human Phenotype Ontology
//! version: "2024-04-26"
//! website: https://hpo.jax.org
//! ```
//!
//! Values given on the command line take precedence over the file.

use std::fs;
use std::path::Path;

use vocab_obo::VocabularyDescription;

use crate::error::{Error, Result};

/// Description values given directly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionOverrides {
    /// Replaces the vocabulary identifier.
    pub identifier: Option<String>,
    /// Replaces the vocabulary name.
    pub name: Option<String>,
    /// Replaces the vocabulary version.
    pub version: Option<String>,
}

/// Loads a description from a YAML file.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file cannot be read or is not a valid
/// description.
pub fn load(path: &Path) -> Result<VocabularyDescription> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
    let description: VocabularyDescription = serde_yaml::from_str(&content)
        .map_err(|e| Error::Config(format!("invalid description {}: {e}", path.display())))?;
    Ok(description)
}

/// Builds the description for one import.
///
/// Starts from the file at `path` if given, applies `overrides`, and fills
/// in the source and format from the import itself when the file leaves them
/// unset.
///
/// # Errors
///
/// Returns [`Error::Config`] if the description file cannot be loaded.
pub fn resolve(
    path: Option<&Path>,
    overrides: &DescriptionOverrides,
    source: &Path,
    format: &str,
) -> Result<VocabularyDescription> {
    let mut description = match path {
        Some(path) => load(path)?,
        None => VocabularyDescription::default(),
    };

    if let Some(identifier) = &overrides.identifier {
        description.identifier = Some(identifier.clone());
    }
    if let Some(name) = &overrides.name {
        description.name = Some(name.clone());
    }
    if let Some(version) = &overrides.version {
        description.version = Some(version.clone());
    }
    if description.source.is_none() {
        description.source = Some(source.display().to_string());
    }
    description.source_format = Some(
        description
            .source_format
            .as_deref()
            .unwrap_or(format)
            .to_uppercase(),
    );

    tracing::debug!(?description, "resolved vocabulary description");
    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_kebab_case_yaml() {
        let file = yaml_file(indoc! {"
            identifier: HP
            name: Human Phenotype Ontology
            source-format: obo
            website: https://hpo.jax.org
        "});

        let description = load(file.path()).unwrap();
        assert_eq!(description.identifier.as_deref(), Some("HP"));
        assert_eq!(description.name.as_deref(), Some("Human Phenotype Ontology"));
        assert_eq!(description.source_format.as_deref(), Some("obo"));
        assert_eq!(description.website.as_deref(), Some("https://hpo.jax.org"));
        assert_eq!(description.citation, None);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let result = load(Path::new("/nonexistent/description.yaml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn invalid_yaml_is_a_config_error() {
        let file = yaml_file("identifier: [unclosed\n");
        assert!(matches!(load(file.path()), Err(Error::Config(_))));
    }

    #[test]
    fn overrides_take_precedence() {
        let file = yaml_file("identifier: HP\nversion: '1'\n");
        let overrides = DescriptionOverrides {
            identifier: Some("HPO".to_string()),
            name: None,
            version: Some("2".to_string()),
        };

        let description =
            resolve(Some(file.path()), &overrides, Path::new("hp.obo"), "obo").unwrap();
        assert_eq!(description.identifier.as_deref(), Some("HPO"));
        assert_eq!(description.version.as_deref(), Some("2"));
        assert_eq!(description.name, None);
    }

    #[test]
    fn source_and_format_default_from_the_import() {
        let description = resolve(
            None,
            &DescriptionOverrides::default(),
            Path::new("data/hp.obo"),
            "obo",
        )
        .unwrap();

        assert_eq!(description.source.as_deref(), Some("data/hp.obo"));
        assert_eq!(description.source_format.as_deref(), Some("OBO"));
    }
}
