//! Vocabulary metadata supplied alongside a source file.
//!
//! None of this is read from the OBO file itself; the caller knows where the
//! file came from and describes it.

use serde::{Deserialize, Serialize};

/// Metadata describing the vocabulary being imported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VocabularyDescription {
    /// Short, unique identifier of the vocabulary, e.g. `NCIT`.
    pub identifier: Option<String>,
    /// Full name of the vocabulary.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Version of the vocabulary release.
    pub version: Option<String>,
    /// Where the source was obtained from.
    pub source: Option<String>,
    /// Format of the source, always upper case, e.g. `OBO`.
    pub source_format: Option<String>,
    /// Homepage of the vocabulary.
    pub website: Option<String>,
    /// How the vocabulary should be cited.
    pub citation: Option<String>,
}

impl VocabularyDescription {
    /// Starts building a description.
    #[must_use]
    pub fn builder() -> VocabularyDescriptionBuilder {
        VocabularyDescriptionBuilder::default()
    }
}

/// Builder for [`VocabularyDescription`].
///
/// # Examples
///
/// ```
/// use vocab_obo::description::VocabularyDescription;
///
/// let description = VocabularyDescription::builder()
///     .identifier("HP")
///     .name("Human Phenotype Ontology")
///     .source_format("obo")
///     .build();
/// assert_eq!(description.source_format.as_deref(), Some("OBO"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VocabularyDescriptionBuilder {
    desc: VocabularyDescription,
}

impl VocabularyDescriptionBuilder {
    /// Sets the identifier.
    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.desc.identifier = Some(identifier.into());
        self
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.desc.name = Some(name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.desc.description = Some(description.into());
        self
    }

    /// Sets the version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.desc.version = Some(version.into());
        self
    }

    /// Sets the source.
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.desc.source = Some(source.into());
        self
    }

    /// Sets the source format, normalized to upper case.
    #[must_use]
    pub fn source_format(mut self, source_format: impl AsRef<str>) -> Self {
        self.desc.source_format = Some(source_format.as_ref().to_uppercase());
        self
    }

    /// Sets the website.
    #[must_use]
    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.desc.website = Some(website.into());
        self
    }

    /// Sets the citation.
    #[must_use]
    pub fn citation(mut self, citation: impl Into<String>) -> Self {
        self.desc.citation = Some(citation.into());
        self
    }

    /// Finishes the description.
    #[must_use]
    pub fn build(self) -> VocabularyDescription {
        self.desc
    }
}
