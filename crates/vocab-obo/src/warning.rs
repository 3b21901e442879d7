//! Warning types for non-fatal problems found while parsing OBO sources.
//!
//! OBO files in the wild are frequently broken in small ways: a tag line
//! without a colon, a `[Term]` frame that never states its `id`, an `is_a`
//! pointing at a term that is not defined anywhere. None of these stop an
//! import. Each is recorded as a [`Warning`] in a [`WarningCollector`] and
//! handed back to the caller in the parse report.
//!
//! # Examples
//!
//! ```
//! use vocab_obo::warning::{Warning, WarningCollector};
//!
//! let mut collector = WarningCollector::new();
//!
//! collector.add(Warning::MalformedLine {
//!     line_number: 5,
//!     content: "no separator here".to_string(),
//! });
//! collector.add(Warning::MissingId { line_number: 12 });
//!
//! let warnings = collector.into_warnings();
//! assert_eq!(warnings.len(), 2);
//! ```

use serde::Serialize;

/// A non-fatal problem found while parsing an OBO source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A line inside a frame had no unescaped `:` separating tag and value.
    ///
    /// The line is skipped and parsing continues with the next one.
    MalformedLine {
        /// The 1-based line number where the line started.
        line_number: usize,
        /// The offending line.
        content: String,
    },

    /// A `[Term]` frame ended without a non-blank `id` tag.
    ///
    /// The whole frame is discarded.
    MissingId {
        /// The 1-based line number of the frame marker.
        line_number: usize,
    },

    /// A term names a parent that is not defined as a term in the source.
    ///
    /// The parent is kept as a leaf ancestor.
    UnknownParent {
        /// The term declaring the parent.
        term_id: String,
        /// The undefined parent identifier.
        parent_id: String,
    },

    /// A term's `is_a` chain leads back to the term itself.
    ///
    /// The term is left out of its own ancestor set.
    CyclicAncestry {
        /// The term found on a cycle.
        term_id: String,
    },
}

impl Warning {
    /// Returns the line number associated with this warning, if any.
    ///
    /// Warnings raised while resolving ancestors concern whole terms rather
    /// than single lines and return `None`.
    #[must_use]
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::MalformedLine { line_number, .. } | Self::MissingId { line_number } => {
                Some(*line_number)
            }
            Self::UnknownParent { .. } | Self::CyclicAncestry { .. } => None,
        }
    }

    /// Returns a human-readable description of the warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use vocab_obo::warning::Warning;
    ///
    /// let warning = Warning::UnknownParent {
    ///     term_id: "TEST:CHILD".to_string(),
    ///     parent_id: "TEST:GONE".to_string(),
    /// };
    /// let desc = warning.description();
    /// assert!(desc.contains("TEST:CHILD"));
    /// assert!(desc.contains("TEST:GONE"));
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::MalformedLine {
                line_number,
                content,
            } => format!("line {line_number}: no tag/value separator: {content}"),
            Self::MissingId { line_number } => {
                format!("line {line_number}: term frame without an id was discarded")
            }
            Self::UnknownParent { term_id, parent_id } => {
                format!("term {term_id}: parent {parent_id} is not defined")
            }
            Self::CyclicAncestry { term_id } => {
                format!("term {term_id}: is_a chain leads back to the term itself")
            }
        }
    }

    /// Returns a static string identifying the warning kind.
    ///
    /// Useful for grouping warnings without matching on the variants.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedLine { .. } => "malformed_line",
            Self::MissingId { .. } => "missing_id",
            Self::UnknownParent { .. } => "unknown_parent",
            Self::CyclicAncestry { .. } => "cyclic_ancestry",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}

/// Warnings raised during one parse, in the order they were found.
///
/// A parse runs on a single thread and owns its collector; the frame
/// tokenizer keeps its own and hands its warnings over after every frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarningCollector {
    warnings: Vec<Warning>,
}

impl WarningCollector {
    /// Creates a new empty `WarningCollector`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning to the collector.
    pub fn add(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// Appends every warning taken from another collector.
    pub fn append(&mut self, other: &mut Self) {
        self.warnings.append(&mut other.warnings);
    }

    /// Returns the number of warnings collected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Returns `true` if no warnings have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Returns the collected warnings.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Consumes the collector and returns all collected warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
