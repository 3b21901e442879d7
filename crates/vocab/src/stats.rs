//! Summary statistics over the terms of one vocabulary source.

use serde::Serialize;
use vocab_obo::{ParseReport, VocabularyTermSource, Warning};

/// Counts gathered while terms stream past, completed from the parse report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TermStats {
    /// Distinct terms emitted.
    pub terms: usize,
    /// Terms without parents.
    pub roots: usize,
    /// Terms carrying a definition.
    pub with_definition: usize,
    /// Largest ancestor set of any term.
    pub max_ancestors: usize,
    /// Term with the largest ancestor set, first one on ties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepest_term: Option<String>,
    /// Parent references naming undefined terms.
    pub unknown_parents: usize,
    /// Terms whose `is_a` chain leads back to themselves.
    pub cyclic_terms: usize,
    /// Frames read, of any type.
    pub frames: usize,
    /// Frames that were not `[Term]` frames.
    pub skipped_frames: usize,
    /// All warnings raised by the parse.
    pub warnings: usize,
}

impl TermStats {
    /// Accounts for one emitted term.
    pub fn record(&mut self, term: &VocabularyTermSource) {
        self.terms += 1;
        if term.is_root() {
            self.roots += 1;
        }
        if term.description().is_some() {
            self.with_definition += 1;
        }
        if term.ancestors().len() > self.max_ancestors {
            self.max_ancestors = term.ancestors().len();
            self.deepest_term = Some(term.id().to_string());
        }
    }

    /// Adds the counts only the parse report knows about.
    pub fn complete(&mut self, report: &ParseReport) {
        self.frames = report.frames;
        self.skipped_frames = report.skipped_frames;
        self.warnings = report.warnings.len();
        for warning in &report.warnings {
            match warning {
                Warning::UnknownParent { .. } => self.unknown_parents += 1,
                Warning::CyclicAncestry { .. } => self.cyclic_terms += 1,
                Warning::MalformedLine { .. } | Warning::MissingId { .. } => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn stats_of(source: &str) -> TermStats {
        let mut stats = TermStats::default();
        let mut sink = |term: VocabularyTermSource| stats.record(&term);
        let report = vocab_obo::parse_reader(source.as_bytes(), &mut sink).unwrap();
        stats.complete(&report);
        stats
    }

    #[test]
    fn counts_terms_roots_and_depth() {
        let stats = stats_of(indoc! {r#"
            [Term]
            id: A
            def: "The root."
            [Term]
            id: B
            is_a: A
            [Term]
            id: C
            is_a: B
            is_a: GONE
            [Typedef]
            id: part_of
        "#});

        assert_eq!(
            stats,
            TermStats {
                terms: 3,
                roots: 1,
                with_definition: 1,
                max_ancestors: 3,
                deepest_term: Some("C".to_string()),
                unknown_parents: 1,
                cyclic_terms: 0,
                frames: 4,
                skipped_frames: 1,
                warnings: 1,
            }
        );
    }

    #[test]
    fn cycles_are_counted_per_term() {
        let stats = stats_of("[Term]\nid: A\nis_a: B\n[Term]\nid: B\nis_a: A\n");
        assert_eq!(stats.cyclic_terms, 2);
        assert_eq!(stats.roots, 0);
    }

    #[test]
    fn empty_source_has_no_deepest_term() {
        let stats = stats_of("");
        assert_eq!(stats, TermStats::default());
        assert!(stats.deepest_term.is_none());
    }
}
