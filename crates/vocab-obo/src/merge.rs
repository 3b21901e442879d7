//! Frame merging: folding every `[Term]` frame sharing an identifier into one
//! accumulator.
//!
//! `id`, `name` and `def` are single-valued: the first non-blank value seen
//! for an identifier wins and later frames cannot overwrite it. Every other
//! tag is multi-valued: values from all frames are appended, duplicates
//! dropped, first-seen order kept. Distinct `is_a` values become the term's
//! parents.

use std::collections::HashMap;

use crate::frame::Frame;
use crate::term::{ANCESTORS, DEF, ID, IS_A, NAME, PropertyMap, VocabularyTermSource};

/// Working record for one identifier while the source is being read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermAccumulator {
    id: String,
    name: Option<String>,
    def: Option<String>,
    parents: Vec<String>,
    properties: PropertyMap,
    frames: usize,
}

impl TermAccumulator {
    fn new(id: &str) -> Self {
        let mut properties = PropertyMap::new();
        properties.insert(ID, id);
        Self {
            id: id.to_string(),
            name: None,
            def: None,
            parents: Vec::new(),
            properties,
            frames: 0,
        }
    }

    /// The identifier shared by every merged frame.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Direct parents collected so far, in first-seen order.
    #[must_use]
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// Number of frames merged into this accumulator.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    fn absorb(&mut self, frame: &Frame) {
        self.frames += 1;
        for (tag, value) in &frame.tags {
            if value.trim().is_empty() {
                continue;
            }
            match tag.as_str() {
                // Resolved from the frame before absorbing; further ids are ignored.
                ID => {}
                NAME => Self::keep_first(&mut self.name, &mut self.properties, NAME, value),
                DEF => Self::keep_first(&mut self.def, &mut self.properties, DEF, value),
                IS_A => {
                    if self.properties.insert(IS_A, value.as_str()) {
                        self.parents.push(value.clone());
                    }
                }
                _ => {
                    self.properties.insert(tag, value.as_str());
                }
            }
        }
    }

    fn keep_first(slot: &mut Option<String>, properties: &mut PropertyMap, tag: &str, value: &str) {
        if slot.is_none() {
            *slot = Some(value.to_string());
            properties.insert(tag, value);
        }
    }

    /// Converts the accumulator into a finished term with the given ancestors.
    ///
    /// The synthetic `ancestors` property is only added to terms that have
    /// parents.
    #[must_use]
    pub fn finish(self, ancestors: Vec<String>) -> VocabularyTermSource {
        let mut properties = self.properties;
        if !self.parents.is_empty() {
            properties.set(ANCESTORS, ancestors.clone());
        }
        VocabularyTermSource::new(
            self.id,
            self.name,
            self.def,
            self.parents,
            ancestors,
            properties,
        )
    }
}

/// Result of offering a frame to a [`TermTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The frame introduced a new identifier.
    Created,
    /// The frame was merged into an identifier seen before.
    Merged,
    /// The frame had no non-blank `id` and was discarded.
    MissingId,
}

/// All accumulators of one parse, keyed by identifier, in order of first
/// appearance.
#[derive(Debug, Clone, Default)]
pub struct TermTable {
    terms: Vec<TermAccumulator>,
    index: HashMap<String, usize>,
}

impl TermTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a term frame into the accumulator for its `id`.
    pub fn merge(&mut self, frame: &Frame) -> MergeOutcome {
        let Some(id) = frame.first_non_blank(ID) else {
            return MergeOutcome::MissingId;
        };

        let (position, outcome) = match self.index.get(id).copied() {
            Some(position) => (position, MergeOutcome::Merged),
            None => {
                self.terms.push(TermAccumulator::new(id));
                self.index.insert(id.to_string(), self.terms.len() - 1);
                (self.terms.len() - 1, MergeOutcome::Created)
            }
        };
        self.terms[position].absorb(frame);
        outcome
    }

    /// Looks up the accumulator for `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TermAccumulator> {
        self.index.get(id).map(|&position| &self.terms[position])
    }

    /// Returns `true` if `id` was defined by a term frame.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of distinct identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if no term has been merged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the accumulators in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &TermAccumulator> {
        self.terms.iter()
    }

    /// Consumes the table, yielding accumulators in order of first appearance.
    #[must_use]
    pub fn into_terms(self) -> Vec<TermAccumulator> {
        self.terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frame(tags: &[(&str, &str)]) -> Frame {
        let mut frame = Frame::new("Term", 1);
        frame.tags = tags
            .iter()
            .map(|(tag, value)| ((*tag).to_string(), (*value).to_string()))
            .collect();
        frame
    }

    #[test]
    fn frame_without_id_is_discarded() {
        let mut table = TermTable::new();
        let outcome = table.merge(&frame(&[("name", "Nameless"), ("alt_id", "TEST:MISSING_ID")]));
        assert_eq!(outcome, MergeOutcome::MissingId);
        assert!(table.is_empty());
    }

    #[test]
    fn blank_id_counts_as_missing() {
        let mut table = TermTable::new();
        assert_eq!(table.merge(&frame(&[("id", "  ")])), MergeOutcome::MissingId);
    }

    #[test]
    fn frames_with_same_id_are_merged() {
        let mut table = TermTable::new();
        let first = frame(&[
            ("id", "TEST:COMBINED"),
            ("name", "Combined term"),
            ("def", "First definition"),
        ]);
        let other = frame(&[("id", "TEST:OTHER")]);
        let second = frame(&[
            ("id", "TEST:COMBINED"),
            ("name", "Ignored name"),
            ("synonym", "Split"),
            ("synonym", "Recomposed"),
            ("synonym", "Split"),
            ("is_a", "TEST:ROOT"),
        ]);

        assert_eq!(table.merge(&first), MergeOutcome::Created);
        assert_eq!(table.merge(&other), MergeOutcome::Created);
        assert_eq!(table.merge(&second), MergeOutcome::Merged);

        let term = table.get("TEST:COMBINED").unwrap();
        assert_eq!(term.frames(), 2);
        assert_eq!(term.parents(), ["TEST:ROOT"]);
        assert_eq!(term.properties.get("name").unwrap(), ["Combined term"]);
        assert_eq!(term.properties.get("def").unwrap(), ["First definition"]);
        assert_eq!(term.properties.get("synonym").unwrap(), ["Split", "Recomposed"]);
    }

    #[test]
    fn first_non_blank_single_value_wins() {
        let mut table = TermTable::new();
        table.merge(&frame(&[("id", "A"), ("name", "")]));
        table.merge(&frame(&[("id", "A"), ("name", "Alpha"), ("name", "Other")]));

        let term = table.into_terms().remove(0).finish(Vec::new());
        assert_eq!(term.label(), "Alpha");
        assert_eq!(term.all_properties().get("name").unwrap(), ["Alpha"]);
    }

    #[test]
    fn parents_are_deduplicated_in_first_seen_order() {
        let mut table = TermTable::new();
        table.merge(&frame(&[("id", "A"), ("is_a", "P2"), ("is_a", "P1")]));
        table.merge(&frame(&[("id", "A"), ("is_a", "P1"), ("is_a", "P3")]));
        assert_eq!(table.get("A").unwrap().parents(), ["P2", "P1", "P3"]);
    }

    #[test]
    fn table_keeps_first_appearance_order() {
        let mut table = TermTable::new();
        for id in ["C", "A", "B", "A"] {
            table.merge(&frame(&[("id", id)]));
        }
        let ids: Vec<_> = table.iter().map(TermAccumulator::id).collect();
        assert_eq!(ids, ["C", "A", "B"]);
        assert_eq!(table.len(), 3);
        assert!(table.contains("B"));
        assert!(!table.contains("D"));
    }

    #[test]
    fn finish_adds_ancestors_only_with_parents() {
        let mut table = TermTable::new();
        table.merge(&frame(&[("id", "A"), ("name", "Alpha")]));
        table.merge(&frame(&[("id", "B"), ("is_a", "A"), ("name", "Beta")]));
        let mut terms = table.into_terms().into_iter();

        let root = terms.next().unwrap().finish(Vec::new());
        assert_eq!(root.all_properties().len(), 2);
        assert!(!root.all_properties().contains_key("ancestors"));

        let child = terms.next().unwrap().finish(vec!["A".to_string()]);
        assert_eq!(child.all_properties().len(), 4);
        assert_eq!(child.all_properties().get("ancestors").unwrap(), ["A"]);
        assert_eq!(
            child.all_properties().keys().collect::<Vec<_>>(),
            ["id", "is_a", "name", "ancestors"]
        );
    }
}
