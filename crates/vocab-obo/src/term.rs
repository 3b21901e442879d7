//! Finished vocabulary terms and their property maps.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Tag holding a term's identifier.
pub const ID: &str = "id";

/// Tag holding a term's human readable label.
pub const NAME: &str = "name";

/// Tag holding a term's definition.
pub const DEF: &str = "def";

/// Tag naming a direct parent of a term.
pub const IS_A: &str = "is_a";

/// Synthetic property holding a term's ancestor closure.
pub const ANCESTORS: &str = "ancestors";

/// An insertion-ordered multimap from tag names to deduplicated values.
///
/// Tags keep the order in which they were first seen, and so do the values
/// of each tag. Adding a value already present under the same tag is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, Vec<String>)>,
}

impl PropertyMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` under `tag` unless it is already there.
    ///
    /// Returns `true` if the value was added.
    pub fn insert(&mut self, tag: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        let values = self.values_mut(tag);
        if values.contains(&value) {
            return false;
        }
        values.push(value);
        true
    }

    /// Replaces all values stored under `tag`.
    pub fn set(&mut self, tag: &str, values: Vec<String>) {
        *self.values_mut(tag) = values;
    }

    /// Returns the values stored under `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == tag)
            .map(|(_, values)| values.as_slice())
    }

    /// Returns the first value stored under `tag`.
    #[must_use]
    pub fn first(&self, tag: &str) -> Option<&str> {
        self.get(tag)?.first().map(String::as_str)
    }

    /// Returns `true` if `tag` has at least one value.
    #[must_use]
    pub fn contains_key(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Returns the number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the tags in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over `(tag, values)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    fn values_mut(&mut self, tag: &str) -> &mut Vec<String> {
        let index = match self.entries.iter().position(|(key, _)| key == tag) {
            Some(index) => index,
            None => {
                self.entries.push((tag.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

/// One finished vocabulary term, as handed to a [`TermSink`](crate::sink::TermSink).
///
/// A term combines every `[Term]` frame of the source sharing its identifier.
/// The dedicated fields are hoisted out of [`all_properties`](Self::all_properties),
/// which still lists every tag, including `id`, `name`, `def` and `is_a`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct VocabularyTermSource {
    id: String,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    parents: Vec<String>,
    ancestors: Vec<String>,
    all_properties: PropertyMap,
}

impl VocabularyTermSource {
    pub(crate) fn new(
        id: String,
        label: Option<String>,
        description: Option<String>,
        parents: Vec<String>,
        ancestors: Vec<String>,
        all_properties: PropertyMap,
    ) -> Self {
        Self {
            label: label.unwrap_or_else(|| id.clone()),
            id,
            description,
            parents,
            ancestors,
            all_properties,
        }
    }

    /// The term identifier, never blank.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The term's `name`, or its identifier when it has none.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The term's `def`, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Direct parents, in first-seen order.
    #[must_use]
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// Transitive parent closure, never containing the term's own id.
    #[must_use]
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// Every tag of the term with its values.
    #[must_use]
    pub fn all_properties(&self) -> &PropertyMap {
        &self.all_properties
    }

    /// Returns `true` if the term has no parents.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_deduplicates_and_keeps_order() {
        let mut map = PropertyMap::new();
        assert!(map.insert("synonym", "b"));
        assert!(map.insert("synonym", "a"));
        assert!(!map.insert("synonym", "b"));
        assert_eq!(map.get("synonym").unwrap(), ["b", "a"]);
    }

    #[test]
    fn tags_keep_first_seen_order() {
        let mut map = PropertyMap::new();
        map.insert("id", "A");
        map.insert("name", "Alpha");
        map.insert("id", "B");
        assert_eq!(map.keys().collect::<Vec<_>>(), ["id", "name"]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn set_replaces_values() {
        let mut map = PropertyMap::new();
        map.insert("ancestors", "X");
        map.set("ancestors", vec!["A".to_string(), "B".to_string()]);
        assert_eq!(map.get("ancestors").unwrap(), ["A", "B"]);
    }

    #[test]
    fn missing_tag_lookups() {
        let map = PropertyMap::new();
        assert!(map.is_empty());
        assert!(map.get("id").is_none());
        assert!(map.first("id").is_none());
        assert!(!map.contains_key("id"));
    }

    #[test]
    fn label_defaults_to_id() {
        let term = VocabularyTermSource::new(
            "TEST:EMPTY".to_string(),
            None,
            None,
            Vec::new(),
            Vec::new(),
            PropertyMap::new(),
        );
        assert_eq!(term.label(), "TEST:EMPTY");
        assert!(term.description().is_none());
        assert!(term.is_root());
    }

    #[test]
    fn serializes_properties_as_ordered_object() {
        let mut properties = PropertyMap::new();
        properties.insert("id", "B");
        properties.insert("is_a", "A");
        let term = VocabularyTermSource::new(
            "B".to_string(),
            Some("Beta".to_string()),
            None,
            vec!["A".to_string()],
            vec!["A".to_string()],
            properties,
        );

        let json = serde_json::to_string(&term).unwrap();
        assert_eq!(
            json,
            r#"{"id":"B","label":"Beta","parents":["A"],"ancestors":["A"],"all_properties":{"id":["B"],"is_a":["A"]}}"#
        );
    }
}
