//! Destinations for parsed terms.

use crate::term::VocabularyTermSource;

/// Receives finished terms, one call per distinct identifier.
///
/// Closures taking a [`VocabularyTermSource`] are sinks, and so is a `Vec`,
/// which simply collects the terms.
///
/// # Examples
///
/// ```
/// use vocab_obo::{VocabularyTermSource, parse_reader};
///
/// let mut labels: Vec<String> = Vec::new();
/// let mut sink = |term: VocabularyTermSource| labels.push(term.label().to_string());
/// parse_reader("[Term]\nid: A\n[Term]\nid: B\nname: Beta\n".as_bytes(), &mut sink)?;
///
/// assert_eq!(labels, ["A", "Beta"]);
/// # Ok::<(), vocab_obo::Error>(())
/// ```
pub trait TermSink {
    /// Accepts one finished term.
    fn accept(&mut self, term: VocabularyTermSource);
}

impl<F> TermSink for F
where
    F: FnMut(VocabularyTermSource),
{
    fn accept(&mut self, term: VocabularyTermSource) {
        self(term);
    }
}

impl TermSink for Vec<VocabularyTermSource> {
    fn accept(&mut self, term: VocabularyTermSource) {
        self.push(term);
    }
}
