//! Ancestor closure over the merged term table using petgraph.
//!
//! A term's ancestors are its parents, each immediately followed by that
//! parent's own ancestors, skipping anything already listed. Parents that are
//! not defined in the table are kept as leaves. A term never lists itself,
//! even when `is_a` data is cyclic.
//!
//! The `is_a` graph is split into strongly connected components once. They
//! are closed parents first, so a component only ever walks its own members
//! and reuses the finished closures of the components below it. Every term
//! on a cycle gets the same ancestor set, the rest of its component plus
//! everything below, at no more than one walk of the component per member.

use std::collections::{HashMap, HashSet};

use petgraph::algo;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::merge::TermTable;

/// The ancestor closure of one term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Ancestor identifiers in resolution order.
    pub ancestors: Vec<String>,
    /// Direct parents that are not defined in the table.
    pub unknown_parents: Vec<String>,
    /// Whether the term's `is_a` chain leads back to itself.
    pub cyclic: bool,
}

/// Resolver computing every ancestor closure of a [`TermTable`] up front.
///
/// # Examples
///
/// ```
/// use vocab_obo::ancestors::AncestorResolver;
/// use vocab_obo::frame::Frame;
/// use vocab_obo::merge::TermTable;
///
/// let mut table = TermTable::new();
/// for (id, parent) in [("A", None), ("B", Some("A")), ("C", Some("B"))] {
///     let mut frame = Frame::new("Term", 1);
///     frame.tags.push(("id".into(), id.into()));
///     if let Some(parent) = parent {
///         frame.tags.push(("is_a".into(), parent.into()));
///     }
///     table.merge(&frame);
/// }
///
/// let resolver = AncestorResolver::new(&table);
/// assert_eq!(resolver.resolve("C").ancestors, vec!["B", "A"]);
/// ```
pub struct AncestorResolver<'t> {
    table: &'t TermTable,
    /// Edges point from a term to each of its parents.
    graph: DiGraph<&'t str, ()>,
    nodes: HashMap<&'t str, NodeIndex>,
    /// Parents per node, in `is_a` order.
    parents: Vec<Vec<NodeIndex>>,
    closures: Vec<Vec<NodeIndex>>,
    cyclic: Vec<bool>,
}

impl<'t> AncestorResolver<'t> {
    /// Builds the `is_a` graph of `table` and closes every term in it.
    #[must_use]
    pub fn new(table: &'t TermTable) -> Self {
        let mut graph = DiGraph::with_capacity(table.len(), table.len());
        let mut nodes = HashMap::with_capacity(table.len());
        for term in table.iter() {
            let child = intern(&mut graph, &mut nodes, term.id());
            for parent in term.parents() {
                let parent = intern(&mut graph, &mut nodes, parent);
                graph.add_edge(child, parent, ());
            }
        }

        // petgraph yields neighbors newest first.
        let parents = graph
            .node_indices()
            .map(|node| {
                let mut parents: Vec<NodeIndex> = graph.neighbors(node).collect();
                parents.reverse();
                parents
            })
            .collect();

        let count = graph.node_count();
        let mut resolver = Self {
            table,
            graph,
            nodes,
            parents,
            closures: vec![Vec::new(); count],
            cyclic: vec![false; count],
        };
        resolver.close_components();
        resolver
    }

    /// Resolves the ancestors of `id`.
    ///
    /// An identifier missing from the table has no ancestors.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Resolution {
        let (Some(term), Some(&node)) = (self.table.get(id), self.nodes.get(id)) else {
            return Resolution::default();
        };

        let unknown_parents = term
            .parents()
            .iter()
            .filter(|parent| !self.table.contains(parent))
            .cloned()
            .collect();

        Resolution {
            ancestors: self.closures[node.index()]
                .iter()
                .map(|&ancestor| self.graph[ancestor].to_string())
                .collect(),
            unknown_parents,
            cyclic: self.cyclic[node.index()],
        }
    }

    /// Closes every component, parents first.
    ///
    /// `tarjan_scc` lists components in reverse topological order, and edges
    /// run from child to parent, so each component comes after every
    /// component it reaches.
    fn close_components(&mut self) {
        let components = algo::tarjan_scc(&self.graph);
        let mut component = vec![0; self.graph.node_count()];
        for (number, members) in components.iter().enumerate() {
            for node in members {
                component[node.index()] = number;
            }
        }

        for members in &components {
            let looped = members.len() > 1
                || members
                    .first()
                    .is_some_and(|&node| self.graph.contains_edge(node, node));
            for &node in members {
                let closure = self.walk(node, &component);
                self.cyclic[node.index()] = looped;
                self.closures[node.index()] = closure;
            }
        }
    }

    /// Preorder walk over the parents of `start`.
    ///
    /// Members of `start`'s own component are walked; any other parent is
    /// already closed and its closure is spliced in whole.
    fn walk(&self, start: NodeIndex, component: &[usize]) -> Vec<NodeIndex> {
        let home = component[start.index()];
        let mut seen = HashSet::from([start]);
        let mut closure = Vec::new();
        let mut stack = vec![(start, 0)];

        while let Some((node, next)) = stack.pop() {
            let Some(&parent) = self.parents[node.index()].get(next) else {
                continue;
            };
            stack.push((node, next + 1));
            if !seen.insert(parent) {
                continue;
            }
            closure.push(parent);

            if component[parent.index()] == home {
                stack.push((parent, 0));
            } else {
                for &ancestor in &self.closures[parent.index()] {
                    if seen.insert(ancestor) {
                        closure.push(ancestor);
                    }
                }
            }
        }
        closure
    }
}

fn intern<'t>(
    graph: &mut DiGraph<&'t str, ()>,
    nodes: &mut HashMap<&'t str, NodeIndex>,
    id: &'t str,
) -> NodeIndex {
    *nodes.entry(id).or_insert_with(|| graph.add_node(id))
}
