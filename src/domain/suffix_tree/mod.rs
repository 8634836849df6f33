//! Suffix tree over the original sequence
//!
//! The tree is an immutable index built once per diff run. Nodes live in an arena and
//! are addressed by [`NodeId`]; every node owns a map from the first element of each
//! outgoing edge to that edge, so a `(parent, first element)` pair identifies at most
//! one edge.
//!
//! - `builder`: Ukkonen's online construction
//! - `edge`: node/edge identifiers and edge labels
//! - `matcher`: a single-use cursor that walks the tree one element at a time
//!
//! No terminator is appended to the sequence, so the result is an *implicit* suffix
//! tree: every suffix of the original is spelled by a path from the root, but a suffix
//! may end in the middle of an edge. That is all the matcher needs, since it only
//! asks whether a run of elements occurs contiguously somewhere in the original.

mod builder;
pub mod edge;
pub mod matcher;

use crate::domain::suffix_tree::edge::{Edge, EdgeId, NodeId};
use crate::domain::suffix_tree::matcher::{Matched, Matcher};
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug)]
struct Node<'t, T> {
    children: HashMap<&'t T, EdgeId>,
}

impl<T> Default for Node<'_, T> {
    fn default() -> Self {
        Node {
            children: HashMap::new(),
        }
    }
}

#[derive(Debug)]
pub struct SuffixTree<'t, T> {
    elements: &'t [T],
    nodes: Vec<Node<'t, T>>,
    edges: Vec<Edge>,
}

impl<'t, T: Eq + Hash> SuffixTree<'t, T> {
    /// Builds the suffix tree of `elements`. Construction cannot fail; an empty
    /// sequence yields a tree with only a root.
    pub fn new(elements: &'t [T]) -> Self {
        let tree = builder::Builder::new(elements).build();

        tracing::debug!(
            elements = tree.len(),
            nodes = tree.node_count(),
            edges = tree.edge_count(),
            "built suffix tree"
        );

        tree
    }

    /// Creates a fresh matcher positioned at the root.
    pub fn matcher(&self) -> Matcher<'_, 't, T> {
        Matcher::new(self)
    }

    /// Looks up the edge leaving `node` whose label starts with `element`.
    pub fn find_edge(&self, node: NodeId, element: &T) -> Option<EdgeId> {
        self.nodes
            .get(node.index())
            .and_then(|node| node.children.get(element))
            .copied()
    }

    /// Checks whether `probe` occurs as a contiguous run somewhere in the original.
    pub fn contains(&self, probe: &[T]) -> bool {
        let mut matcher = self.matcher();
        probe
            .iter()
            .all(|element| matches!(matcher.match_next(element), Ok(Matched::Yes)))
    }

    fn add_node(&mut self) -> NodeId {
        self.nodes.push(Node::default());
        NodeId::from_index(self.nodes.len() - 1)
    }

    fn insert_edge(&mut self, edge: Edge) -> EdgeId {
        let elements = self.elements;
        let id = EdgeId::from_index(self.edges.len());
        self.nodes[edge.parent().index()]
            .children
            .insert(&elements[edge.lo()], id);
        self.edges.push(edge);
        id
    }

    /// Hangs an open leaf edge `[lo, len-1]` below `parent`.
    fn add_leaf(&mut self, parent: NodeId, lo: usize) -> EdgeId {
        let leaf = self.add_node();
        let hi = self.elements.len() - 1;
        self.insert_edge(Edge::new(parent, leaf, lo, hi))
    }

    /// Splits `edge_id` after its first `at` elements and returns the new branch node.
    ///
    /// The parent keeps an edge keyed by the same first element, now ending at the
    /// branch; the remainder of the old edge continues from the branch to the old child.
    fn split_edge(&mut self, edge_id: EdgeId, at: usize) -> NodeId {
        let elements = self.elements;
        let (parent, lo) = {
            let edge = &self.edges[edge_id.index()];
            debug_assert!(at > 0 && at < edge.len());
            (edge.parent(), edge.lo())
        };

        let branch = self.add_node();
        self.insert_edge(Edge::new(parent, branch, lo, lo + at - 1));

        self.edges[edge_id.index()].reattach(branch, lo + at);
        self.nodes[branch.index()]
            .children
            .insert(&elements[lo + at], edge_id);

        branch
    }
}

impl<'t, T> SuffixTree<'t, T> {
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn elements(&self) -> &'t [T] {
        self.elements
    }

    pub fn element(&self, index: usize) -> Option<&'t T> {
        self.elements.get(index)
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId::from_index(index), edge))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
