use crate::domain::suffix_tree::SuffixTree;
use crate::domain::suffix_tree::edge::NodeId;
use std::collections::HashMap;
use std::hash::Hash;

/// Ukkonen's online construction.
///
/// Elements are appended one at a time. The active point (`active_node`,
/// `active_edge`, `active_len`) marks where the longest suffix that is still implicit
/// ends, and `remainder` counts how many suffixes are waiting to be made explicit.
/// Suffix links between branch nodes let each extension jump to the next shorter
/// suffix without walking down from the root again.
pub(super) struct Builder<'t, T> {
    tree: SuffixTree<'t, T>,
    active_node: NodeId,
    active_edge: usize,
    active_len: usize,
    remainder: usize,
    suffix_links: HashMap<NodeId, NodeId>,
    pending_link: Option<NodeId>,
}

impl<'t, T: Eq + Hash> Builder<'t, T> {
    pub(super) fn new(elements: &'t [T]) -> Self {
        let mut tree = SuffixTree {
            elements,
            nodes: Vec::with_capacity(2 * elements.len() + 1),
            edges: Vec::with_capacity(2 * elements.len()),
        };
        let root = tree.add_node();
        debug_assert!(root.is_root());

        Builder {
            tree,
            active_node: NodeId::ROOT,
            active_edge: 0,
            active_len: 0,
            remainder: 0,
            suffix_links: HashMap::new(),
            pending_link: None,
        }
    }

    pub(super) fn build(mut self) -> SuffixTree<'t, T> {
        for pos in 0..self.tree.elements.len() {
            self.extend(pos);
        }

        self.tree
    }

    fn extend(&mut self, pos: usize) {
        let elements = self.tree.elements;

        self.pending_link = None;
        self.remainder += 1;

        while self.remainder > 0 {
            if self.active_len == 0 {
                self.active_edge = pos;
            }

            match self
                .tree
                .find_edge(self.active_node, &elements[self.active_edge])
            {
                None => {
                    self.tree.add_leaf(self.active_node, pos);
                    self.link_pending_to(self.active_node);
                }
                Some(edge_id) => {
                    let edge = self.tree.edge(edge_id);
                    let edge_len = edge.len_at(pos);

                    // walk down when the active point lies past this edge
                    if self.active_len >= edge_len {
                        self.active_edge += edge_len;
                        self.active_len -= edge_len;
                        self.active_node = edge.child();
                        continue;
                    }

                    // already present: the suffix stays implicit until a later element
                    if elements[edge.lo() + self.active_len] == elements[pos] {
                        self.active_len += 1;
                        self.link_pending_to(self.active_node);
                        break;
                    }

                    let branch = self.tree.split_edge(edge_id, self.active_len);
                    self.tree.add_leaf(branch, pos);
                    self.link_pending_to(branch);
                }
            }

            self.remainder -= 1;

            if self.active_node.is_root() {
                if self.active_len > 0 {
                    self.active_len -= 1;
                    self.active_edge = pos + 1 - self.remainder;
                }
            } else {
                self.active_node = self
                    .suffix_links
                    .get(&self.active_node)
                    .copied()
                    .unwrap_or(NodeId::ROOT);
            }
        }
    }

    /// Points the suffix link of the branch created last in this phase at `node`,
    /// then remembers `node` as the next one waiting for a link.
    fn link_pending_to(&mut self, node: NodeId) {
        if let Some(pending) = self.pending_link.filter(|pending| !pending.is_root()) {
            self.suffix_links.insert(pending, node);
        }
        self.pending_link = Some(node);
    }
}
