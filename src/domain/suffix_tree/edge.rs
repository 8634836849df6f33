use derive_new::new;
use std::fmt::Display;
use std::ops::RangeInclusive;

/// Index of a node in the suffix tree arena. The root is always node `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub(super) fn from_index(index: usize) -> Self {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Index of an edge in the suffix tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(super) fn from_index(index: usize) -> Self {
        EdgeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A parent to child link labelled by the closed range `[lo, hi]` of the original sequence.
///
/// Leaf edges are created "open" and have `hi` resolved to the last index of the
/// original when they are created; the bound never moves afterwards.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Edge {
    parent: NodeId,
    child: NodeId,
    lo: usize,
    hi: usize,
}

impl Edge {
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    pub fn child(&self) -> NodeId {
        self.child
    }

    pub fn lo(&self) -> usize {
        self.lo
    }

    pub fn hi(&self) -> usize {
        self.hi
    }

    pub fn len(&self) -> usize {
        self.hi - self.lo + 1
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.lo..=self.hi
    }

    /// Length of the edge as seen while the element at `pos` is being inserted,
    /// i.e. with open leaf ends clamped to `pos`.
    pub(super) fn len_at(&self, pos: usize) -> usize {
        self.hi.min(pos) - self.lo + 1
    }

    /// Re-hangs the lower part of a split edge under `parent`, starting at `lo`.
    pub(super) fn reattach(&mut self, parent: NodeId, lo: usize) {
        debug_assert!(lo <= self.hi);
        self.parent = parent;
        self.lo = lo;
    }
}
