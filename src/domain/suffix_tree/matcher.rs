use crate::domain::errors::{DiffrError, Result};
use crate::domain::suffix_tree::SuffixTree;
use crate::domain::suffix_tree::edge::{EdgeId, NodeId};
use std::hash::Hash;
use std::ops::RangeInclusive;

/// Outcome of feeding one element to a [`Matcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matched {
    Yes,
    No,
}

impl Matched {
    pub fn is_matched(self) -> bool {
        self == Matched::Yes
    }
}

/// Position of the last consumed element: `last` indexes the original sequence and
/// lies inside `edge`'s label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    edge: EdgeId,
    last: usize,
    matched: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AtRoot,
    OnEdge(Cursor),
    /// Terminal. Keeps the cursor of the completed run, if any element was matched.
    Finished(Option<Cursor>),
}

/// Single-use cursor over a [`SuffixTree`].
///
/// Every element fed with [`Matcher::match_next`] must extend the run matched so far;
/// the first element that does not finishes the matcher for good. The run always
/// starts at the root, so the elements matched so far are a contiguous run of the
/// original, available through [`Matcher::range`].
#[derive(Debug)]
pub struct Matcher<'m, 't, T> {
    tree: &'m SuffixTree<'t, T>,
    state: State,
}

impl<'m, 't, T: Eq + Hash> Matcher<'m, 't, T> {
    pub(super) fn new(tree: &'m SuffixTree<'t, T>) -> Self {
        Matcher {
            tree,
            state: State::AtRoot,
        }
    }

    pub fn match_next(&mut self, element: &T) -> Result<Matched> {
        let tree = self.tree;

        let matched = match self.state {
            State::Finished(_) => return Err(DiffrError::MatcherFinished),
            State::AtRoot => self.enter(NodeId::ROOT, element, None),
            State::OnEdge(cursor) => {
                let edge = tree.edge(cursor.edge);

                if cursor.last < edge.hi() {
                    let next = cursor.last + 1;
                    if tree.element(next) == Some(element) {
                        self.state = State::OnEdge(Cursor {
                            last: next,
                            matched: cursor.matched + 1,
                            ..cursor
                        });
                        Matched::Yes
                    } else {
                        self.state = State::Finished(Some(cursor));
                        Matched::No
                    }
                } else {
                    self.enter(edge.child(), element, Some(cursor))
                }
            }
        };

        Ok(matched)
    }

    /// Enters the edge leaving `node` that starts with `element`, consuming its
    /// first position, or finishes when there is none.
    fn enter(&mut self, node: NodeId, element: &T, current: Option<Cursor>) -> Matched {
        match self.tree.find_edge(node, element) {
            Some(edge) => {
                let matched = current.map_or(0, |cursor| cursor.matched);
                self.state = State::OnEdge(Cursor {
                    edge,
                    last: self.tree.edge(edge).lo(),
                    matched: matched + 1,
                });
                Matched::Yes
            }
            None => {
                self.state = State::Finished(current);
                Matched::No
            }
        }
    }
}

impl<T> Matcher<'_, '_, T> {
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Finished(_))
    }

    /// True until the first element has been matched, including when the very first
    /// attempt failed.
    pub fn is_root(&self) -> bool {
        matches!(self.state, State::AtRoot | State::Finished(None))
    }

    /// Number of elements matched so far.
    pub fn matched(&self) -> usize {
        self.cursor().map_or(0, |cursor| cursor.matched)
    }

    /// Closed range of original indices underlying the elements matched so far.
    pub fn range(&self) -> Result<RangeInclusive<usize>> {
        let cursor = self.cursor().ok_or(DiffrError::MatcherNotStarted)?;
        Ok(cursor.last + 1 - cursor.matched..=cursor.last)
    }

    /// Original index of the most recently matched element.
    pub fn last_index(&self) -> Result<usize> {
        self.cursor()
            .map(|cursor| cursor.last)
            .ok_or(DiffrError::MatcherNotStarted)
    }

    fn cursor(&self) -> Option<Cursor> {
        match self.state {
            State::AtRoot => None,
            State::OnEdge(cursor) => Some(cursor),
            State::Finished(cursor) => cursor,
        }
    }
}
