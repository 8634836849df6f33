//! Greedy longest-match diff
//!
//! The original is indexed once by a [`SuffixTree`]. The new sequence is then walked
//! left to right with a matcher; each run of new elements that occurs contiguously
//! in the original becomes a single copy. When an element cannot extend the current
//! run, the run is emitted and the element gets one more chance as the start of a
//! fresh run. Only if it does not occur in the original at all is it inserted.
//!
//! This is not a minimum edit script: a greedy run may split a copy that an LCS based
//! algorithm would keep merged. In exchange, generation costs one matcher step per
//! new element (two at most on a run boundary) plus the one-time tree build.

use crate::domain::errors::Result;
use crate::domain::instruction::{DiffSummary, Instruction};
use crate::domain::suffix_tree::SuffixTree;
use crate::domain::suffix_tree::matcher::Matcher;
use derive_new::new;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SuffixTreeDiff<'d, T> {
    original: &'d [T],
    new: &'d [T],
}

impl<T: Eq + Hash + Clone> SuffixTreeDiff<'_, T> {
    pub fn diff(&self) -> Result<Vec<Instruction<T>>> {
        let tree = SuffixTree::new(self.original);
        let mut instructions = Vec::new();
        let mut matcher = tree.matcher();

        for element in self.new {
            if matcher.match_next(element)?.is_matched() {
                continue;
            }

            Self::close_run(&matcher, &mut instructions)?;

            matcher = tree.matcher();
            if !matcher.match_next(element)?.is_matched() {
                tracing::trace!(instruction = instructions.len(), "insert");
                instructions.push(Instruction::Insert {
                    text: element.clone(),
                });
                matcher = tree.matcher();
            }
        }

        Self::close_run(&matcher, &mut instructions)?;

        tracing::debug!(
            original = self.original.len(),
            new = self.new.len(),
            summary = %DiffSummary::of(&instructions),
            "computed diff"
        );

        Ok(instructions)
    }

    /// Emits the copy for the run `matcher` has matched, if it matched anything.
    fn close_run(
        matcher: &Matcher<'_, '_, T>,
        instructions: &mut Vec<Instruction<T>>,
    ) -> Result<()> {
        if matcher.is_root() {
            return Ok(());
        }

        let range = matcher.range()?;
        tracing::trace!(
            instruction = instructions.len(),
            from = range.start(),
            to = range.end(),
            "copy"
        );
        instructions.push(Instruction::from_range(range));

        Ok(())
    }
}

/// Computes the instructions that rebuild `new` from `original`.
pub fn diff<T: Eq + Hash + Clone>(original: &[T], new: &[T]) -> Result<Vec<Instruction<T>>> {
    SuffixTreeDiff::new(original, new).diff()
}
