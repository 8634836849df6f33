//! Delta instructions
//!
//! An ordered list of [`Instruction`]s turns the original sequence into the new one:
//! a copy reuses a closed range of original lines, an insert emits a literal line.
//!
//! - `codec`: the one-instruction-per-line text encoding of a patch

pub mod codec;

use crate::domain::errors::{DiffrError, Result};
use std::fmt::Display;
use std::ops::RangeInclusive;

pub const COPY_SEPARATOR: char = ',';
pub const INSERT_PREFIX: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction<T = String> {
    /// Copy `original[from..=to]`.
    Copy { from: usize, to: usize },
    /// Emit `text` verbatim.
    Insert { text: T },
}

impl<T> Instruction<T> {
    /// Builds a copy of the closed range `from..=to`.
    pub fn copy(from: usize, to: usize) -> Result<Self> {
        if to < from {
            return Err(DiffrError::ReversedCopy { from, to });
        }

        Ok(Instruction::Copy { from, to })
    }

    pub fn insert(text: impl Into<T>) -> Self {
        Instruction::Insert { text: text.into() }
    }

    pub fn from_range(range: RangeInclusive<usize>) -> Self {
        let (from, to) = range.into_inner();
        Instruction::Copy { from, to }
    }

    pub fn is_copy(&self) -> bool {
        matches!(self, Instruction::Copy { .. })
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Instruction::Insert { .. })
    }

    /// Number of lines this instruction contributes to the new sequence.
    pub fn output_len(&self) -> usize {
        match self {
            Instruction::Copy { from, to } => to.saturating_sub(*from).saturating_add(1),
            Instruction::Insert { .. } => 1,
        }
    }
}

impl<T: Display> Instruction<T> {
    /// Renders the patch line for this instruction, without a line terminator.
    pub fn compose(&self) -> String {
        self.to_string()
    }
}

impl<T: Display> Display for Instruction<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Copy { from, to } => write!(f, "{from}{COPY_SEPARATOR}{to}"),
            Instruction::Insert { text } => write!(f, "{INSERT_PREFIX}{text}"),
        }
    }
}

/// Line counts of a delta, as reported by the `diff` and `patch` commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub instructions: usize,
    pub copied: usize,
    pub inserted: usize,
}

impl DiffSummary {
    pub fn of<T>(instructions: &[Instruction<T>]) -> Self {
        instructions
            .iter()
            .fold(DiffSummary::default(), |mut summary, instruction| {
                summary.instructions += 1;
                match instruction {
                    Instruction::Copy { .. } => summary.copied += instruction.output_len(),
                    Instruction::Insert { .. } => summary.inserted += 1,
                }
                summary
            })
    }
}

impl Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} instructions, {} lines copied, {} lines inserted",
            self.instructions, self.copied, self.inserted
        )
    }
}
