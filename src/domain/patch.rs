use crate::domain::errors::{DiffrError, Result};
use crate::domain::instruction::{DiffSummary, Instruction};

/// Replays `instructions` against `original` and returns the rebuilt sequence.
///
/// Copies are bounds-checked against `original`; the first copy that does not fit
/// aborts the whole application.
pub fn apply<T: Clone>(original: &[T], instructions: &[Instruction<T>]) -> Result<Vec<T>> {
    let mut patched = Vec::new();

    for instruction in instructions {
        match instruction {
            Instruction::Copy { from, to } => {
                let (from, to) = (*from, *to);
                if to < from {
                    return Err(DiffrError::ReversedCopy { from, to });
                }

                let lines = original
                    .get(from..=to)
                    .ok_or(DiffrError::CopyOutOfRange {
                        from,
                        to,
                        len: original.len(),
                    })?;
                patched.extend_from_slice(lines);
            }
            Instruction::Insert { text } => patched.push(text.clone()),
        }
    }

    tracing::debug!(
        original = original.len(),
        patched = patched.len(),
        summary = %DiffSummary::of(instructions),
        "applied patch"
    );

    Ok(patched)
}
