use crate::areas::session::Session;
use crate::domain::diff::diff;
use crate::domain::instruction::DiffSummary;
use crate::domain::instruction::codec::compose_patch;
use anyhow::Context;
use std::path::Path;

impl Session {
    /// Writes the patch that turns `original` into `new`.
    pub fn diff(
        &self,
        original: &Path,
        new: &Path,
        output: Option<&Path>,
    ) -> anyhow::Result<()> {
        let original_lines = self.workspace().read_lines(original)?;
        let new_lines = self.workspace().read_lines(new)?;

        let instructions = diff(&original_lines, &new_lines)
            .with_context(|| format!("failed to diff {:?} against {:?}", original, new))?;

        tracing::info!(
            original = %original.display(),
            new = %new.display(),
            summary = %DiffSummary::of(&instructions),
            "diff complete"
        );

        self.emit(output, &compose_patch(&instructions))
    }
}
