use crate::areas::session::Session;
use crate::areas::workspace::join_lines;
use crate::domain::instruction::DiffSummary;
use crate::domain::instruction::codec::parse_patch;
use crate::domain::patch::apply;
use anyhow::Context;
use std::path::Path;

impl Session {
    /// Writes the file rebuilt from `original` and the instructions in `patch`.
    pub fn patch(
        &self,
        original: &Path,
        patch: &Path,
        output: Option<&Path>,
    ) -> anyhow::Result<()> {
        let original_lines = self.workspace().read_lines(original)?;
        let patch_text = self.workspace().read_file(patch)?;

        let instructions = parse_patch(&patch_text)
            .with_context(|| format!("Illegal patch file {:?}", patch))?;
        let patched = apply(&original_lines, &instructions)
            .with_context(|| format!("failed to apply {:?} to {:?}", patch, original))?;

        tracing::info!(
            original = %original.display(),
            patch = %patch.display(),
            summary = %DiffSummary::of(&instructions),
            "patch complete"
        );

        self.emit(output, &join_lines(&patched))
    }
}
