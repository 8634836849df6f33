use crate::domain::instruction::codec::split_lines;
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves `file_path` against the workspace; absolute paths are kept as they are.
    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.resolve(file_path);

        if !file_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", file_path);
        }
        if file_path.is_dir() {
            anyhow::bail!("The specified path is a directory: {:?}", file_path);
        }

        let content = std::fs::read_to_string(&file_path)
            .with_context(|| format!("failed to read {:?}", file_path))?;

        Ok(content)
    }

    pub fn read_lines(&self, file_path: &Path) -> anyhow::Result<Vec<String>> {
        let content = self.read_file(file_path)?;

        Ok(split_lines(&content)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    pub fn write_file(&self, file_path: &Path, content: &str) -> anyhow::Result<()> {
        let file_path = self.resolve(file_path);

        std::fs::write(&file_path, content)
            .with_context(|| format!("failed to write {:?}", file_path))?;

        Ok(())
    }
}

/// Joins lines back into file content, terminating every line with `\n`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .flat_map(|line| [line.as_ref(), "\n"])
        .collect()
}
