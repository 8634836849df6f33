use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;

/// Context shared by the commands: the working directory that relative paths are
/// resolved against, and the writer that receives output when no `-o` file is given.
pub struct Session {
    workspace: Workspace,
    writer: RefCell<Box<dyn Write>>,
}

impl Session {
    pub fn new(path: &str, writer: Box<dyn Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Session {
            workspace: Workspace::new(path.into_boxed_path()),
            writer: RefCell::new(writer),
        })
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    /// Sends command output to `output` inside the workspace, or to the writer.
    pub(crate) fn emit(&self, output: Option<&Path>, content: &str) -> anyhow::Result<()> {
        match output {
            Some(output) => self.workspace.write_file(output, content),
            None => {
                let mut writer = self.writer();
                writer.write_all(content.as_bytes())?;
                writer.flush()?;
                Ok(())
            }
        }
    }
}
