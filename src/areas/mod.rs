//! File system collaborators of the commands
//!
//! - `session`: the command context, owning the workspace and the output writer
//! - `workspace`: reading and writing line files relative to the working directory

pub mod session;
pub mod workspace;
