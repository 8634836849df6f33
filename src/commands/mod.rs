//! Command implementations
//!
//! Both commands are implemented on [`Session`](crate::areas::session::Session):
//!
//! - `diff`: compares an original and a new file and writes the patch
//! - `patch`: rebuilds the new file from the original and a patch
//!
//! Commands only read and write files; the algorithms live in `domain`.

pub mod diff;
pub mod patch;
