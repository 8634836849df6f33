//! Diff and patch core
//!
//! - `suffix_tree`: immutable index over the original sequence and its matcher
//! - `diff`: greedy longest-match diff driven by the matcher
//! - `patch`: replays a delta against the original
//! - `instruction`: the copy/insert delta model and its text encoding
//! - `errors`: typed failures shared by the modules above
//!
//! Everything here is a pure, synchronous function of its inputs; files and the
//! command line are handled by `areas` and `commands`.

pub mod diff;
pub mod errors;
pub mod instruction;
pub mod patch;
pub mod suffix_tree;
