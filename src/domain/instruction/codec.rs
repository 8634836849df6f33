//! Patch text encoding
//!
//! One instruction per line:
//!
//! - copy: `<from>,<to>`, both decimal without leading zeros (except `0` itself)
//! - insert: `> <text>`, where everything after the two-character prefix is kept verbatim
//!
//! Parsing a patch is fail-fast: the first line matching neither form aborts the whole
//! parse and no instruction is returned.

use crate::domain::errors::{DiffrError, Result};
use crate::domain::instruction::{INSERT_PREFIX, Instruction};
use std::fmt::Display;
use std::str::FromStr;

const COPY_PATTERN: &str = r"^(0|[1-9][0-9]*),(0|[1-9][0-9]*)$";

/// Splits text into lines on `\n`. A final terminator does not start an extra line,
/// and carriage returns stay part of the line so CRLF content is written back as is.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    // "\n" is one empty line, "" is none
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').collect()
}

/// Compiled grammar of a single patch line.
#[derive(Debug, Clone)]
pub struct InstructionParser {
    copy: regex::Regex,
}

impl InstructionParser {
    pub fn new() -> Result<Self> {
        Ok(InstructionParser {
            copy: regex::Regex::new(COPY_PATTERN)?,
        })
    }

    /// Parses one patch line; `line` is the 1-based position reported on failure.
    pub fn parse_line(&self, line: usize, text: &str) -> Result<Instruction> {
        let malformed = || DiffrError::MalformedInstruction {
            line,
            text: text.to_string(),
        };

        if let Some(captures) = self.copy.captures(text) {
            let from = captures[1].parse::<usize>().map_err(|_| malformed())?;
            let to = captures[2].parse::<usize>().map_err(|_| malformed())?;
            return Instruction::copy(from, to).map_err(|_| malformed());
        }

        text.strip_prefix(INSERT_PREFIX)
            .map(Instruction::insert)
            .ok_or_else(malformed)
    }

    /// Parses a whole patch, one instruction per line.
    pub fn parse_patch(&self, patch: &str) -> Result<Vec<Instruction>> {
        split_lines(patch)
            .into_iter()
            .enumerate()
            .map(|(index, text)| self.parse_line(index + 1, text))
            .collect()
    }
}

impl FromStr for Instruction {
    type Err = DiffrError;

    fn from_str(s: &str) -> Result<Self> {
        InstructionParser::new()?.parse_line(1, s)
    }
}

/// Parses a whole patch text.
pub fn parse_patch(patch: &str) -> Result<Vec<Instruction>> {
    InstructionParser::new()?.parse_patch(patch)
}

/// Renders a whole patch, each instruction on its own `\n`-terminated line.
pub fn compose_patch<T: Display>(instructions: &[Instruction<T>]) -> String {
    instructions
        .iter()
        .map(|instruction| format!("{instruction}\n"))
        .collect()
}
