// src/cli/parsers.rs
use std::{ops::Range, str::FromStr};

/// A character range given as `A..B` (end exclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionArg(pub Range<usize>);

impl FromStr for SelectionArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .trim()
            .split_once("..")
            .ok_or_else(|| format!("Invalid selection '{s}': expected A..B"))?;
        let start = parse_offset(start)?;
        let end = parse_offset(end)?;
        if end < start {
            return Err(format!("Invalid selection '{s}': end is before start"));
        }
        Ok(Self(start..end))
    }
}

fn parse_offset(s: &str) -> Result<usize, String> {
    let s = s.trim().replace('_', "");
    s.parse().map_err(|_| format!("Invalid offset: {s}"))
}
