//! SQL identifier escaping.
//!
//! This module provides [`Ident`] which represents a MySQL identifier (schema/table/column)
//! and the [`escape_id`] helpers used by every statement builder.
//!
//! - By default the input is split on `.` and each part is quoted on its own
//!   (`INFORMATION_SCHEMA.COLUMNS` → `` `INFORMATION_SCHEMA`.`COLUMNS` ``).
//! - A "whole" identifier is quoted as one unit, dots included.
//! - A backtick inside a part is escaped as a doubled backtick.
//!
//! Escaping never fails: an empty input renders as ``` `` ```.
//!
//! # Example
//! ```
//! use myorm::ident::{escape_id, escape_id_with};
//!
//! assert_eq!(escape_id("INFORMATION_SCHEMA.COLUMNS"), "`INFORMATION_SCHEMA`.`COLUMNS`");
//! assert_eq!(escape_id_with("some.weird.column", true), "`some.weird.column`");
//! ```

use std::fmt;

const QUOTE: char = '`';

/// A SQL identifier split into the parts that are quoted independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    parts: Vec<String>,
}

impl Ident {
    /// Split a dotted identifier (`schema.table.column`) into parts.
    pub fn parse(s: &str) -> Self {
        Self {
            parts: s.split('.').map(str::to_string).collect(),
        }
    }

    /// Treat the whole string as a single part, even if it contains dots.
    pub fn whole(s: &str) -> Self {
        Self {
            parts: vec![s.to_string()],
        }
    }

    /// The unquoted parts of this identifier.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Render the identifier as SQL.
    pub fn to_sql(&self) -> String {
        // dots + surrounding quotes (escapes may add more)
        let cap = self.parts.iter().map(|p| p.len() + 3).sum::<usize>();
        let mut out = String::with_capacity(cap);
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push(QUOTE);
            for ch in part.chars() {
                if ch == QUOTE {
                    out.push(QUOTE);
                }
                out.push(ch);
            }
            out.push(QUOTE);
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// Escape a table or column name, quoting each dot-separated part.
pub fn escape_id(id: &str) -> String {
    Ident::parse(id).to_sql()
}

/// Escape a table or column name; with `ignore_dot` the dots are kept inside one quoted part.
pub fn escape_id_with(id: &str, ignore_dot: bool) -> String {
    if ignore_dot {
        Ident::whole(id).to_sql()
    } else {
        escape_id(id)
    }
}
