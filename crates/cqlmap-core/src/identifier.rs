// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! CQL identifiers.
//!
//! An identifier is stored as its unquoted text plus a quoting flag.
//! Quoting is always recomputed from the unquoted text, so switching the
//! flag back and forth never accumulates quote characters.
//!
//! # Rules
//!
//! | Input | `force_quote` | Result |
//! |-------|---------------|--------|
//! | `userName` | `false` | `username` (case-folded) |
//! | `userName` | `true` | `"userName"` |
//! | `order` | `false` | `"order"` (reserved keyword) |
//! | `first name` | `false` | `"first name"` |
//! | `` | any | error |

use std::fmt;

use crate::error::{MappingError, MappingResult};

/// Reserved CQL keywords that cannot be used unquoted.
const RESERVED_KEYWORDS: &[&str] = &[
    "add",
    "allow",
    "alter",
    "and",
    "apply",
    "asc",
    "authorize",
    "batch",
    "begin",
    "by",
    "columnfamily",
    "create",
    "delete",
    "desc",
    "describe",
    "drop",
    "entries",
    "execute",
    "from",
    "full",
    "grant",
    "if",
    "in",
    "index",
    "infinity",
    "insert",
    "into",
    "keyspace",
    "limit",
    "modify",
    "nan",
    "norecursive",
    "not",
    "null",
    "of",
    "on",
    "or",
    "order",
    "primary",
    "rename",
    "replace",
    "revoke",
    "schema",
    "select",
    "set",
    "table",
    "to",
    "token",
    "truncate",
    "unlogged",
    "update",
    "use",
    "using",
    "where",
    "with"
];

/// Whether `word` is a reserved CQL keyword.
#[must_use]
pub fn is_reserved_keyword(word: &str) -> bool {
    RESERVED_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(word))
}

/// Whether `text` can be written without quotes.
fn is_unquoted_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_reserved_keyword(text)
}

/// A table, column or type identifier.
///
/// # Example
///
/// ```rust
/// use cqlmap_core::CqlIdentifier;
///
/// let plain = CqlIdentifier::new("firstName", false).unwrap();
/// assert_eq!(plain.to_cql(), "firstname");
///
/// let quoted = CqlIdentifier::new("firstName", true).unwrap();
/// assert_eq!(quoted.to_cql(), "\"firstName\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CqlIdentifier {
    text:   String,
    quoted: bool
}

impl CqlIdentifier {
    /// Build an identifier from raw text.
    ///
    /// # Errors
    ///
    /// [`MappingError::InvalidIdentifier`] if `text` is empty.
    pub fn new(text: impl Into<String>, force_quote: bool) -> MappingResult<Self> {
        let text = text.into();

        if text.is_empty() {
            return Err(MappingError::InvalidIdentifier {
                identifier: text,
                reason:     "identifier must not be empty"
            });
        }

        Ok(Self::from_valid(text, force_quote))
    }

    pub(crate) fn from_valid(text: String, force_quote: bool) -> Self {
        if force_quote {
            return Self {
                text,
                quoted: true
            };
        }

        if is_unquoted_identifier(&text) {
            Self {
                text:   text.to_ascii_lowercase(),
                quoted: false
            }
        } else {
            Self {
                text,
                quoted: true
            }
        }
    }

    /// Same identifier with the quoting rule reapplied to the unquoted text.
    #[must_use]
    pub fn with_force_quote(&self, force_quote: bool) -> Self {
        Self::from_valid(self.text.clone(), force_quote)
    }

    /// Identifier text without quotes.
    #[must_use]
    pub fn unquoted(&self) -> &str {
        &self.text
    }

    /// Whether the identifier renders with quotes.
    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Render for use in a CQL statement.
    #[must_use]
    pub fn to_cql(&self) -> String {
        if self.quoted {
            format!("\"{}\"", self.text.replace('"', "\"\""))
        } else {
            self.text.clone()
        }
    }
}

impl fmt::Display for CqlIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cql())
    }
}
