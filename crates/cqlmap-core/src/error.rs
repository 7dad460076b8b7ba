// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapping errors.
//!
//! Every variant describes a static mapping-configuration defect. Nothing
//! here is transient, so nothing is retried: callers are expected to fail
//! at bootstrap (see [`MappingContext::describe`]).
//!
//! [`MappingContext::describe`]: crate::MappingContext::describe

use std::fmt;

use thiserror::Error;

use crate::expression::EvaluationError;

/// Result alias used throughout the crate.
pub type MappingResult<T> = Result<T, MappingError>;

/// Diagnostic location of a mapped property.
///
/// Rendered as `property ['name'] of type ['Type'] in entity [Owner]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRef {
    /// Property name as declared on the entity.
    pub name: String,

    /// Name of the declared type.
    pub declared_type: String,

    /// Name of the owning entity.
    pub owner: String
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "property ['{}'] of type ['{}'] in entity [{}]",
            self.name, self.declared_type, self.owner
        )
    }
}

/// Errors raised while resolving data types and column names.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A declared or annotated type has no simple-type mapping.
    #[error(
        "unknown type [{type_name}] for {property}; only primitive types and collections or maps of primitive types are allowed"
    )]
    UnknownType {
        /// The type name or CQL tag that failed to map.
        type_name: String,
        /// Where it was declared.
        property:  PropertyRef
    },

    /// Wrong number of generic arguments or annotation element tags.
    #[error("expected [{expected}] type arguments but found [{actual}] for {property}")]
    ArityMismatch {
        /// Arity required by the detected structure (map = 2, collection = 1).
        expected: usize,
        /// Arity actually declared.
        actual:   usize,
        /// Where it was declared.
        property: PropertyRef
    },

    /// A user-defined type was requested without a type name.
    #[error("expected user type name for {property}")]
    MissingUserTypeName {
        /// Where it was declared.
        property: PropertyRef
    },

    /// The user-type resolver does not know the requested type.
    #[error("user type [{user_type}] not found for {property}")]
    UserTypeNotFound {
        /// Normalized user type identifier.
        user_type: String,
        /// Where it was declared.
        property:  PropertyRef
    },

    /// A naming override expression failed to evaluate.
    #[error("failed to evaluate column name expression [{expression}] for {property}")]
    ExpressionEvaluation {
        /// The expression text as written in the override.
        expression: String,
        /// Where it was declared.
        property:   PropertyRef,
        /// Underlying evaluation failure.
        #[source]
        source:     EvaluationError
    },

    /// A table name expression failed to evaluate.
    #[error("failed to evaluate table name expression [{expression}] for entity [{entity}]")]
    TableNameEvaluation {
        /// The expression text.
        expression: String,
        /// Entity whose table name it is.
        entity:     String,
        /// Underlying evaluation failure.
        #[source]
        source:     EvaluationError
    },

    /// Identifier text is not a usable CQL identifier.
    #[error("[{identifier}] is not a valid CQL identifier: {reason}")]
    InvalidIdentifier {
        /// Offending text.
        identifier: String,
        /// Why it was rejected.
        reason:     &'static str
    },

    /// Two annotations on one property contradict each other.
    #[error("conflicting mapping for {property}: {reason}")]
    ConflictingMapping {
        /// Where it was declared.
        property: PropertyRef,
        /// Which rule was violated.
        reason:   &'static str
    }
}

impl MappingError {
    /// Property the error refers to, if any.
    #[must_use]
    pub fn property(&self) -> Option<&PropertyRef> {
        match self {
            Self::UnknownType {
                property, ..
            }
            | Self::ArityMismatch {
                property, ..
            }
            | Self::MissingUserTypeName {
                property
            }
            | Self::UserTypeNotFound {
                property, ..
            }
            | Self::ExpressionEvaluation {
                property, ..
            }
            | Self::ConflictingMapping {
                property, ..
            } => Some(property),
            Self::TableNameEvaluation {
                ..
            }
            | Self::InvalidIdentifier {
                ..
            } => None
        }
    }
}
