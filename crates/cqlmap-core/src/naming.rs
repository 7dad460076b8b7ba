// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column naming.
//!
//! # Precedence
//!
//! | Property | Override consulted |
//! |----------|--------------------|
//! | composite primary key | none, no column |
//! | identifier | `#[primary_key]` only |
//! | primary-key column | `#[primary_key_column]` |
//! | anything else | `#[column]` |
//!
//! A non-blank override is evaluated against the [`EvaluationContext`] when
//! one is configured and used literally otherwise. Without an override the
//! [`NamingStrategy`] supplies the name.
//!
//! The outcome is cached on the descriptor; later calls return the cached
//! name with the current force-quote flag applied.

use convert_case::{Case, Casing};
use tracing::{debug, trace};

use crate::{
    error::{MappingError, MappingResult},
    expression::EvaluationContext,
    identifier::CqlIdentifier,
    property::{PropertyDescriptor, ResolvedName}
};

/// Default column name for a property without a naming override.
pub trait NamingStrategy: Send + Sync {
    /// Column name text for `property`.
    fn column_name(&self, property: &PropertyDescriptor) -> String;
}

/// Uses the property name unmodified.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyNameStrategy;

impl NamingStrategy for PropertyNameStrategy {
    fn column_name(&self, property: &PropertyDescriptor) -> String {
        property.name().to_string()
    }
}

/// Converts the property name to `snake_case`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCaseStrategy;

impl NamingStrategy for SnakeCaseStrategy {
    fn column_name(&self, property: &PropertyDescriptor) -> String {
        property.name().to_case(Case::Snake)
    }
}

/// Resolves and caches column identifiers.
#[derive(Clone, Copy)]
pub struct ColumnNameResolver<'a> {
    strategy:   &'a dyn NamingStrategy,
    evaluation: Option<&'a dyn EvaluationContext>
}

impl<'a> ColumnNameResolver<'a> {
    /// Create a resolver.
    #[must_use]
    pub const fn new(
        strategy: &'a dyn NamingStrategy,
        evaluation: Option<&'a dyn EvaluationContext>
    ) -> Self {
        Self {
            strategy,
            evaluation
        }
    }

    /// Column identifier of `property`, or `None` for a composite primary
    /// key.
    ///
    /// # Errors
    ///
    /// - [`MappingError::ExpressionEvaluation`] when the override expression
    ///   fails
    /// - [`MappingError::InvalidIdentifier`] when the name is empty
    pub fn resolve(&self, property: &PropertyDescriptor) -> MappingResult<Option<CqlIdentifier>> {
        if let Some(cached) = property.cached_resolution() {
            trace!(property = property.name(), "column name cache hit");
            return Ok(property.identifier_for(&cached));
        }

        let resolved = if property.is_composite_primary_key() {
            ResolvedName::Composite
        } else {
            property.column_resolution(self.column_text(property)?)
        };

        let stored = property.store_resolution(resolved);
        let identifier = property.identifier_for(&stored);

        debug!(
            property = property.name(),
            owner = property.owner(),
            column = ?identifier.as_ref().map(CqlIdentifier::to_cql),
            "resolved column name"
        );

        Ok(identifier)
    }

    fn column_text(&self, property: &PropertyDescriptor) -> MappingResult<String> {
        let text = match property.naming_override().and_then(|naming| naming.text()) {
            Some(expression) => match self.evaluation {
                Some(context) => context.evaluate(expression).map_err(|source| {
                    MappingError::ExpressionEvaluation {
                        expression: expression.to_string(),
                        property: property.property_ref(),
                        source
                    }
                })?,
                None => expression.to_string()
            },
            None => self.strategy.column_name(property)
        };

        if text.is_empty() {
            return Err(MappingError::InvalidIdentifier {
                identifier: text,
                reason:     "column name must not be empty"
            });
        }

        Ok(text)
    }
}

/// Resolve the column identifier of `property` with the property-name
/// strategy.
///
/// # Errors
///
/// See [`ColumnNameResolver::resolve`].
pub fn resolve_column_name(
    property: &PropertyDescriptor,
    evaluation: Option<&dyn EvaluationContext>
) -> MappingResult<Option<CqlIdentifier>> {
    ColumnNameResolver::new(&PropertyNameStrategy, evaluation).resolve(property)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        annotation::{ColumnOverride, PrimaryKeyColumn, PrimaryKeyOverride},
        expression::{EvaluationError, TemplateContext},
        type_info::{DescribeType, TypeInfo}
    };

    fn string_property(name: &str) -> crate::property::PropertyDescriptorBuilder {
        PropertyDescriptor::builder(name, "Person", String::type_info())
    }

    #[test]
    fn default_name_is_property_name() {
        let property = string_property("firstName").build();
        let column = resolve_column_name(&property, None).unwrap().unwrap();
        assert_eq!(column.to_cql(), "firstname");
    }

    #[test]
    fn snake_case_strategy() {
        let property = string_property("firstName").build();
        let column = ColumnNameResolver::new(&SnakeCaseStrategy, None)
            .resolve(&property)
            .unwrap()
            .unwrap();
        assert_eq!(column.to_cql(), "first_name");
    }

    #[test]
    fn literal_override_without_context() {
        let property = string_property("email")
            .column(ColumnOverride::named("#{#prefix}_mail"))
            .build();
        let column = resolve_column_name(&property, None).unwrap().unwrap();
        assert_eq!(column.unquoted(), "#{#prefix}_mail");
        assert!(column.is_quoted());
    }

    #[test]
    fn expression_override_with_context() {
        let context = TemplateContext::new().variable("prefix", "work");
        let property = string_property("email")
            .column(ColumnOverride::named("#{#prefix}_mail"))
            .build();
        let column = resolve_column_name(&property, Some(&context))
            .unwrap()
            .unwrap();
        assert_eq!(column.to_cql(), "work_mail");
    }

    #[test]
    fn evaluation_failure_propagates() {
        let context = TemplateContext::new();
        let property = string_property("email")
            .column(ColumnOverride::named("#{missing}"))
            .build();
        let err = resolve_column_name(&property, Some(&context)).unwrap_err();
        assert!(matches!(
            err,
            MappingError::ExpressionEvaluation {
                source: EvaluationError::UnknownBean(_),
                ..
            }
        ));
        assert_eq!(property.cached_column_name(), None);
    }

    #[test]
    fn identifier_ignores_column_override() {
        let property = string_property("id")
            .identifier(true)
            .column(ColumnOverride::named("ignored"))
            .build();
        let column = resolve_column_name(&property, None).unwrap().unwrap();
        assert_eq!(column.to_cql(), "id");
    }

    #[test]
    fn primary_key_override_with_force_quote() {
        let property = string_property("id")
            .primary_key(PrimaryKeyOverride {
                name:        Some("PersonId".to_string()),
                force_quote: true
            })
            .build();
        let column = resolve_column_name(&property, None).unwrap().unwrap();
        assert_eq!(column.to_cql(), "\"PersonId\"");
    }

    #[test]
    fn key_column_override() {
        let property = string_property("tenant")
            .primary_key_column(PrimaryKeyColumn::partitioned(0).named("tenant_id"))
            .build();
        let column = resolve_column_name(&property, None).unwrap().unwrap();
        assert_eq!(column.to_cql(), "tenant_id");
    }

    #[test]
    fn composite_key_has_no_column() {
        let key = TypeInfo::plain("PersonKey").mark_primary_key_class();
        let property = PropertyDescriptor::builder("key", "Person", key)
            .identifier(true)
            .build();
        assert_eq!(resolve_column_name(&property, None).unwrap(), None);
        assert_eq!(resolve_column_name(&property, None).unwrap(), None);
    }

    #[test]
    fn force_quote_after_resolution_requotes_cached_text() {
        let property = string_property("firstName").build();
        assert_eq!(
            resolve_column_name(&property, None).unwrap().unwrap().to_cql(),
            "firstname"
        );

        assert!(property.set_force_quote(true));
        let context = TemplateContext::new();
        let again = resolve_column_name(&property, Some(&context))
            .unwrap()
            .unwrap();
        assert_eq!(again.to_cql(), "\"firstname\"");

        assert!(property.set_force_quote(false));
        assert_eq!(
            property.cached_column_name().unwrap().to_cql(),
            "firstname"
        );
    }

    #[test]
    fn requoting_matches_identifier_requoting() {
        let property = string_property("firstName").build();
        let resolved = resolve_column_name(&property, None).unwrap().unwrap();
        assert_eq!(resolved.unquoted(), "firstname");

        property.set_force_quote(true);
        assert_eq!(
            property.cached_column_name(),
            Some(resolved.with_force_quote(true))
        );
    }

    #[test]
    fn empty_evaluated_name_is_invalid() {
        let context = TemplateContext::new().variable("blank", "");
        let property = string_property("email")
            .column(ColumnOverride::named("#{#blank}"))
            .build();
        assert!(matches!(
            resolve_column_name(&property, Some(&context)),
            Err(MappingError::InvalidIdentifier { .. })
        ));
    }
}
