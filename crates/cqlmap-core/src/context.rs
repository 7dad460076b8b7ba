// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapping configuration and table bootstrap.
//!
//! [`MappingContext`] bundles everything resolution needs:
//!
//! | Setting | Default |
//! |---------|---------|
//! | simple-type registry | [`SimpleTypeRegistry::standard`] |
//! | user-type resolver | [`NoUserTypes`] |
//! | naming strategy | [`PropertyNameStrategy`] |
//! | evaluation context | none, overrides are literal |
//!
//! [`MappingContext::describe`] resolves every property of an entity and
//! stops at the first failure, so configuration defects surface when the
//! application starts rather than on first use.

use std::sync::Arc;

use tracing::debug;

use crate::{
    annotation::{Ordering, PrimaryKeyType},
    data_type::DataType,
    error::{MappingError, MappingResult},
    expression::EvaluationContext,
    identifier::CqlIdentifier,
    naming::{ColumnNameResolver, NamingStrategy, PropertyNameStrategy},
    property::PropertyDescriptor,
    registry::SimpleTypeRegistry,
    resolve::DataTypeResolver,
    table::Table,
    udt::{NoUserTypes, UserTypeResolver}
};

/// Resolution settings shared by every entity.
///
/// Cheap to clone; settings are reference counted.
///
/// # Example
///
/// ```rust
/// use cqlmap_core::{
///     CqlTag, DescribeType, MappingContext, PropertyDescriptor, SimpleTypeRegistry,
///     SnakeCaseStrategy
/// };
///
/// let context = MappingContext::builder()
///     .registry(SimpleTypeRegistry::builder().alias("Email", CqlTag::Text).build())
///     .naming_strategy(SnakeCaseStrategy)
///     .build();
///
/// let property = PropertyDescriptor::builder("createdAt", "Post", i64::type_info()).build();
/// assert_eq!(context.column_name(&property).unwrap().unwrap().to_cql(), "created_at");
/// assert_eq!(context.data_type(&property).unwrap().to_cql(), "bigint");
/// ```
#[derive(Clone)]
pub struct MappingContext {
    registry:   Arc<SimpleTypeRegistry>,
    user_types: Arc<dyn UserTypeResolver>,
    naming:     Arc<dyn NamingStrategy>,
    evaluation: Option<Arc<dyn EvaluationContext>>
}

impl MappingContext {
    /// Context with every default.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a context.
    #[must_use]
    pub fn builder() -> MappingContextBuilder {
        MappingContextBuilder::default()
    }

    /// Simple-type registry in use.
    #[must_use]
    pub fn registry(&self) -> &SimpleTypeRegistry {
        &self.registry
    }

    /// Data type of `property`.
    ///
    /// # Errors
    ///
    /// See [`DataTypeResolver::resolve`].
    pub fn data_type(&self, property: &PropertyDescriptor) -> MappingResult<DataType> {
        DataTypeResolver::new(&self.registry, self.user_types.as_ref()).resolve(property)
    }

    /// Column identifier of `property`; `None` for a composite primary key.
    ///
    /// # Errors
    ///
    /// See [`ColumnNameResolver::resolve`].
    pub fn column_name(&self, property: &PropertyDescriptor) -> MappingResult<Option<CqlIdentifier>> {
        ColumnNameResolver::new(self.naming.as_ref(), self.evaluation.as_deref()).resolve(property)
    }

    /// Table identifier of `T`, evaluating the name when a context is set.
    ///
    /// # Errors
    ///
    /// - [`MappingError::TableNameEvaluation`] when the expression fails
    /// - [`MappingError::InvalidIdentifier`] for an empty name
    pub fn table_name<T: Table>(&self) -> MappingResult<CqlIdentifier> {
        match &self.evaluation {
            Some(context) if T::TABLE_NAME.contains("#{") => {
                let text = context.evaluate(T::TABLE_NAME).map_err(|source| {
                    MappingError::TableNameEvaluation {
                        expression: T::TABLE_NAME.to_string(),
                        entity: T::ENTITY_NAME.to_string(),
                        source
                    }
                })?;
                CqlIdentifier::new(text, T::FORCE_QUOTE)
            }
            _ => T::table_identifier()
        }
    }

    /// Resolve every property of `T`.
    ///
    /// # Errors
    ///
    /// The first [`MappingError`] raised by validation,
    /// naming or type resolution.
    pub fn describe<T: Table>(&self) -> MappingResult<TableMapping> {
        let table = self.table_name::<T>()?;
        let mut columns = Vec::new();

        for property in T::properties() {
            property.validate()?;
            self.column_name(&property)?;

            let data_type = if property.is_composite_primary_key() {
                None
            } else {
                Some(self.data_type(&property)?)
            };

            columns.push(ColumnMapping {
                property,
                data_type
            });
        }

        debug!(
            entity = T::ENTITY_NAME,
            table = %table,
            columns = columns.len(),
            "described table"
        );

        Ok(TableMapping {
            entity: T::ENTITY_NAME,
            table,
            columns
        })
    }
}

impl Default for MappingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MappingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingContext")
            .field("registry", &self.registry)
            .field("evaluation", &self.evaluation.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`MappingContext`].
#[derive(Default)]
pub struct MappingContextBuilder {
    registry:   Option<Arc<SimpleTypeRegistry>>,
    user_types: Option<Arc<dyn UserTypeResolver>>,
    naming:     Option<Arc<dyn NamingStrategy>>,
    evaluation: Option<Arc<dyn EvaluationContext>>
}

impl MappingContextBuilder {
    /// Use a custom registry.
    #[must_use]
    pub fn registry(mut self, registry: SimpleTypeRegistry) -> Self {
        self.registry = Some(Arc::new(registry));
        self
    }

    /// Resolve user-defined types with `resolver`.
    #[must_use]
    pub fn user_types(mut self, resolver: impl UserTypeResolver + 'static) -> Self {
        self.user_types = Some(Arc::new(resolver));
        self
    }

    /// Default column names with `strategy`.
    #[must_use]
    pub fn naming_strategy(mut self, strategy: impl NamingStrategy + 'static) -> Self {
        self.naming = Some(Arc::new(strategy));
        self
    }

    /// Evaluate naming overrides with `context`.
    #[must_use]
    pub fn evaluation_context(mut self, context: impl EvaluationContext + 'static) -> Self {
        self.evaluation = Some(Arc::new(context));
        self
    }

    /// Finish the context.
    #[must_use]
    pub fn build(self) -> MappingContext {
        MappingContext {
            registry:   self
                .registry
                .unwrap_or_else(|| Arc::new(SimpleTypeRegistry::default())),
            user_types: self.user_types.unwrap_or_else(|| Arc::new(NoUserTypes)),
            naming:     self
                .naming
                .unwrap_or_else(|| Arc::new(PropertyNameStrategy)),
            evaluation: self.evaluation
        }
    }
}

/// Role of a mapped column in the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// Not part of the key.
    Regular,

    /// Simple identifier, the whole primary key.
    Identifier,

    /// Holder of a composite key; contributes no column of its own.
    CompositeKey,

    /// Partition key column.
    PartitionKey {
        /// Position within the partition key.
        ordinal: u32
    },

    /// Clustering column.
    ClusteringKey {
        /// Position among clustering columns.
        ordinal:  u32,
        /// Clustering order.
        ordering: Ordering
    }
}

/// One resolved property.
#[derive(Debug)]
pub struct ColumnMapping {
    property:  PropertyDescriptor,
    data_type: Option<DataType>
}

impl ColumnMapping {
    /// The descriptor, with its column name cached.
    #[must_use]
    pub const fn property(&self) -> &PropertyDescriptor {
        &self.property
    }

    /// Column identifier with the current force-quote flag applied.
    #[must_use]
    pub fn column(&self) -> Option<CqlIdentifier> {
        self.property.cached_column_name()
    }

    /// Data type; `None` for a composite key holder.
    #[must_use]
    pub const fn data_type(&self) -> Option<&DataType> {
        self.data_type.as_ref()
    }

    /// Primary-key role.
    #[must_use]
    pub fn role(&self) -> ColumnRole {
        let property = &self.property;

        if property.is_composite_primary_key() {
            return ColumnRole::CompositeKey;
        }

        match (
            property.key_role(),
            property.primary_key_ordinal(),
            property.primary_key_ordering()
        ) {
            (Some(PrimaryKeyType::Partitioned), Some(ordinal), _) => {
                ColumnRole::PartitionKey {
                    ordinal
                }
            }
            (Some(PrimaryKeyType::Clustered), Some(ordinal), Some(ordering)) => {
                ColumnRole::ClusteringKey {
                    ordinal,
                    ordering
                }
            }
            _ if property.is_identifier() => ColumnRole::Identifier,
            _ => ColumnRole::Regular
        }
    }
}

/// Resolved mapping of one entity.
#[derive(Debug)]
pub struct TableMapping {
    entity:  &'static str,
    table:   CqlIdentifier,
    columns: Vec<ColumnMapping>
}

impl TableMapping {
    /// Rust type name of the entity.
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }

    /// Table identifier.
    #[must_use]
    pub const fn table(&self) -> &CqlIdentifier {
        &self.table
    }

    /// Every mapped property, in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnMapping] {
        &self.columns
    }

    /// Mapping of the property named `name`.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnMapping> {
        self.columns
            .iter()
            .find(|column| column.property.name() == name)
    }

    /// Partition key columns ordered by ordinal.
    #[must_use]
    pub fn partition_key(&self) -> Vec<&ColumnMapping> {
        self.key_columns(|role| match role {
            ColumnRole::PartitionKey {
                ordinal
            } => Some(ordinal),
            _ => None
        })
    }

    /// Clustering columns ordered by ordinal.
    #[must_use]
    pub fn clustering_columns(&self) -> Vec<&ColumnMapping> {
        self.key_columns(|role| match role {
            ColumnRole::ClusteringKey {
                ordinal, ..
            } => Some(ordinal),
            _ => None
        })
    }

    fn key_columns(&self, ordinal: impl Fn(ColumnRole) -> Option<u32>) -> Vec<&ColumnMapping> {
        let mut keyed: Vec<_> = self
            .columns
            .iter()
            .filter_map(|column| ordinal(column.role()).map(|position| (position, column)))
            .collect();
        keyed.sort_by_key(|(position, _)| *position);
        keyed.into_iter().map(|(_, column)| column).collect()
    }
}
