// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property descriptors.
//!
//! A [`PropertyDescriptor`] describes one mapped field: its name, owning
//! entity, declared type and annotations. It is built once when the entity
//! is registered and is immutable afterwards, except for two memoized
//! values:
//!
//! - the resolved column name, computed on first request and stored with
//!   first-writer-wins semantics;
//! - the force-quote override set through
//!   [`PropertyDescriptor::set_force_quote`].
//!
//! The cache keeps the *unquoted* text of the resolved identifier, after case
//! folding. The identifier handed out is rebuilt from that text and the
//! effective force-quote flag on every read, so changing the flag after
//! resolution never re-runs naming and never accumulates quotes.
//!
//! # Role Classification
//!
//! | Predicate | True when |
//! |-----------|-----------|
//! | [`is_composite_primary_key`] | declared type, or a supertype, is a primary-key class |
//! | [`is_primary_key_column`] | `#[primary_key_column]` is present |
//! | [`is_partition_key_column`] | role is partitioned |
//! | [`is_cluster_key_column`] | role is clustered |
//!
//! [`is_composite_primary_key`]: PropertyDescriptor::is_composite_primary_key
//! [`is_primary_key_column`]: PropertyDescriptor::is_primary_key_column
//! [`is_partition_key_column`]: PropertyDescriptor::is_partition_key_column
//! [`is_cluster_key_column`]: PropertyDescriptor::is_cluster_key_column

use std::sync::{
    PoisonError, RwLock,
    atomic::{AtomicU8, Ordering as AtomicOrdering}
};

use tracing::debug;

use crate::{
    annotation::{
        Annotations, ColumnOverride, ExplicitType, Ordering, PrimaryKeyColumn,
        PrimaryKeyOverride, PrimaryKeyType
    },
    error::{MappingError, MappingResult, PropertyRef},
    identifier::CqlIdentifier,
    type_info::TypeInfo
};

const FORCE_QUOTE_UNSET: u8 = 0;
const FORCE_QUOTE_OFF: u8 = 1;
const FORCE_QUOTE_ON: u8 = 2;

const fn encode_force_quote(force_quote: bool) -> u8 {
    if force_quote {
        FORCE_QUOTE_ON
    } else {
        FORCE_QUOTE_OFF
    }
}

/// Memoized outcome of column naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResolvedName {
    /// Unquoted column text.
    Column(String),

    /// Composite primary key holder; maps to no single column.
    Composite
}

/// The naming annotation that applies to a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingOverride<'a> {
    /// Name or expression, if one was given.
    pub name: Option<&'a str>,

    /// Force-quote flag of the annotation.
    pub force_quote: bool
}

impl<'a> NamingOverride<'a> {
    /// Non-blank override text.
    #[must_use]
    pub fn text(&self) -> Option<&'a str> {
        self.name.filter(|name| !name.trim().is_empty())
    }
}

/// One mapped field of an entity.
///
/// # Example
///
/// ```rust
/// use cqlmap_core::{
///     ColumnOverride, DescribeType, PropertyDescriptor, PrimaryKeyColumn
/// };
///
/// let email = PropertyDescriptor::builder("email", "User", String::type_info())
///     .column(ColumnOverride::named("email_address"))
///     .build();
/// assert!(!email.is_primary_key_column());
///
/// let tenant = PropertyDescriptor::builder("tenant", "User", String::type_info())
///     .primary_key_column(PrimaryKeyColumn::partitioned(0))
///     .build();
/// assert!(tenant.is_partition_key_column());
/// ```
#[derive(Debug)]
pub struct PropertyDescriptor {
    name:          String,
    owner:         String,
    declared_type: TypeInfo,
    annotations:   Annotations,
    identifier:    bool,
    column_name:   RwLock<Option<ResolvedName>>,
    force_quote:   AtomicU8
}

impl PropertyDescriptor {
    /// Start describing property `name` of entity `owner`.
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        owner: impl Into<String>,
        declared_type: TypeInfo
    ) -> PropertyDescriptorBuilder {
        PropertyDescriptorBuilder {
            name: name.into(),
            owner: owner.into(),
            declared_type,
            annotations: Annotations::default(),
            identifier: false
        }
    }

    /// Property name as declared.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning entity name.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Declared type.
    #[must_use]
    pub const fn declared_type(&self) -> &TypeInfo {
        &self.declared_type
    }

    /// Generic arguments of the declared type, in declaration order.
    #[must_use]
    pub fn type_arguments(&self) -> &[TypeInfo] {
        self.declared_type.type_arguments()
    }

    /// All annotations.
    #[must_use]
    pub const fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    /// `#[cql_type]` override.
    #[must_use]
    pub const fn explicit_type(&self) -> Option<&ExplicitType> {
        self.annotations.explicit_type.as_ref()
    }

    /// Whether this is the entity's identifier property.
    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        self.identifier
    }

    /// Diagnostic reference used in errors.
    #[must_use]
    pub fn property_ref(&self) -> PropertyRef {
        PropertyRef {
            name:          self.name.clone(),
            declared_type: self.declared_type.to_string(),
            owner:         self.owner.clone()
        }
    }

    /// Whether the property holds a composite primary key.
    #[must_use]
    pub fn is_composite_primary_key(&self) -> bool {
        self.declared_type.has_primary_key_class_marker()
    }

    /// Whether the property is a primary-key column.
    #[must_use]
    pub const fn is_primary_key_column(&self) -> bool {
        self.annotations.primary_key_column.is_some()
    }

    /// Whether the property is part of the partition key.
    #[must_use]
    pub fn is_partition_key_column(&self) -> bool {
        self.key_role() == Some(PrimaryKeyType::Partitioned)
    }

    /// Whether the property is a clustering column.
    #[must_use]
    pub fn is_cluster_key_column(&self) -> bool {
        self.key_role() == Some(PrimaryKeyType::Clustered)
    }

    /// Key role, if this is a primary-key column.
    #[must_use]
    pub fn key_role(&self) -> Option<PrimaryKeyType> {
        self.key_column().map(|column| column.role)
    }

    /// Clustering order, present iff this is a primary-key column.
    #[must_use]
    pub fn primary_key_ordering(&self) -> Option<Ordering> {
        self.key_column().map(|column| column.ordering)
    }

    /// Position within the primary key.
    #[must_use]
    pub fn primary_key_ordinal(&self) -> Option<u32> {
        self.key_column().map(|column| column.ordinal)
    }

    const fn key_column(&self) -> Option<&PrimaryKeyColumn> {
        self.annotations.primary_key_column.as_ref()
    }

    /// The naming annotation that applies, by precedence.
    ///
    /// The identifier property only honours `#[primary_key]` and never falls
    /// through to `#[column]`. Otherwise a key column uses its
    /// `#[primary_key_column]` and any other property its `#[column]`.
    #[must_use]
    pub fn naming_override(&self) -> Option<NamingOverride<'_>> {
        if self.identifier {
            return self
                .annotations
                .primary_key
                .as_ref()
                .map(|key| NamingOverride {
                    name:        key.name.as_deref(),
                    force_quote: key.force_quote
                });
        }

        if let Some(column) = self.key_column() {
            return Some(NamingOverride {
                name:        column.name.as_deref(),
                force_quote: column.force_quote
            });
        }

        self.annotations.column.as_ref().map(|column| NamingOverride {
            name:        column.name.as_deref(),
            force_quote: column.force_quote
        })
    }

    /// Force-quote flag currently in effect.
    ///
    /// An explicit [`set_force_quote`](Self::set_force_quote) wins over the
    /// annotation.
    #[must_use]
    pub fn effective_force_quote(&self) -> bool {
        match self.force_quote.load(AtomicOrdering::Acquire) {
            FORCE_QUOTE_ON => true,
            FORCE_QUOTE_OFF => false,
            _ => self
                .naming_override()
                .is_some_and(|naming| naming.force_quote)
        }
    }

    /// Change the force-quote flag.
    ///
    /// Returns whether the flag changed; the first call always counts as a
    /// change. A cached column name is re-quoted from its unquoted text.
    pub fn set_force_quote(&self, force_quote: bool) -> bool {
        let encoded = encode_force_quote(force_quote);
        let previous = self.force_quote.swap(encoded, AtomicOrdering::AcqRel);
        let changed = previous != encoded;

        if changed {
            debug!(
                property = %self.name,
                owner = %self.owner,
                force_quote,
                "force quote changed"
            );
        }

        changed
    }

    /// Replace the column name. Last write wins.
    pub fn set_column_name(&self, column: &CqlIdentifier) {
        let mut slot = self
            .column_name
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(ResolvedName::Column(column.unquoted().to_string()));
        self.force_quote
            .store(encode_force_quote(column.is_quoted()), AtomicOrdering::Release);
    }

    /// Column name, if it has been resolved.
    ///
    /// `None` before resolution and for composite primary keys.
    #[must_use]
    pub fn cached_column_name(&self) -> Option<CqlIdentifier> {
        self.cached_resolution().and_then(|name| self.identifier_for(&name))
    }

    pub(crate) fn cached_resolution(&self) -> Option<ResolvedName> {
        self.column_name
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Resolution outcome for raw column `text`, folded under the current
    /// force-quote flag.
    pub(crate) fn column_resolution(&self, text: String) -> ResolvedName {
        let identifier = CqlIdentifier::from_valid(text, self.effective_force_quote());
        ResolvedName::Column(identifier.unquoted().to_string())
    }

    /// Store `resolved` unless another caller stored first; returns the
    /// value that ended up in the cache.
    pub(crate) fn store_resolution(&self, resolved: ResolvedName) -> ResolvedName {
        let mut slot = self
            .column_name
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        slot.get_or_insert(resolved).clone()
    }

    pub(crate) fn identifier_for(&self, resolved: &ResolvedName) -> Option<CqlIdentifier> {
        match resolved {
            ResolvedName::Column(text) => Some(CqlIdentifier::from_valid(
                text.clone(),
                self.effective_force_quote()
            )),
            ResolvedName::Composite => None
        }
    }

    /// Reject contradictory annotations.
    ///
    /// # Errors
    ///
    /// [`MappingError::ConflictingMapping`] when a composite primary key
    /// holder also carries a key column role or an explicit data type.
    pub fn validate(&self) -> MappingResult<()> {
        if !self.is_composite_primary_key() {
            return Ok(());
        }

        if self.is_primary_key_column() {
            return Err(MappingError::ConflictingMapping {
                property: self.property_ref(),
                reason:   "a composite primary key cannot also be a primary key column"
            });
        }

        if self.explicit_type().is_some() {
            return Err(MappingError::ConflictingMapping {
                property: self.property_ref(),
                reason:   "a composite primary key cannot declare an explicit data type"
            });
        }

        Ok(())
    }
}

/// Builder for [`PropertyDescriptor`].
#[derive(Debug, Clone)]
pub struct PropertyDescriptorBuilder {
    name:          String,
    owner:         String,
    declared_type: TypeInfo,
    annotations:   Annotations,
    identifier:    bool
}

impl PropertyDescriptorBuilder {
    /// Replace every annotation at once.
    #[must_use]
    pub fn annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// `#[cql_type]`.
    #[must_use]
    pub fn explicit_type(mut self, explicit_type: ExplicitType) -> Self {
        self.annotations.explicit_type = Some(explicit_type);
        self
    }

    /// `#[column]`.
    #[must_use]
    pub fn column(mut self, column: ColumnOverride) -> Self {
        self.annotations.column = Some(column);
        self
    }

    /// `#[primary_key]`; marks the property as the identifier.
    #[must_use]
    pub fn primary_key(mut self, primary_key: PrimaryKeyOverride) -> Self {
        self.annotations.primary_key = Some(primary_key);
        self.identifier = true;
        self
    }

    /// `#[primary_key_column]`.
    #[must_use]
    pub fn primary_key_column(mut self, column: PrimaryKeyColumn) -> Self {
        self.annotations.primary_key_column = Some(column);
        self
    }

    /// Mark or unmark the property as the identifier.
    #[must_use]
    pub const fn identifier(mut self, identifier: bool) -> Self {
        self.identifier = identifier;
        self
    }

    /// Finish the descriptor.
    #[must_use]
    pub fn build(self) -> PropertyDescriptor {
        let identifier = self.identifier || self.annotations.primary_key.is_some();
        PropertyDescriptor {
            name: self.name,
            owner: self.owner,
            declared_type: self.declared_type,
            annotations: self.annotations,
            identifier,
            column_name: RwLock::new(None),
            force_quote: AtomicU8::new(FORCE_QUOTE_UNSET)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data_type::CqlTag, type_info::DescribeType};

    fn string_property(name: &str) -> PropertyDescriptorBuilder {
        PropertyDescriptor::builder(name, "Person", String::type_info())
    }

    #[test]
    fn identifier_uses_primary_key_only() {
        let property = string_property("id")
            .identifier(true)
            .column(ColumnOverride::named("ignored"))
            .build();
        assert_eq!(property.naming_override(), None);

        let property = string_property("id")
            .primary_key(PrimaryKeyOverride {
                name:        Some("person_id".to_string()),
                force_quote: true
            })
            .build();
        assert!(property.is_identifier());
        assert_eq!(
            property.naming_override(),
            Some(NamingOverride {
                name:        Some("person_id"),
                force_quote: true
            })
        );
    }

    #[test]
    fn key_column_wins_over_column() {
        let property = string_property("tenant")
            .primary_key_column(PrimaryKeyColumn::partitioned(0).named("tenant_id"))
            .column(ColumnOverride::named("other"))
            .build();
        assert_eq!(
            property.naming_override().and_then(|n| n.text()),
            Some("tenant_id")
        );
    }

    #[test]
    fn blank_override_has_no_text() {
        let property = string_property("name")
            .column(ColumnOverride::named("   "))
            .build();
        assert_eq!(property.naming_override().and_then(|n| n.text()), None);
    }

    #[test]
    fn key_roles() {
        let partition = string_property("tenant")
            .primary_key_column(PrimaryKeyColumn::partitioned(0))
            .build();
        assert!(partition.is_primary_key_column());
        assert!(partition.is_partition_key_column());
        assert!(!partition.is_cluster_key_column());
        assert_eq!(partition.primary_key_ordering(), Some(Ordering::Ascending));
        assert_eq!(partition.primary_key_ordinal(), Some(0));

        let cluster = string_property("created")
            .primary_key_column(PrimaryKeyColumn::clustered(1, Ordering::Descending))
            .build();
        assert!(cluster.is_cluster_key_column());
        assert_eq!(cluster.primary_key_ordering(), Some(Ordering::Descending));

        let plain = string_property("bio").build();
        assert!(!plain.is_primary_key_column());
        assert_eq!(plain.primary_key_ordering(), None);
        assert_eq!(plain.primary_key_ordinal(), None);
    }

    #[test]
    fn composite_key_through_supertype() {
        let key = TypeInfo::plain("PersonKey")
            .extends(TypeInfo::plain("BaseKey").mark_primary_key_class());
        let property = PropertyDescriptor::builder("key", "Person", key)
            .identifier(true)
            .build();
        assert!(property.is_composite_primary_key());
        assert!(property.validate().is_ok());
    }

    #[test]
    fn validate_rejects_conflicts() {
        let key = TypeInfo::plain("PersonKey").mark_primary_key_class();

        let with_role = PropertyDescriptor::builder("key", "Person", key.clone())
            .primary_key_column(PrimaryKeyColumn::partitioned(0))
            .build();
        assert!(matches!(
            with_role.validate(),
            Err(MappingError::ConflictingMapping { .. })
        ));

        let with_type = PropertyDescriptor::builder("key", "Person", key)
            .explicit_type(ExplicitType::new(CqlTag::Text))
            .build();
        assert!(matches!(
            with_type.validate(),
            Err(MappingError::ConflictingMapping { .. })
        ));
    }

    #[test]
    fn first_set_force_quote_is_a_change() {
        let property = string_property("name").build();
        assert!(property.set_force_quote(false));
        assert!(!property.set_force_quote(false));
        assert!(property.set_force_quote(true));
        assert!(property.effective_force_quote());
    }

    #[test]
    fn effective_force_quote_defaults_to_annotation() {
        let property = string_property("name")
            .column(ColumnOverride {
                name:        None,
                force_quote: true
            })
            .build();
        assert!(property.effective_force_quote());
        property.set_force_quote(false);
        assert!(!property.effective_force_quote());
    }

    #[test]
    fn cache_is_first_writer_wins() {
        let property = string_property("name").build();
        assert_eq!(property.cached_column_name(), None);

        let first = property.store_resolution(property.column_resolution("firstName".to_string()));
        let second = property.store_resolution(property.column_resolution("other".to_string()));
        assert_eq!(first, second);
        assert_eq!(first, ResolvedName::Column("firstname".to_string()));
        assert_eq!(property.cached_column_name().unwrap().to_cql(), "firstname");

        property.set_force_quote(true);
        assert_eq!(
            property.cached_column_name().unwrap().to_cql(),
            "\"firstname\""
        );
    }

    #[test]
    fn quoted_resolution_keeps_case() {
        let property = string_property("name")
            .column(ColumnOverride {
                name:        Some("DisplayName".to_string()),
                force_quote: true
            })
            .build();
        assert_eq!(
            property.column_resolution("DisplayName".to_string()),
            ResolvedName::Column("DisplayName".to_string())
        );
    }

    #[test]
    fn set_column_name_replaces() {
        let property = string_property("name").build();
        property.store_resolution(ResolvedName::Column("name".to_string()));

        let renamed = CqlIdentifier::new("DisplayName", true).unwrap();
        property.set_column_name(&renamed);
        assert_eq!(property.cached_column_name(), Some(renamed));
    }

    #[test]
    fn property_ref_renders_declared_type() {
        let property = PropertyDescriptor::builder("tags", "Post", <Vec<String>>::type_info()).build();
        assert_eq!(property.property_ref().declared_type, "Vec<String>");
    }
}
