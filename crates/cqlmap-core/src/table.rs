// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity traits implemented by the derive macros.

use crate::{
    error::MappingResult, identifier::CqlIdentifier, property::PropertyDescriptor,
    type_info::DescribeType
};

/// A mapped entity.
///
/// Usually derived with `#[derive(Table)]`; a manual implementation only
/// needs the names and the property list.
///
/// # Example
///
/// ```rust
/// use cqlmap_core::{DescribeType, PropertyDescriptor, Table};
///
/// struct Tag;
///
/// impl Table for Tag {
///     const ENTITY_NAME: &'static str = "Tag";
///     const TABLE_NAME: &'static str = "tags";
///
///     fn properties() -> Vec<PropertyDescriptor> {
///         vec![
///             PropertyDescriptor::builder("label", "Tag", String::type_info()).build(),
///         ]
///     }
/// }
///
/// assert_eq!(Tag::table_identifier().unwrap().to_cql(), "tags");
/// ```
pub trait Table {
    /// Rust type name.
    const ENTITY_NAME: &'static str;

    /// Table name or name expression.
    const TABLE_NAME: &'static str;

    /// Always quote the table name.
    const FORCE_QUOTE: bool = false;

    /// Fresh descriptors for every mapped field, in declaration order.
    fn properties() -> Vec<PropertyDescriptor>;

    /// Table identifier from the literal table name.
    ///
    /// # Errors
    ///
    /// [`MappingError::InvalidIdentifier`](crate::MappingError::InvalidIdentifier)
    /// if the name is empty.
    fn table_identifier() -> MappingResult<CqlIdentifier> {
        CqlIdentifier::new(Self::TABLE_NAME, Self::FORCE_QUOTE)
    }
}

/// A composite primary key type.
///
/// Derived with `#[derive(PrimaryKeyClass)]`, which also implements
/// [`DescribeType`] with the primary-key-class marker set.
pub trait PrimaryKeyClass: DescribeType {
    /// Descriptors of the key columns, in declaration order.
    fn key_properties() -> Vec<PropertyDescriptor>;
}
