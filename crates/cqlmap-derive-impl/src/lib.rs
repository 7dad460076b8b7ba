// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Derive macros for `cqlmap`.
//!
//! Use the `cqlmap` crate instead of depending on this one directly; the
//! generated code refers to `::cqlmap` paths.
//!
//! # Attribute Quick Reference
//!
//! ## Struct-Level
//!
//! ```rust,ignore
//! #[derive(Table)]
//! #[table(
//!     name = "users",   // Optional: defaults to the struct name in snake_case
//!     force_quote       // Optional: always quote the table name
//! )]
//! pub struct User { /* ... */ }
//!
//! #[derive(PrimaryKeyClass)]
//! #[mapped_type(extends = "BaseKey")] // Optional: supertype
//! pub struct UserKey { /* ... */ }
//!
//! #[derive(MappedType)]
//! #[mapped_type(name = "Email")]      // Optional: registry name
//! pub struct Email(String);
//! ```
//!
//! ## Field-Level
//!
//! ```rust,ignore
//! pub struct User {
//!     #[id]                                        // Identifier, default name
//!     pub id: Uuid,
//!
//!     #[column(name = "email_address")]            // Column name
//!     pub email: String,
//!
//!     #[column(name = "#{#tenant}_notes")]         // Name expression
//!     pub notes: String,
//!
//!     #[primary_key_column(role = "partitioned")] // Key column
//!     pub region: String,
//!
//!     #[cql_type(name = "set", type_arguments(ascii))] // Explicit data type
//!     pub tags: Vec<String>,
//!
//!     #[transient]                                 // Not mapped
//!     pub cache: Option<String>,
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod key_class;
mod mapped_type;
mod parse;
mod table;
mod tag;

use proc_macro::TokenStream;

/// Derive `cqlmap::Table` for a struct with named fields.
///
/// Each non-`#[transient]` field becomes a `PropertyDescriptor`; its type
/// must implement `cqlmap::DescribeType`.
///
/// # Example
///
/// ```rust,ignore
/// use cqlmap::{MappingContext, Table};
///
/// #[derive(Table)]
/// #[table(name = "events")]
/// pub struct Event {
///     #[primary_key_column(role = "partitioned")]
///     pub source: String,
///     #[primary_key_column(ordinal = 1, ordering = "descending")]
///     pub occurred_at: i64,
///     pub payload: Vec<String>,
/// }
///
/// let mapping = MappingContext::new().describe::<Event>()?;
/// ```
#[proc_macro_derive(
    Table,
    attributes(table, id, primary_key, column, primary_key_column, cql_type, transient)
)]
pub fn derive_table(input: TokenStream) -> TokenStream {
    table::derive(input)
}

/// Derive `cqlmap::PrimaryKeyClass` and `cqlmap::DescribeType` for a
/// composite primary key.
///
/// Every mapped field needs `#[primary_key_column]`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(PrimaryKeyClass)]
/// pub struct OrderKey {
///     #[primary_key_column(role = "partitioned")]
///     pub customer: String,
///     #[primary_key_column(ordinal = 1, ordering = "descending")]
///     pub placed_at: i64,
/// }
/// ```
#[proc_macro_derive(
    PrimaryKeyClass,
    attributes(mapped_type, primary_key_column, column, cql_type, transient)
)]
pub fn derive_primary_key_class(input: TokenStream) -> TokenStream {
    key_class::derive(input)
}

/// Derive `cqlmap::DescribeType` for a user type.
///
/// The type is described by name, so it resolves only through a registry
/// alias, an explicit `#[cql_type]`, or as a composite key through its
/// supertype.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(MappedType)]
/// pub struct Email(String);
///
/// let registry = SimpleTypeRegistry::builder().alias("Email", CqlTag::Text).build();
/// ```
#[proc_macro_derive(MappedType, attributes(mapped_type))]
pub fn derive_mapped_type(input: TokenStream) -> TokenStream {
    mapped_type::derive(input)
}
