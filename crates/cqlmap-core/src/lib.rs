// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type mapping and data-type resolution for CQL entities.
//!
//! This crate is the runtime half of `cqlmap`. It turns property
//! descriptors into column identifiers, CQL data types and primary-key
//! roles. The derive macros in `cqlmap` generate the descriptors; they can
//! also be built by hand.
//!
//! # Overview
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                          MappingContext                            │
//! ├────────────────────────────────────────────────────────────────────┤
//! │                                                                    │
//! │  PropertyDescriptor ──► DataTypeResolver ──► DataType              │
//! │        │                   │         │                             │
//! │        │          SimpleTypeRegistry  UserTypeResolver             │
//! │        │                                                           │
//! │        └────────► ColumnNameResolver ──► CqlIdentifier (cached)    │
//! │                      │          │                                  │
//! │              NamingStrategy  EvaluationContext                     │
//! │                                                                    │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`SimpleTypeRegistry`] maps Rust value types to CQL tags
//! - [`UserTypeResolver`] looks up user-defined types
//! - [`PropertyDescriptor`] holds a field's type, annotations and cached name
//! - [`DataTypeResolver`] decides data types
//! - [`ColumnNameResolver`] decides column identifiers
//! - [`MappingContext`] bundles the settings and describes whole tables
//!
//! # Usage
//!
//! ```rust
//! use cqlmap_core::{
//!     ColumnOverride, DescribeType, MappingContext, PropertyDescriptor
//! };
//!
//! let property = PropertyDescriptor::builder("emailAddress", "User", <Vec<String>>::type_info())
//!     .column(ColumnOverride::named("emails"))
//!     .build();
//!
//! let context = MappingContext::new();
//! assert_eq!(context.data_type(&property).unwrap().to_cql(), "list<text>");
//! assert_eq!(context.column_name(&property).unwrap().unwrap().to_cql(), "emails");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotation;
mod context;
mod data_type;
mod error;
pub mod expression;
mod identifier;
pub mod naming;
pub mod prelude;
mod property;
mod registry;
mod resolve;
mod table;
mod type_info;
mod udt;

pub use annotation::{
    Annotations, ColumnOverride, ExplicitType, Ordering, PrimaryKeyColumn, PrimaryKeyOverride,
    PrimaryKeyType
};
pub use context::{ColumnMapping, ColumnRole, MappingContext, MappingContextBuilder, TableMapping};
pub use data_type::{CqlTag, DataType};
pub use error::{MappingError, MappingResult, PropertyRef};
pub use expression::{EvaluationContext, EvaluationError, TemplateContext};
pub use identifier::{CqlIdentifier, is_reserved_keyword};
pub use naming::{
    ColumnNameResolver, NamingStrategy, PropertyNameStrategy, SnakeCaseStrategy,
    resolve_column_name
};
pub use property::{NamingOverride, PropertyDescriptor, PropertyDescriptorBuilder};
pub use registry::{SimpleTypeRegistry, SimpleTypeRegistryBuilder};
pub use resolve::{DataTypeResolver, resolve_data_type};
pub use table::{PrimaryKeyClass, Table};
pub use type_info::{DescribeType, TypeInfo, TypeShape};
pub use udt::{InMemoryUserTypeResolver, NoUserTypes, UserType, UserTypeField, UserTypeResolver};
