// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use cqlmap_core::prelude::*;
//!
//! let context = MappingContext::new();
//! let property = PropertyDescriptor::builder("name", "User", String::type_info()).build();
//! assert_eq!(context.data_type(&property).unwrap(), DataType::Simple(CqlTag::Text));
//! ```

pub use crate::{
    CqlIdentifier, CqlTag, DataType, DescribeType, MappingContext, MappingError, MappingResult,
    PrimaryKeyClass, PropertyDescriptor, Table, TableMapping, TypeInfo,
    annotation::{Ordering, PrimaryKeyType}
};
