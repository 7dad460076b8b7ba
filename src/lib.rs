// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

// Re-export all core types
pub use cqlmap_core::*;
// Re-export derive macros
#[cfg(feature = "derive")]
pub use cqlmap_derive_impl::{MappedType, PrimaryKeyClass, Table};
