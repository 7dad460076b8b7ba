// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[primary_key_column]` parsing.
//!
//! # Supported Attributes
//!
//! | Attribute | Example | Default |
//! |-----------|---------|---------|
//! | `role` | `role = "partitioned"` | `"clustered"` |
//! | `ordering` | `ordering = "descending"` | `"ascending"` |
//! | `ordinal` | `ordinal = 1` | `0` |
//! | `name` | `name = "created_at"` | field name |
//! | `force_quote` | `force_quote` | off |

use cqlmap_core::{Ordering, PrimaryKeyType};
use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::quote;

use super::optional_string;

/// Key role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyRole(pub PrimaryKeyType);

impl FromMeta for KeyRole {
    fn from_string(value: &str) -> darling::Result<Self> {
        PrimaryKeyType::from_name(value)
            .map(Self)
            .ok_or_else(|| darling::Error::unknown_value(value))
    }
}

/// Clustering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOrdering(pub Ordering);

impl FromMeta for KeyOrdering {
    fn from_string(value: &str) -> darling::Result<Self> {
        Ordering::from_name(value)
            .map(Self)
            .ok_or_else(|| darling::Error::unknown_value(value))
    }
}

/// Parsed `#[primary_key_column(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromMeta)]
pub struct KeyColumnAttr {
    /// Column name or expression.
    #[darling(default)]
    pub name: Option<String>,

    /// Always quote the identifier.
    #[darling(default)]
    pub force_quote: bool,

    /// Partition or clustering.
    #[darling(default)]
    pub role: KeyRole,

    /// Clustering order.
    #[darling(default)]
    pub ordering: KeyOrdering,

    /// Position within the key.
    #[darling(default)]
    pub ordinal: u32
}

impl KeyColumnAttr {
    /// `::cqlmap::PrimaryKeyColumn { .. }` literal.
    pub fn tokens(&self) -> TokenStream {
        let name = optional_string(self.name.as_deref());
        let force_quote = self.force_quote;
        let ordinal = self.ordinal;
        let role = match self.role.0 {
            PrimaryKeyType::Partitioned => quote!(::cqlmap::PrimaryKeyType::Partitioned),
            PrimaryKeyType::Clustered => quote!(::cqlmap::PrimaryKeyType::Clustered)
        };
        let ordering = match self.ordering.0 {
            Ordering::Ascending => quote!(::cqlmap::Ordering::Ascending),
            Ordering::Descending => quote!(::cqlmap::Ordering::Descending)
        };

        quote! {
            ::cqlmap::PrimaryKeyColumn {
                name: #name,
                force_quote: #force_quote,
                role: #role,
                ordering: #ordering,
                ordinal: #ordinal
            }
        }
    }
}
