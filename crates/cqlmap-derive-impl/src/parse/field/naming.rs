// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[column]` and `#[primary_key]` naming overrides.
//!
//! # Supported Attributes
//!
//! | Attribute | Example | Effect |
//! |-----------|---------|--------|
//! | bare | `#[column]` | default name |
//! | `name` | `#[column(name = "email_address")]` | literal or `#{...}` expression |
//! | `force_quote` | `#[primary_key(force_quote)]` | always quote |

use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::quote;

use super::optional_string;

/// Name and quoting of a column or primary key override.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromMeta)]
pub struct NamingAttr {
    /// Column name or expression.
    #[darling(default)]
    pub name: Option<String>,

    /// Always quote the identifier.
    #[darling(default)]
    pub force_quote: bool
}

impl NamingAttr {
    /// `::cqlmap::ColumnOverride { .. }` literal.
    pub fn column_tokens(&self) -> TokenStream {
        let name = optional_string(self.name.as_deref());
        let force_quote = self.force_quote;
        quote! {
            ::cqlmap::ColumnOverride {
                name: #name,
                force_quote: #force_quote
            }
        }
    }

    /// `::cqlmap::PrimaryKeyOverride { .. }` literal.
    pub fn primary_key_tokens(&self) -> TokenStream {
        let name = optional_string(self.name.as_deref());
        let force_quote = self.force_quote;
        quote! {
            ::cqlmap::PrimaryKeyOverride {
                name: #name,
                force_quote: #force_quote
            }
        }
    }
}
