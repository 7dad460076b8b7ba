// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! CQL tag names accepted in `#[cql_type]`.
//!
//! Names are checked at compile time against [`CqlTag`] itself, so a typo is
//! a build error rather than a bootstrap failure. Each name expands to a
//! `::cqlmap::CqlTag` variant.

use cqlmap_core::CqlTag;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

/// A validated CQL tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag(CqlTag);

impl Tag {
    /// Look up a tag by its CQL name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        CqlTag::from_name(name).map(Self)
    }

    /// The runtime tag.
    pub fn cql(self) -> CqlTag {
        self.0
    }

    /// `::cqlmap::CqlTag::<Variant>` path.
    pub fn to_tokens(self) -> TokenStream {
        let variant = Ident::new(&format!("{:?}", self.0), Span::call_site());
        quote! { ::cqlmap::CqlTag::#variant }
    }
}
