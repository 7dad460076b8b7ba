// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[mapped_type(...)]` parsing for `DescribeType` implementations.
//!
//! | Attribute | Default | Description |
//! |-----------|---------|-------------|
//! | `name` | type name | name looked up in the simple-type registry |
//! | `extends` | none | supertype, itself `DescribeType` |

use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Ident, Path};

/// Parsed `#[mapped_type(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(mapped_type), supports(struct_any, enum_any))]
pub struct MappedTypeAttrs {
    /// Type identifier.
    pub ident: Ident,

    /// Type generics.
    pub generics: Generics,

    /// Registered type name.
    #[darling(default)]
    pub name: Option<String>,

    /// Supertype.
    #[darling(default)]
    pub extends: Option<Path>
}

impl MappedTypeAttrs {
    /// `DescribeType` impl, marking the type as a primary-key class when
    /// `primary_key_class` is set.
    pub fn describe_type_impl(&self, primary_key_class: bool) -> TokenStream {
        let ident = &self.ident;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let name = self.name.clone().unwrap_or_else(|| ident.to_string());

        let marker = primary_key_class.then(|| quote!(.mark_primary_key_class()));
        let extends = self
            .extends
            .as_ref()
            .map(|parent| quote!(.extends(<#parent as ::cqlmap::DescribeType>::type_info())));

        quote! {
            impl #impl_generics ::cqlmap::DescribeType for #ident #ty_generics #where_clause {
                fn type_info() -> ::cqlmap::TypeInfo {
                    ::cqlmap::TypeInfo::plain(#name) #marker #extends
                }
            }
        }
    }
}
