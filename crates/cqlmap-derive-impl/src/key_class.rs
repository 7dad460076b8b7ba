// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(PrimaryKeyClass)]` code generation.
//!
//! A primary-key class groups the columns of a composite key. Every mapped
//! field must carry `#[primary_key_column]`. The derive implements
//! `DescribeType` with the primary-key-class marker set, so an entity field
//! of this type is recognised as a composite key holder, and
//! `PrimaryKeyClass` listing the key columns.

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::parse::{MappedTypeAttrs, entity::mapped_fields};

/// Entry point for `#[derive(PrimaryKeyClass)]`.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(input: &DeriveInput) -> darling::Result<proc_macro2::TokenStream> {
    let attrs = MappedTypeAttrs::from_derive_input(input)?;
    let fields = mapped_fields(input)?;

    let mut errors = darling::Error::accumulator();
    for field in &fields {
        if field.key_column.is_none() {
            errors.push(
                darling::Error::custom(
                    "every field of a primary key class needs #[primary_key_column]"
                )
                .with_span(&field.ident)
            );
        }
    }
    errors.finish()?;

    let ident = &attrs.ident;
    let (impl_generics, ty_generics, where_clause) = attrs.generics.split_for_impl();
    let owner = ident.to_string();
    let descriptors = fields.iter().map(|field| field.descriptor_tokens(&owner));
    let describe = attrs.describe_type_impl(true);

    Ok(quote! {
        #describe

        impl #impl_generics ::cqlmap::PrimaryKeyClass for #ident #ty_generics #where_clause {
            fn key_properties() -> ::std::vec::Vec<::cqlmap::PropertyDescriptor> {
                ::std::vec![#(#descriptors),*]
            }
        }
    })
}
