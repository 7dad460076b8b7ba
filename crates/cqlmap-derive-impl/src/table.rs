// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(Table)]` code generation.
//!
//! For
//!
//! ```rust,ignore
//! #[derive(Table)]
//! #[table(name = "users")]
//! pub struct User {
//!     #[id]
//!     pub id: Uuid,
//!     #[column(name = "email_address")]
//!     pub email: String,
//! }
//! ```
//!
//! the macro implements `::cqlmap::Table` with one `PropertyDescriptor` per
//! non-transient field. Field types must implement `DescribeType`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::parse::EntityDef;

/// Entry point for `#[derive(Table)]`.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(entity: &EntityDef) -> proc_macro2::TokenStream {
    let ident = &entity.ident;
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();
    let entity_name = entity.name_str();
    let table = &entity.table;
    let force_quote = entity.force_quote;
    let descriptors = entity
        .fields
        .iter()
        .map(|field| field.descriptor_tokens(&entity_name));

    quote! {
        impl #impl_generics ::cqlmap::Table for #ident #ty_generics #where_clause {
            const ENTITY_NAME: &'static str = #entity_name;
            const TABLE_NAME: &'static str = #table;
            const FORCE_QUOTE: bool = #force_quote;

            fn properties() -> ::std::vec::Vec<::cqlmap::PropertyDescriptor> {
                ::std::vec![#(#descriptors),*]
            }
        }
    }
}
