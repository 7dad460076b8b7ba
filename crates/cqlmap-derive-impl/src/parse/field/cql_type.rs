// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[cql_type]` explicit data type parsing.
//!
//! ```rust,ignore
//! #[cql_type(name = "map", type_arguments(text, bigint))]
//! pub counters: HashMap<String, i64>,
//!
//! #[cql_type(name = "list", type_arguments(udt), user_type_name = "address")]
//! pub addresses: Vec<Address>,
//! ```

use darling::{FromMeta, util::PathList};
use proc_macro2::TokenStream;
use quote::quote;
use syn::Attribute;

use crate::tag::Tag;

#[derive(Debug, FromMeta)]
struct CqlTypeArgs {
    name: String,

    #[darling(default)]
    type_arguments: PathList,

    #[darling(default)]
    user_type_name: Option<String>
}

/// Validated explicit type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CqlTypeAttr {
    /// Top-level tag.
    pub tag: Tag,

    /// Element tags.
    pub type_arguments: Vec<Tag>,

    /// User type name, blank when absent.
    pub user_type_name: String
}

impl CqlTypeAttr {
    /// Parse and validate tag names.
    ///
    /// Arity and user type names are checked at bootstrap, where the
    /// failure can name the owning entity.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let args = CqlTypeArgs::from_meta(&attr.meta)?;

        let tag = Tag::from_name(&args.name)
            .ok_or_else(|| darling::Error::unknown_value(&args.name).with_span(attr))?;

        let mut errors = darling::Error::accumulator();
        let type_arguments = args
            .type_arguments
            .iter()
            .filter_map(|path| {
                let name = path
                    .get_ident()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                errors.handle(
                    Tag::from_name(&name)
                        .ok_or_else(|| darling::Error::unknown_value(&name).with_span(path))
                )
            })
            .collect();
        errors.finish()?;

        Ok(Self {
            tag,
            type_arguments,
            user_type_name: args.user_type_name.unwrap_or_default()
        })
    }

    /// `::cqlmap::ExplicitType { .. }` literal.
    pub fn tokens(&self) -> TokenStream {
        let tag = self.tag.to_tokens();
        let arguments = self.type_arguments.iter().map(|tag| tag.to_tokens());
        let user_type_name = &self.user_type_name;

        quote! {
            ::cqlmap::ExplicitType {
                tag: #tag,
                type_arguments: ::std::vec![#(#arguments),*],
                user_type_name: ::std::string::String::from(#user_type_name)
            }
        }
    }
}
