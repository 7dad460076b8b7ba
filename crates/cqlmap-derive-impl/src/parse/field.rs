// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! # Architecture
//!
//! ```text
//! field.rs (coordinator)
//! ├── naming.rs      - #[column], #[primary_key]
//! ├── key_column.rs  - #[primary_key_column]
//! └── cql_type.rs    - #[cql_type]
//! ```
//!
//! # Field Attributes
//!
//! | Attribute | Meaning |
//! |-----------|---------|
//! | `#[id]` | identifier property, default name |
//! | `#[primary_key]`, `#[primary_key(...)]` | identifier property with naming |
//! | `#[column]`, `#[column(...)]` | plain column naming |
//! | `#[primary_key_column(...)]` | partition or clustering column |
//! | `#[cql_type(...)]` | explicit data type |
//! | `#[transient]` | not mapped |

mod cql_type;
mod key_column;
mod naming;

pub use cql_type::CqlTypeAttr;
use darling::FromMeta;
pub use key_column::KeyColumnAttr;
pub use naming::NamingAttr;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Field, Ident, Meta, Type, ext::IdentExt};

/// `Some(String::from(..))` or `None` tokens.
fn optional_string(value: Option<&str>) -> TokenStream {
    match value {
        Some(value) => quote!(::core::option::Option::Some(::std::string::String::from(#value))),
        None => quote!(::core::option::Option::None)
    }
}

/// Parse an attribute that may be bare (`#[column]`) or carry options.
fn parse_optional_list<T: FromMeta + Default>(attr: &Attribute) -> darling::Result<T> {
    match &attr.meta {
        Meta::Path(_) => Ok(T::default()),
        meta => T::from_meta(meta)
    }
}

/// Store `value` in `slot`, rejecting a second occurrence.
fn set_once<T>(slot: &mut Option<T>, value: T, attr: &Attribute) -> darling::Result<()> {
    if slot.is_some() {
        let name = attr
            .path()
            .get_ident()
            .map(ToString::to_string)
            .unwrap_or_default();
        return Err(darling::Error::custom(format!("duplicate #[{name}] attribute")).with_span(attr));
    }
    *slot = Some(value);
    Ok(())
}

/// A mapped field.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Declared type.
    pub ty: Type,

    /// `#[id]` or `#[primary_key]` present.
    pub id: bool,

    /// `#[transient]` present.
    pub transient: bool,

    /// `#[column]`.
    pub column: Option<NamingAttr>,

    /// `#[primary_key]`.
    pub primary_key: Option<NamingAttr>,

    /// `#[primary_key_column]`.
    pub key_column: Option<KeyColumnAttr>,

    /// `#[cql_type]`.
    pub cql_type: Option<CqlTypeAttr>
}

impl FieldDef {
    /// Parse a named field and its mapping attributes.
    ///
    /// # Errors
    ///
    /// - Unnamed field
    /// - Malformed or duplicated attributes
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("mapped fields must be named").with_span(field)
        })?;

        let mut def = Self {
            ident,
            ty: field.ty.clone(),
            id: false,
            transient: false,
            column: None,
            primary_key: None,
            key_column: None,
            cql_type: None
        };

        for attr in &field.attrs {
            if attr.path().is_ident("id") {
                def.id = true;
            } else if attr.path().is_ident("transient") {
                def.transient = true;
            } else if attr.path().is_ident("primary_key") {
                def.id = true;
                set_once(&mut def.primary_key, parse_optional_list(attr)?, attr)?;
            } else if attr.path().is_ident("column") {
                set_once(&mut def.column, parse_optional_list(attr)?, attr)?;
            } else if attr.path().is_ident("primary_key_column") {
                set_once(&mut def.key_column, parse_optional_list(attr)?, attr)?;
            } else if attr.path().is_ident("cql_type") {
                set_once(&mut def.cql_type, CqlTypeAttr::from_attr(attr)?, attr)?;
            }
        }

        Ok(def)
    }

    /// Property name: the field name without a raw prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Whether any mapping attribute other than `#[transient]` is present.
    pub fn has_mapping(&self) -> bool {
        self.id
            || self.column.is_some()
            || self.key_column.is_some()
            || self.cql_type.is_some()
    }

    /// `PropertyDescriptor` construction expression for owner `owner`.
    pub fn descriptor_tokens(&self, owner: &str) -> TokenStream {
        let name = self.name();
        let ty = &self.ty;
        let id = self.id;
        let explicit_type = optional(self.cql_type.as_ref().map(CqlTypeAttr::tokens));
        let column = optional(self.column.as_ref().map(NamingAttr::column_tokens));
        let primary_key = optional(self.primary_key.as_ref().map(NamingAttr::primary_key_tokens));
        let key_column = optional(self.key_column.as_ref().map(KeyColumnAttr::tokens));

        quote! {
            ::cqlmap::PropertyDescriptor::builder(
                #name,
                #owner,
                <#ty as ::cqlmap::DescribeType>::type_info()
            )
            .annotations(::cqlmap::Annotations {
                explicit_type: #explicit_type,
                column: #column,
                primary_key: #primary_key,
                primary_key_column: #key_column
            })
            .identifier(#id)
            .build()
        }
    }
}

fn optional(tokens: Option<TokenStream>) -> TokenStream {
    match tokens {
        Some(tokens) => quote!(::core::option::Option::Some(#tokens)),
        None => quote!(::core::option::Option::None)
    }
}
