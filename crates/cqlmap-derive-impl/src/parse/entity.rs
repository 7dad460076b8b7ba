// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level parsing for `#[derive(Table)]`.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `name` | No | struct name in `snake_case` | table name or `#{...}` expression |
//! | `force_quote` | No | `false` | always quote the table name |

use convert_case::{Case, Casing};
use darling::FromDeriveInput;
use syn::{Data, DeriveInput, Fields, Generics, Ident};

use super::field::FieldDef;

/// Parsed `#[table(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(table), supports(struct_named))]
pub struct TableAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Table name.
    #[darling(default)]
    pub name: Option<String>,

    /// Always quote the table name.
    #[darling(default)]
    pub force_quote: bool
}

/// A struct with its mapped fields.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Table name.
    pub table: String,

    /// Always quote the table name.
    pub force_quote: bool,

    /// Mapped fields in declaration order; transient fields are dropped.
    pub fields: Vec<FieldDef>
}

impl EntityDef {
    /// Parse a `#[derive(Table)]` input.
    ///
    /// # Errors
    ///
    /// - Applied to anything but a struct with named fields
    /// - More than one identifier field
    /// - Mapping attributes on a `#[transient]` field
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = TableAttrs::from_derive_input(input)?;
        let fields = mapped_fields(input)?;

        let identifiers = fields.iter().filter(|f| f.id).count();
        if identifiers > 1 {
            return Err(darling::Error::custom(
                "at most one field may carry #[id] or #[primary_key]"
            )
            .with_span(&input.ident));
        }

        let table = attrs
            .name
            .unwrap_or_else(|| attrs.ident.to_string().to_case(Case::Snake));

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            table,
            force_quote: attrs.force_quote,
            fields
        })
    }

    /// Struct name as written.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }
}

/// Parse every named field, dropping `#[transient]` ones.
pub fn mapped_fields(input: &DeriveInput) -> darling::Result<Vec<FieldDef>> {
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(darling::Error::custom("mapped types require named fields")
                    .with_span(&input.ident));
            }
        },
        _ => {
            return Err(
                darling::Error::custom("mapped types can only be derived for structs")
                    .with_span(&input.ident)
            );
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let def = FieldDef::from_field(field)?;
        if def.transient {
            if def.has_mapping() {
                return Err(darling::Error::custom(
                    "#[transient] fields cannot carry mapping attributes"
                )
                .with_span(&def.ident));
            }
            continue;
        }
        fields.push(def);
    }

    Ok(fields)
}
