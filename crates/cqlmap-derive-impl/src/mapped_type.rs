// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(MappedType)]` code generation.

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use crate::parse::MappedTypeAttrs;

/// Entry point for `#[derive(MappedType)]`.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match MappedTypeAttrs::from_derive_input(&input) {
        Ok(attrs) => attrs.describe_type_impl(false).into(),
        Err(err) => err.write_errors().into()
    }
}
