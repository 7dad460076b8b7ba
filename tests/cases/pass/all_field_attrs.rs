// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use cqlmap::Table;
use uuid::Uuid;

#[derive(Table)]
#[table(name = "Products", force_quote)]
pub struct Product {
    #[primary_key_column(name = "category_id", role = "partitioned", ordinal = 0)]
    pub category: Uuid,

    #[primary_key_column(role = "clustered", ordering = "descending", ordinal = 1, force_quote)]
    pub created_at: DateTime<Utc>,

    #[column(name = "display_name")]
    pub name: String,

    #[column(force_quote)]
    pub price: f64,

    #[cql_type(name = "set", type_arguments(ascii))]
    pub tags: HashSet<String>,

    #[cql_type(name = "map", type_arguments(text, bigint))]
    pub counters: HashMap<String, i64>,

    #[cql_type(name = "list", type_arguments(udt), user_type_name = "dimension")]
    pub dimensions: Vec<String>,

    #[transient]
    pub cached: Option<String>
}

fn main() {
    assert!(Product::FORCE_QUOTE);
    assert_eq!(Product::properties().len(), 7);
}
