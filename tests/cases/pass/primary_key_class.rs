// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cqlmap::{DescribeType, MappedType, PrimaryKeyClass, Table};

#[derive(PrimaryKeyClass)]
pub struct BaseKey {
    #[primary_key_column(role = "partitioned")]
    pub tenant: String
}

#[derive(MappedType)]
#[mapped_type(extends = "BaseKey")]
pub struct TenantKey {
    pub tenant: String,
    pub id: i64
}

#[derive(Table)]
pub struct Account {
    #[primary_key]
    pub key: TenantKey,
    pub balance: f64
}

fn main() {
    assert!(TenantKey::type_info().has_primary_key_class_marker());
    assert_eq!(BaseKey::key_properties().len(), 1);
    assert_eq!(Account::properties().len(), 2);
}
