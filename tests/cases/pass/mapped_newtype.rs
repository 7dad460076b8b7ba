// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cqlmap::{CqlTag, MappedType, MappingContext, SimpleTypeRegistry, Table};

#[derive(MappedType)]
pub struct Email(pub String);

#[derive(MappedType)]
#[mapped_type(name = "Status")]
pub enum OrderStatus {
    Open,
    Closed
}

#[derive(Table)]
#[table(name = "contacts")]
pub struct Contact {
    #[id]
    pub email: Email,
    pub status: OrderStatus
}

fn main() {
    let context = MappingContext::builder()
        .registry(
            SimpleTypeRegistry::builder()
                .alias("Email", CqlTag::Text)
                .alias("Status", CqlTag::Ascii)
                .build()
        )
        .build();

    let mapping = context.describe::<Contact>().unwrap();
    assert_eq!(mapping.columns().len(), 2);
}
