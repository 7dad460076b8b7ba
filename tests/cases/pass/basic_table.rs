// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cqlmap::Table;
use uuid::Uuid;

#[derive(Table)]
pub struct User {
    #[id]
    pub id: Uuid,
    pub name: String,
    pub age: Option<i32>
}

fn main() {
    assert_eq!(User::TABLE_NAME, "user");
    assert_eq!(User::properties().len(), 3);
}
