// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing shared by the derives.
//!
//! ```text
//! parse/
//! ├── entity.rs  - #[table] and the mapped struct
//! ├── field.rs   - field attributes
//! └── mapped.rs  - #[mapped_type]
//! ```

pub mod entity;
pub mod field;
pub mod mapped;

pub use entity::EntityDef;
pub use mapped::MappedTypeAttrs;
