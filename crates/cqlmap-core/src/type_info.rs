// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declared-type descriptions.
//!
//! A [`TypeInfo`] is the registration-time picture of a property's Rust
//! type: its canonical name, whether it behaves like a list, set or map,
//! its ordered type arguments, and whether it (or anything it extends) is
//! marked as a primary-key class.
//!
//! [`DescribeType`] produces that picture for a Rust type. It is implemented
//! here for the standard scalar, collection and wrapper types and is derived
//! for user types with `#[derive(PrimaryKeyClass)]` or
//! `#[derive(MappedType)]`.
//!
//! # Shapes
//!
//! | Rust type | Shape | Arguments |
//! |-----------|-------|-----------|
//! | `Vec<T>`, `VecDeque<T>` | list | `[T]` |
//! | `HashSet<T>`, `BTreeSet<T>` | set | `[T]` |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | map | `[K, V]` |
//! | `Option<T>`, `Box<T>`, `Arc<T>` | same as `T` | |
//! | everything else | plain | `[]` |

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    sync::Arc,
    time::{Duration, SystemTime}
};

/// Structural capability of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeShape {
    /// Not a container.
    #[default]
    Plain,

    /// Ordered collection.
    List,

    /// Unique collection.
    Set,

    /// Key/value container.
    Map
}

/// Description of a declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    name:              Cow<'static, str>,
    shape:             TypeShape,
    type_arguments:    Vec<TypeInfo>,
    primary_key_class: bool,
    supertype:         Option<Box<TypeInfo>>
}

impl TypeInfo {
    /// Create a description with no type arguments.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            shape,
            type_arguments: Vec::new(),
            primary_key_class: false,
            supertype: None
        }
    }

    /// A non-container type.
    #[must_use]
    pub fn plain(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, TypeShape::Plain)
    }

    /// A list-like type with one element type.
    #[must_use]
    pub fn list(name: impl Into<Cow<'static, str>>, element: Self) -> Self {
        Self::new(name, TypeShape::List).argument(element)
    }

    /// A set-like type with one element type.
    #[must_use]
    pub fn set(name: impl Into<Cow<'static, str>>, element: Self) -> Self {
        Self::new(name, TypeShape::Set).argument(element)
    }

    /// A map-like type with key and value types.
    #[must_use]
    pub fn map(name: impl Into<Cow<'static, str>>, key: Self, value: Self) -> Self {
        Self::new(name, TypeShape::Map).argument(key).argument(value)
    }

    /// Append a type argument.
    #[must_use]
    pub fn argument(mut self, argument: Self) -> Self {
        self.type_arguments.push(argument);
        self
    }

    /// Mark this type as a primary-key class.
    #[must_use]
    pub const fn mark_primary_key_class(mut self) -> Self {
        self.primary_key_class = true;
        self
    }

    /// Declare the type this one extends.
    #[must_use]
    pub fn extends(mut self, supertype: Self) -> Self {
        self.supertype = Some(Box::new(supertype));
        self
    }

    /// Canonical type name without arguments.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Structural shape.
    #[must_use]
    pub const fn shape(&self) -> TypeShape {
        self.shape
    }

    /// Ordered generic arguments.
    #[must_use]
    pub fn type_arguments(&self) -> &[Self] {
        &self.type_arguments
    }

    /// Directly extended type.
    #[must_use]
    pub fn supertype(&self) -> Option<&Self> {
        self.supertype.as_deref()
    }

    /// This type followed by every type it transitively extends.
    pub fn hierarchy(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |ty| ty.supertype())
    }

    /// Whether the type behaves like a map.
    #[must_use]
    pub const fn is_map_like(&self) -> bool {
        matches!(self.shape, TypeShape::Map)
    }

    /// Whether the type behaves like a list or set.
    #[must_use]
    pub const fn is_collection_like(&self) -> bool {
        matches!(self.shape, TypeShape::List | TypeShape::Set)
    }

    /// Whether the type behaves like a set.
    #[must_use]
    pub const fn is_set_like(&self) -> bool {
        matches!(self.shape, TypeShape::Set)
    }

    /// Whether the primary-key-class marker sits on this type itself.
    #[must_use]
    pub const fn is_marked_primary_key_class(&self) -> bool {
        self.primary_key_class
    }

    /// Whether this type or any supertype carries the primary-key-class
    /// marker.
    #[must_use]
    pub fn has_primary_key_class_marker(&self) -> bool {
        self.hierarchy().any(Self::is_marked_primary_key_class)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;

        if let Some((first, rest)) = self.type_arguments.split_first() {
            write!(f, "<{first}")?;
            for argument in rest {
                write!(f, ", {argument}")?;
            }
            f.write_str(">")?;
        }

        Ok(())
    }
}

/// Produce the [`TypeInfo`] of a Rust type.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
///
/// use cqlmap_core::{DescribeType, TypeShape};
///
/// let info = <HashMap<String, i32>>::type_info();
/// assert_eq!(info.shape(), TypeShape::Map);
/// assert_eq!(info.to_string(), "HashMap<String, i32>");
/// ```
pub trait DescribeType {
    /// Describe `Self`.
    fn type_info() -> TypeInfo;
}

macro_rules! describe_plain {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl DescribeType for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::plain($name)
                }
            }
        )*
    };
}

describe_plain! {
    String => "String",
    bool => "bool",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    char => "char",
    f32 => "f32",
    f64 => "f64",
    IpAddr => "std::net::IpAddr",
    Ipv4Addr => "std::net::Ipv4Addr",
    Ipv6Addr => "std::net::Ipv6Addr",
    SystemTime => "std::time::SystemTime",
    Duration => "std::time::Duration",
    bytes::Bytes => "bytes::Bytes",
    uuid::Uuid => "uuid::Uuid",
    chrono::DateTime<chrono::Utc> => "chrono::DateTime<chrono::Utc>",
    chrono::NaiveDate => "chrono::NaiveDate",
    chrono::NaiveTime => "chrono::NaiveTime",
    chrono::NaiveDateTime => "chrono::NaiveDateTime",
}

impl<T: DescribeType> DescribeType for Option<T> {
    fn type_info() -> TypeInfo {
        T::type_info()
    }
}

impl<T: DescribeType> DescribeType for Box<T> {
    fn type_info() -> TypeInfo {
        T::type_info()
    }
}

impl<T: DescribeType> DescribeType for Arc<T> {
    fn type_info() -> TypeInfo {
        T::type_info()
    }
}

impl<T: DescribeType> DescribeType for Vec<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::list("Vec", T::type_info())
    }
}

impl<T: DescribeType> DescribeType for VecDeque<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::list("VecDeque", T::type_info())
    }
}

impl<T: DescribeType, S> DescribeType for HashSet<T, S> {
    fn type_info() -> TypeInfo {
        TypeInfo::set("HashSet", T::type_info())
    }
}

impl<T: DescribeType> DescribeType for BTreeSet<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::set("BTreeSet", T::type_info())
    }
}

impl<K: DescribeType, V: DescribeType, S> DescribeType for HashMap<K, V, S> {
    fn type_info() -> TypeInfo {
        TypeInfo::map("HashMap", K::type_info(), V::type_info())
    }
}

impl<K: DescribeType, V: DescribeType> DescribeType for BTreeMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::map("BTreeMap", K::type_info(), V::type_info())
    }
}
