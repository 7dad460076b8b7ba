// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! User-defined types and their resolution.
//!
//! The engine never inspects schema itself. Whenever an explicit type
//! annotation asks for a user-defined type, the name is handed to a
//! [`UserTypeResolver`], which may consult cluster metadata, a registry
//! built at startup, or anything else.

use std::collections::HashMap;

use crate::{data_type::DataType, identifier::CqlIdentifier};

/// Field of a user-defined type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTypeField {
    /// Field name.
    pub name: CqlIdentifier,

    /// Field type.
    pub data_type: DataType
}

/// Descriptor of a schema-registered user-defined type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserType {
    name:     CqlIdentifier,
    keyspace: Option<CqlIdentifier>,
    fields:   Vec<UserTypeField>
}

impl UserType {
    /// Create a user type without fields or keyspace.
    #[must_use]
    pub const fn new(name: CqlIdentifier) -> Self {
        Self {
            name,
            keyspace: None,
            fields: Vec::new()
        }
    }

    /// Set the owning keyspace.
    #[must_use]
    pub fn in_keyspace(mut self, keyspace: CqlIdentifier) -> Self {
        self.keyspace = Some(keyspace);
        self
    }

    /// Append a field.
    #[must_use]
    pub fn field(mut self, name: CqlIdentifier, data_type: DataType) -> Self {
        self.fields.push(UserTypeField {
            name,
            data_type
        });
        self
    }

    /// Type name.
    #[must_use]
    pub const fn name(&self) -> &CqlIdentifier {
        &self.name
    }

    /// Owning keyspace, if known.
    #[must_use]
    pub const fn keyspace(&self) -> Option<&CqlIdentifier> {
        self.keyspace.as_ref()
    }

    /// Declared fields in order.
    #[must_use]
    pub fn fields(&self) -> &[UserTypeField] {
        &self.fields
    }

    /// `keyspace.name` when the keyspace is known, `name` otherwise.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.keyspace {
            Some(keyspace) => format!("{}.{}", keyspace.to_cql(), self.name.to_cql()),
            None => self.name.to_cql()
        }
    }
}

/// Looks up user-defined types by name.
///
/// Implementations may block or perform I/O; the engine treats each call as
/// a single synchronous operation.
///
/// Closures of the right shape implement the trait:
///
/// ```rust
/// use cqlmap_core::{CqlIdentifier, UserType, UserTypeResolver};
///
/// let resolver = |name: &CqlIdentifier| {
///     (name.unquoted() == "address").then(|| UserType::new(name.clone()))
/// };
/// let address = CqlIdentifier::new("address", false).unwrap();
/// assert!(resolver.resolve_type(&address).is_some());
/// ```
pub trait UserTypeResolver: Send + Sync {
    /// Resolve `name`, returning `None` when no such type exists.
    fn resolve_type(&self, name: &CqlIdentifier) -> Option<UserType>;
}

impl<F> UserTypeResolver for F
where
    F: Fn(&CqlIdentifier) -> Option<UserType> + Send + Sync
{
    fn resolve_type(&self, name: &CqlIdentifier) -> Option<UserType> {
        self(name)
    }
}

/// Resolver that knows no user types.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUserTypes;

impl UserTypeResolver for NoUserTypes {
    fn resolve_type(&self, _name: &CqlIdentifier) -> Option<UserType> {
        None
    }
}

/// Resolver over user types registered up front.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserTypeResolver {
    types: HashMap<CqlIdentifier, UserType>
}

impl InMemoryUserTypeResolver {
    /// Create an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `user_type`, replacing any type with the same name.
    pub fn register(&mut self, user_type: UserType) {
        self.types.insert(user_type.name().clone(), user_type);
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, user_type: UserType) -> Self {
        self.register(user_type);
        self
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl UserTypeResolver for InMemoryUserTypeResolver {
    fn resolve_type(&self, name: &CqlIdentifier) -> Option<UserType> {
        self.types.get(name).cloned()
    }
}
