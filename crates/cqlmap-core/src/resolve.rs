// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Data type resolution.
//!
//! Decides the CQL data type of a property from its annotations, its
//! declared type and the simple-type registry, consulting the user-type
//! resolver for user-defined types.
//!
//! # Decision Order
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                        Data Type Resolution                          │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │                                                                      │
//! │  #[cql_type] present ──► explicit procedure (always wins)            │
//! │         │ no                                                         │
//! │         ▼                                                            │
//! │  map-like        ──► 2 arguments ──► map<reg(K), reg(V)>             │
//! │         │ no                                                         │
//! │         ▼                                                            │
//! │  collection-like ──► 1 argument  ──► set<reg(E)> / list<reg(E)>      │
//! │         │ no                                                         │
//! │         ▼                                                            │
//! │  registry lookup of the declared type                                │
//! │                                                                      │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Elements of declared collections go through the registry only; nested
//! collections and user types need an explicit `#[cql_type]`.
//!
//! # Explicit Procedure
//!
//! | Tag | Element tags | Result |
//! |-----|--------------|--------|
//! | `map` | exactly 2 | `map<tag(K), tag(V)>` |
//! | `list`, `set` | exactly 1 | element `udt` resolves by user type name |
//! | `udt` | ignored | user type by name |
//! | other | ignored | registry by tag |

use tracing::debug;

use crate::{
    annotation::ExplicitType,
    data_type::{CqlTag, DataType},
    error::{MappingError, MappingResult},
    identifier::CqlIdentifier,
    property::PropertyDescriptor,
    registry::SimpleTypeRegistry,
    type_info::TypeInfo,
    udt::UserTypeResolver
};

/// Resolves property data types against a registry and a user-type
/// resolver.
#[derive(Clone, Copy)]
pub struct DataTypeResolver<'a> {
    registry:   &'a SimpleTypeRegistry,
    user_types: &'a dyn UserTypeResolver
}

impl<'a> DataTypeResolver<'a> {
    /// Create a resolver.
    #[must_use]
    pub const fn new(registry: &'a SimpleTypeRegistry, user_types: &'a dyn UserTypeResolver) -> Self {
        Self {
            registry,
            user_types
        }
    }

    /// Resolve the data type of `property`.
    ///
    /// # Errors
    ///
    /// - [`MappingError::ConflictingMapping`] for an explicit type on a
    ///   composite primary key
    /// - [`MappingError::ArityMismatch`] for a wrong number of type
    ///   arguments or element tags
    /// - [`MappingError::MissingUserTypeName`] and
    ///   [`MappingError::UserTypeNotFound`] for user types
    /// - [`MappingError::UnknownType`] when no mapping exists
    pub fn resolve(&self, property: &PropertyDescriptor) -> MappingResult<DataType> {
        let data_type = self.find_data_type(property)?;

        debug!(
            property = property.name(),
            owner = property.owner(),
            data_type = %data_type,
            "resolved data type"
        );

        Ok(data_type)
    }

    fn find_data_type(&self, property: &PropertyDescriptor) -> MappingResult<DataType> {
        if let Some(explicit) = property.explicit_type() {
            if property.is_composite_primary_key() {
                return Err(MappingError::ConflictingMapping {
                    property: property.property_ref(),
                    reason:   "a composite primary key cannot declare an explicit data type"
                });
            }
            return self.resolve_explicit(property, explicit);
        }

        let declared = property.declared_type();
        let arguments = declared.type_arguments();

        if declared.is_map_like() {
            ensure_arity(property, arguments.len(), 2)?;
            return Ok(DataType::map(
                self.simple_for_type(property, &arguments[0])?,
                self.simple_for_type(property, &arguments[1])?
            ));
        }

        if declared.is_collection_like() {
            ensure_arity(property, arguments.len(), 1)?;
            let element = self.simple_for_type(property, &arguments[0])?;
            return Ok(if declared.is_set_like() {
                DataType::set(element)
            } else {
                DataType::list(element)
            });
        }

        self.simple_for_type(property, declared)
    }

    fn resolve_explicit(
        &self,
        property: &PropertyDescriptor,
        explicit: &ExplicitType
    ) -> MappingResult<DataType> {
        let elements = &explicit.type_arguments;

        match explicit.tag {
            CqlTag::Map => {
                ensure_arity(property, elements.len(), 2)?;
                Ok(DataType::map(
                    self.simple_for_tag(property, elements[0])?,
                    self.simple_for_tag(property, elements[1])?
                ))
            }
            CqlTag::List | CqlTag::Set => {
                ensure_arity(property, elements.len(), 1)?;
                let element = match elements[0] {
                    CqlTag::Udt => self.user_type(property, explicit)?,
                    tag => self.simple_for_tag(property, tag)?
                };
                Ok(if explicit.tag == CqlTag::Set {
                    DataType::set(element)
                } else {
                    DataType::list(element)
                })
            }
            CqlTag::Udt => self.user_type(property, explicit),
            tag => self.simple_for_tag(property, tag)
        }
    }

    fn user_type(
        &self,
        property: &PropertyDescriptor,
        explicit: &ExplicitType
    ) -> MappingResult<DataType> {
        if explicit.user_type_name.trim().is_empty() {
            return Err(MappingError::MissingUserTypeName {
                property: property.property_ref()
            });
        }

        let name = CqlIdentifier::new(explicit.user_type_name.as_str(), false)?;

        self.user_types
            .resolve_type(&name)
            .map(DataType::UserDefined)
            .ok_or_else(|| MappingError::UserTypeNotFound {
                user_type: name.to_cql(),
                property:  property.property_ref()
            })
    }

    fn simple_for_tag(&self, property: &PropertyDescriptor, tag: CqlTag) -> MappingResult<DataType> {
        self.registry
            .data_type_for_tag(tag)
            .ok_or_else(|| MappingError::UnknownType {
                type_name: tag.name().to_string(),
                property:  property.property_ref()
            })
    }

    fn simple_for_type(
        &self,
        property: &PropertyDescriptor,
        ty: &TypeInfo
    ) -> MappingResult<DataType> {
        self.registry
            .data_type_for(ty)
            .ok_or_else(|| MappingError::UnknownType {
                type_name: ty.to_string(),
                property:  property.property_ref()
            })
    }
}

fn ensure_arity(property: &PropertyDescriptor, actual: usize, expected: usize) -> MappingResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(MappingError::ArityMismatch {
            expected,
            actual,
            property: property.property_ref()
        })
    }
}

/// Resolve the data type of `property` in one call.
///
/// # Errors
///
/// See [`DataTypeResolver::resolve`].
pub fn resolve_data_type(
    property: &PropertyDescriptor,
    registry: &SimpleTypeRegistry,
    user_types: &dyn UserTypeResolver
) -> MappingResult<DataType> {
    DataTypeResolver::new(registry, user_types).resolve(property)
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};

    use super::*;
    use crate::{
        type_info::{DescribeType, TypeShape},
        udt::{InMemoryUserTypeResolver, NoUserTypes, UserType}
    };

    fn property<T: DescribeType>(name: &str) -> PropertyDescriptor {
        PropertyDescriptor::builder(name, "Person", T::type_info()).build()
    }

    fn explicit<T: DescribeType>(explicit: ExplicitType) -> PropertyDescriptor {
        PropertyDescriptor::builder("value", "Person", T::type_info())
            .explicit_type(explicit)
            .build()
    }

    fn resolve(property: &PropertyDescriptor) -> MappingResult<DataType> {
        resolve_data_type(property, SimpleTypeRegistry::standard(), &NoUserTypes)
    }

    fn address_types() -> InMemoryUserTypeResolver {
        InMemoryUserTypeResolver::new().with(UserType::new(
            CqlIdentifier::new("address", false).unwrap()
        ))
    }

    #[test]
    fn declared_scalars() {
        assert_eq!(
            resolve(&property::<String>("name")).unwrap(),
            DataType::Simple(CqlTag::Text)
        );
        assert_eq!(
            resolve(&property::<Option<i64>>("count")).unwrap(),
            DataType::Simple(CqlTag::Bigint)
        );
    }

    #[test]
    fn declared_collections() {
        assert_eq!(
            resolve(&property::<Vec<String>>("tags")).unwrap(),
            DataType::list(DataType::Simple(CqlTag::Text))
        );
        assert_eq!(
            resolve(&property::<BTreeSet<i32>>("scores")).unwrap(),
            DataType::set(DataType::Simple(CqlTag::Int))
        );
        assert_eq!(
            resolve(&property::<HashMap<String, i64>>("counts")).unwrap(),
            DataType::map(
                DataType::Simple(CqlTag::Text),
                DataType::Simple(CqlTag::Bigint)
            )
        );
    }

    #[test]
    fn nested_declared_collection_is_unknown() {
        let err = resolve(&property::<Vec<Vec<String>>>("matrix")).unwrap_err();
        assert!(matches!(
            err,
            MappingError::UnknownType { ref type_name, .. } if type_name == "Vec<String>"
        ));
    }

    #[test]
    fn unmapped_scalar_is_unknown() {
        let err = resolve(&property::<u64>("big")).unwrap_err();
        let property = err.property().unwrap();
        assert_eq!(property.name, "big");
        assert_eq!(property.owner, "Person");
    }

    #[test]
    fn declared_arity_mismatch() {
        let ty = TypeInfo::new("Pair", TypeShape::Map).argument(String::type_info());
        let property = PropertyDescriptor::builder("pair", "Person", ty).build();
        assert!(matches!(
            resolve(&property),
            Err(MappingError::ArityMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn declared_collection_arity_mismatch() {
        for (shape, arity) in [
            (TypeShape::List, 0),
            (TypeShape::List, 2),
            (TypeShape::Set, 0),
            (TypeShape::Set, 2)
        ] {
            let ty = (0..arity).fold(TypeInfo::new("Bag", shape), |ty, _| {
                ty.argument(String::type_info())
            });
            let property = PropertyDescriptor::builder("bag", "Person", ty).build();
            match resolve(&property) {
                Err(MappingError::ArityMismatch {
                    expected,
                    actual,
                    ..
                }) => {
                    assert_eq!(expected, 1);
                    assert_eq!(actual, arity);
                }
                other => panic!("expected arity mismatch for {shape:?}/{arity}, got {other:?}")
            }
        }
    }

    #[test]
    fn explicit_collection_arity_mismatch() {
        for tag in [CqlTag::List, CqlTag::Set] {
            let empty = explicit::<Vec<String>>(ExplicitType::new(tag));
            assert!(matches!(
                resolve(&empty),
                Err(MappingError::ArityMismatch {
                    expected: 1,
                    actual: 0,
                    ..
                })
            ));

            let pair = explicit::<Vec<String>>(
                ExplicitType::new(tag)
                    .argument(CqlTag::Text)
                    .argument(CqlTag::Int)
            );
            assert!(matches!(
                resolve(&pair),
                Err(MappingError::ArityMismatch {
                    expected: 1,
                    actual: 2,
                    ..
                })
            ));
        }
    }

    #[test]
    fn explicit_type_wins_over_declared() {
        let property = explicit::<String>(ExplicitType::new(CqlTag::Ascii));
        assert_eq!(resolve(&property).unwrap(), DataType::Simple(CqlTag::Ascii));

        let property = explicit::<Vec<String>>(
            ExplicitType::new(CqlTag::Set).argument(CqlTag::Varchar)
        );
        assert_eq!(
            resolve(&property).unwrap(),
            DataType::set(DataType::Simple(CqlTag::Varchar))
        );
    }

    #[test]
    fn explicit_map_arity() {
        let property = explicit::<HashMap<String, String>>(
            ExplicitType::new(CqlTag::Map).argument(CqlTag::Text)
        );
        assert!(matches!(
            resolve(&property),
            Err(MappingError::ArityMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn explicit_udt_elements() {
        let types = address_types();
        let property = explicit::<Vec<String>>(
            ExplicitType::new(CqlTag::List)
                .argument(CqlTag::Udt)
                .user_type("Address")
        );
        let resolved =
            resolve_data_type(&property, SimpleTypeRegistry::standard(), &types).unwrap();
        assert_eq!(resolved.to_cql(), "list<frozen<address>>");
    }

    #[test]
    fn explicit_udt_failures() {
        let missing_name =
            explicit::<String>(ExplicitType::new(CqlTag::Set).argument(CqlTag::Udt));
        assert!(matches!(
            resolve(&missing_name),
            Err(MappingError::MissingUserTypeName { .. })
        ));

        let not_found = explicit::<String>(ExplicitType::new(CqlTag::Udt).user_type("phone"));
        assert!(matches!(
            resolve(&not_found),
            Err(MappingError::UserTypeNotFound { ref user_type, .. }) if user_type == "phone"
        ));
    }

    #[test]
    fn explicit_map_rejects_udt_elements() {
        let property = explicit::<String>(
            ExplicitType::new(CqlTag::Map)
                .argument(CqlTag::Text)
                .argument(CqlTag::Udt)
                .user_type("address")
        );
        let types = address_types();
        assert!(matches!(
            resolve_data_type(&property, SimpleTypeRegistry::standard(), &types),
            Err(MappingError::UnknownType { ref type_name, .. }) if type_name == "udt"
        ));
    }

    #[test]
    fn explicit_type_on_composite_key_conflicts() {
        let key = TypeInfo::plain("PersonKey").mark_primary_key_class();
        let property = PropertyDescriptor::builder("key", "Person", key)
            .explicit_type(ExplicitType::new(CqlTag::Text))
            .build();
        assert!(matches!(
            resolve(&property),
            Err(MappingError::ConflictingMapping { .. })
        ));
    }
}
