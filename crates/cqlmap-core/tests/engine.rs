// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end resolution through the public API.

use std::{
    collections::{BTreeMap, HashSet, VecDeque},
    net::IpAddr,
    sync::Arc,
    thread
};

use cqlmap_core::{
    ColumnOverride, CqlIdentifier, CqlTag, DataType, DescribeType, ExplicitType,
    InMemoryUserTypeResolver, MappingContext, MappingError, NoUserTypes, PropertyDescriptor,
    SimpleTypeRegistry, TypeInfo, TypeShape, UserType, resolve_column_name, resolve_data_type
};
use test_log::test;

fn property<T: DescribeType>(name: &str) -> PropertyDescriptor {
    PropertyDescriptor::builder(name, "Account", T::type_info()).build()
}

fn resolve(property: &PropertyDescriptor) -> Result<DataType, MappingError> {
    resolve_data_type(property, SimpleTypeRegistry::standard(), &NoUserTypes)
}

fn id(text: &str) -> CqlIdentifier {
    CqlIdentifier::new(text, false).unwrap()
}

#[test]
fn scalars_follow_the_registry_both_ways() {
    let registry = SimpleTypeRegistry::standard();

    for (name, tag) in registry.types() {
        let property = PropertyDescriptor::builder("value", "Account", TypeInfo::plain(name)).build();
        assert_eq!(resolve(&property).unwrap(), DataType::Simple(tag));
        assert_eq!(registry.type_for(tag), Some(name), "{name} does not map back");
    }
}

#[test]
fn described_scalars_are_registered() {
    let registry = SimpleTypeRegistry::standard();
    let scalars = [
        String::type_info(),
        i64::type_info(),
        bytes::Bytes::type_info(),
        bool::type_info(),
        f64::type_info(),
        f32::type_info(),
        IpAddr::type_info(),
        i32::type_info(),
        i16::type_info(),
        i8::type_info(),
        <chrono::DateTime<chrono::Utc>>::type_info(),
        uuid::Uuid::type_info(),
        chrono::NaiveDate::type_info(),
        chrono::NaiveTime::type_info(),
        std::time::Duration::type_info()
    ];

    assert_eq!(registry.types().count(), scalars.len());
    for ty in scalars {
        assert!(registry.tag_for(ty.name()).is_some(), "{} is not registered", ty.name());
    }
}

#[test]
fn maps_need_two_known_arguments() {
    assert_eq!(
        resolve(&property::<BTreeMap<uuid::Uuid, f64>>("balances")).unwrap(),
        DataType::map(
            DataType::Simple(CqlTag::Uuid),
            DataType::Simple(CqlTag::Double)
        )
    );

    for arity in [1, 3] {
        let ty = (0..arity).fold(TypeInfo::new("Table", TypeShape::Map), |ty, _| {
            ty.argument(String::type_info())
        });
        let property = PropertyDescriptor::builder("odd", "Account", ty).build();
        match resolve(&property) {
            Err(MappingError::ArityMismatch {
                expected,
                actual,
                ..
            }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, arity);
            }
            other => panic!("expected arity mismatch, got {other:?}")
        }
    }
}

#[test]
fn collection_kind_picks_list_or_set() {
    assert_eq!(
        resolve(&property::<VecDeque<i16>>("history")).unwrap(),
        DataType::list(DataType::Simple(CqlTag::Smallint))
    );
    assert_eq!(
        resolve(&property::<HashSet<String>>("roles")).unwrap(),
        DataType::set(DataType::Simple(CqlTag::Text))
    );
}

#[test]
fn explicit_list_of_user_types() {
    let address = UserType::new(id("address")).field(id("street"), DataType::Simple(CqlTag::Text));
    let types = InMemoryUserTypeResolver::new().with(address.clone());

    let annotated = |name: &str| {
        PropertyDescriptor::builder("addresses", "Account", <Vec<String>>::type_info())
            .explicit_type(
                ExplicitType::new(CqlTag::List)
                    .argument(CqlTag::Udt)
                    .user_type(name)
            )
            .build()
    };

    assert_eq!(
        resolve_data_type(&annotated("address"), SimpleTypeRegistry::standard(), &types).unwrap(),
        DataType::list(DataType::UserDefined(address))
    );
    assert!(matches!(
        resolve_data_type(&annotated(""), SimpleTypeRegistry::standard(), &types),
        Err(MappingError::MissingUserTypeName { .. })
    ));
    assert!(matches!(
        resolve_data_type(&annotated("address"), SimpleTypeRegistry::standard(), &NoUserTypes),
        Err(MappingError::UserTypeNotFound { .. })
    ));
}

#[test]
fn column_naming_and_requoting() {
    let plain = property::<String>("nickname");
    let column = resolve_column_name(&plain, None).unwrap().unwrap();
    assert_eq!(column.to_cql(), "nickname");
    assert!(!column.is_quoted());

    let quoted = PropertyDescriptor::builder("label", "Account", String::type_info())
        .column(ColumnOverride {
            name:        Some("foo".to_string()),
            force_quote: true
        })
        .build();
    let column = resolve_column_name(&quoted, None).unwrap().unwrap();
    assert_eq!(column.to_cql(), "\"foo\"");

    assert!(quoted.set_force_quote(false));
    let column = resolve_column_name(&quoted, None).unwrap().unwrap();
    assert_eq!(column.unquoted(), "foo");
    assert_eq!(column.to_cql(), "foo");
}

#[test]
fn requoting_keeps_the_folded_name() {
    let property = property::<String>("firstName");
    let resolved = resolve_column_name(&property, None).unwrap().unwrap();
    assert_eq!(resolved.to_cql(), "firstname");

    assert!(property.set_force_quote(true));
    let requoted = resolve_column_name(&property, None).unwrap().unwrap();
    assert_eq!(requoted, resolved.with_force_quote(true));
    assert_eq!(requoted.to_cql(), "\"firstname\"");
}

#[test]
fn inherited_marker_means_composite_key() {
    let key = TypeInfo::plain("AccountKey")
        .extends(TypeInfo::plain("TenantScopedKey").mark_primary_key_class());
    let holder = PropertyDescriptor::builder("key", "Account", key)
        .identifier(true)
        .build();

    assert!(holder.is_composite_primary_key());
    assert_eq!(resolve_column_name(&holder, None).unwrap(), None);
    assert!(!property::<String>("name").is_composite_primary_key());
}

#[test]
fn resolution_is_idempotent() {
    let context = MappingContext::new();
    let property = property::<Vec<i64>>("counters");

    assert_eq!(
        context.data_type(&property).unwrap(),
        context.data_type(&property).unwrap()
    );
    assert_eq!(
        context.column_name(&property).unwrap(),
        context.column_name(&property).unwrap()
    );
}

#[test]
fn concurrent_first_resolution_agrees() {
    let property = Arc::new(property::<String>("displayName"));

    let names: Vec<_> = (0..8)
        .map(|_| {
            let property = Arc::clone(&property);
            thread::spawn(move || resolve_column_name(&property, None).unwrap())
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(names.windows(2).all(|pair| pair[0] == pair[1]));
}
