#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::HashSet;

use common::{MixedEnum, UUID_A, UUID_B};
use extended_enum::{
    extended_enum, BaseExtendedValue, ExtendedEnum, ExtendedValue, ScalarValue, ValueWithDescription,
};

extended_enum! {
    /// Same declarations as `MixedEnum`, as a separate type.
    enum OtherMixedEnum {
        CONST1 = "const1",
        CONST2 = 1,
        CONST3 = UUID_A,
        NOT_DUPLICATE_CONST3 = "79ff3431-3e98-4bec-9a4c-63ede2580f83",
        CONST4 = BaseExtendedValue::new("const4"),
        CONST5 = BaseExtendedValue::new(2),
        CONST6 = BaseExtendedValue::new(UUID_B),
        CONST7 = ValueWithDescription::new("const7"),
        CONST8 = ValueWithDescription::new(3).with_description("some const8 description"),
    }
}

#[test]
fn test_different_types_share_values_not_identity() {
    for member in MixedEnum::members() {
        let other = OtherMixedEnum::from_name(member.name()).unwrap();
        assert_eq!(member, member);
        assert_eq!(member.value(), other.value());
        assert_ne!(member.to_string(), other.to_string());
    }
}

#[test]
fn test_members_are_distinct_from_each_other() {
    let members: HashSet<MixedEnum> = MixedEnum::members().iter().copied().collect();
    assert_eq!(members.len(), MixedEnum::members().len());
}

#[test]
fn test_scalar_equality_by_kind() {
    assert_ne!(
        MixedEnum::CONST3.value(),
        MixedEnum::NOT_DUPLICATE_CONST3.value()
    );
    assert_ne!(ScalarValue::from("1"), ScalarValue::from(1));
    assert_eq!(MixedEnum::CONST2.value(), &ScalarValue::from(1));
}

#[test]
fn test_extended_values_compare_by_scalar_only() {
    let with_description = ValueWithDescription::new(3).with_description("some const8 description");
    let without_description = ValueWithDescription::new(3);
    assert_eq!(with_description, without_description);

    let boxed: &dyn ExtendedValue = &BaseExtendedValue::new(3);
    let described: &dyn ExtendedValue = &with_description;
    assert!(boxed == described);
    assert_eq!(MixedEnum::CONST8.extended_value().value(), boxed.value());
}

#[test]
fn test_origins_resolve_to_members() {
    let origins: [(&str, Box<dyn ExtendedValue>); 5] = [
        ("CONST4", Box::new(BaseExtendedValue::new("const4"))),
        ("CONST5", Box::new(BaseExtendedValue::new(2))),
        ("CONST6", Box::new(BaseExtendedValue::new(UUID_B))),
        ("CONST7", Box::new(ValueWithDescription::new("const7"))),
        (
            "CONST8",
            Box::new(ValueWithDescription::new(3).with_description("some const8 description")),
        ),
    ];
    for (name, origin) in origins {
        let member = MixedEnum::from_name(name).unwrap();
        assert_eq!(member.value(), origin.value());
        assert_eq!(MixedEnum::from_value(origin.value()).unwrap(), member);
    }
}
