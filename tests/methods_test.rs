#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

mod common;

use common::{MixedEnum, UUID_A, UUID_B};
use extended_enum::{
    BaseExtendedValue, ExtendedEnum, ExtendedValue, MemberValue, ScalarValue, ValueWithDescription,
};

#[test]
fn test_get_values_in_declaration_order() {
    assert_eq!(
        MixedEnum::get_values(),
        vec![
            ScalarValue::from("const1"),
            ScalarValue::from(1),
            ScalarValue::from(UUID_A),
            ScalarValue::from("79ff3431-3e98-4bec-9a4c-63ede2580f83"),
            ScalarValue::from("const4"),
            ScalarValue::from(2),
            ScalarValue::from(UUID_B),
            ScalarValue::from("const7"),
            ScalarValue::from(3),
        ]
    );
}

#[test]
fn test_get_extended_values_keep_metadata() {
    let values = MixedEnum::get_extended_values();
    assert_eq!(values.len(), 9);

    let scalars: Vec<&ScalarValue> = values.iter().map(|value| value.value()).collect();
    let expected = MixedEnum::get_values();
    assert_eq!(scalars, expected.iter().collect::<Vec<_>>());

    let descriptions: Vec<Option<&str>> = values.iter().map(|value| value.description()).collect();
    assert_eq!(descriptions[..8], [None; 8]);
    assert_eq!(descriptions[8], Some("some const8 description"));
}

#[test]
fn test_get_members_keyed_by_name() {
    let members = MixedEnum::get_members();
    let names: Vec<&str> = members.keys().copied().collect();
    assert_eq!(
        names,
        vec![
            "CONST1",
            "CONST2",
            "CONST3",
            "NOT_DUPLICATE_CONST3",
            "CONST4",
            "CONST5",
            "CONST6",
            "CONST7",
            "CONST8",
        ]
    );
    assert_eq!(members["CONST4"], MixedEnum::CONST4);
    assert_eq!(members["NOT_DUPLICATE_CONST3"], MixedEnum::NOT_DUPLICATE_CONST3);
}

#[test]
fn test_value_accessor() {
    assert_eq!(MixedEnum::CONST1.value(), &ScalarValue::from("const1"));
    assert_eq!(MixedEnum::CONST3.value(), &ScalarValue::Uuid(UUID_A));
    assert_eq!(
        MixedEnum::NOT_DUPLICATE_CONST3.value(),
        &ScalarValue::Text("79ff3431-3e98-4bec-9a4c-63ede2580f83".to_string())
    );
    assert_eq!(MixedEnum::CONST5.value().as_i64(), Some(2));
    assert_eq!(MixedEnum::CONST6.value().as_uuid(), Some(&UUID_B));
}

#[test]
fn test_extended_value_accessor() {
    let const4 = MixedEnum::CONST4.extended_value();
    assert_eq!(const4.value(), BaseExtendedValue::new("const4").value());
    assert_eq!(const4.description(), None);

    let const8 = MixedEnum::CONST8.extended_value();
    let expected = ValueWithDescription::new(3).with_description("some const8 description");
    assert_eq!(const8.value(), expected.value());
    assert_eq!(const8.description(), expected.description());
}

#[test]
fn test_bare_scalars_are_boxed() {
    let boxed = MemberValue::from("const1");
    assert_eq!(MixedEnum::CONST1.extended_value().value(), boxed.scalar());
    assert_eq!(MixedEnum::CONST1.extended_value().description(), None);
}

#[test]
fn test_custom_extended_value() {
    #[derive(Debug)]
    struct Labelled {
        value: ScalarValue,
        label: String,
    }

    impl ExtendedValue for Labelled {
        fn value(&self) -> &ScalarValue {
            &self.value
        }

        fn description(&self) -> Option<&str> {
            Some(&self.label)
        }
    }

    extended_enum::extended_enum! {
        enum Custom {
            FIRST = MemberValue::new(Labelled {
                value: ScalarValue::from(10),
                label: "ten".to_string(),
            }),
        }
    }

    assert_eq!(Custom::FIRST.value(), &ScalarValue::from(10));
    assert_eq!(Custom::FIRST.extended_value().description(), Some("ten"));
    assert_eq!(Custom::from_value(10).unwrap(), Custom::FIRST);
}

#[test]
fn test_custom_fields_read_back_through_member() {
    #[derive(Debug)]
    struct Named {
        value: ScalarValue,
        display_name: String,
    }

    impl ExtendedValue for Named {
        fn value(&self) -> &ScalarValue {
            &self.value
        }
    }

    extended_enum::extended_enum! {
        enum Planet {
            EARTH = MemberValue::new(Named {
                value: ScalarValue::from(3),
                display_name: "Ex".to_string(),
            }),
            MARS = 4,
        }
    }

    assert_eq!(
        Planet::EARTH.extended_value_as::<Named>().unwrap().display_name,
        "Ex"
    );
    assert_eq!(
        Planet::EARTH
            .extended_value()
            .downcast_ref::<Named>()
            .unwrap()
            .display_name,
        "Ex"
    );
    assert!(Planet::EARTH.extended_value_as::<BaseExtendedValue>().is_none());
    assert!(Planet::MARS.extended_value_as::<Named>().is_none());

    let looked_up = Planet::from_value(3).unwrap();
    assert_eq!(looked_up.extended_value_as::<Named>().unwrap().display_name, "Ex");
}
