use super::*;
use serde_json::json;

fn status_enum() -> DynamicEnum {
    DynamicEnum::from_json(
        "Status",
        &json!({
            "OPEN": "open",
            "PRIORITY": 1,
            "CLOSED": { "value": "closed", "description": "Work is done" }
        }),
    )
    .unwrap()
}

#[test]
fn test_from_json_keeps_declaration_order() {
    let status = status_enum();
    let names: Vec<&str> = status.members().map(|member| member.name()).collect();
    assert_eq!(names, vec!["OPEN", "PRIORITY", "CLOSED"]);
    assert_eq!(
        status.get_values(),
        vec![
            ScalarValue::from("open"),
            ScalarValue::from(1),
            ScalarValue::from("closed"),
        ]
    );
}

#[test]
fn test_from_json_boxes_descriptions() {
    let status = status_enum();
    let closed = status.member("CLOSED").unwrap();
    assert_eq!(closed.extended_value().description(), Some("Work is done"));
    assert_eq!(status.member("OPEN").unwrap().extended_value().description(), None);
}

#[test]
fn test_from_json_rejects_unsupported_values() {
    let err = DynamicEnum::from_json("Flags", &json!({ "ON": true })).unwrap_err();
    assert!(matches!(err, EnumError::TypeMismatch { .. }));
    let display = err.to_string();
    assert!(display.contains("type=bool"));
    assert!(display.contains("Flags"));

    let err = DynamicEnum::from_json("Flags", &json!({ "OFF": null })).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_from_json_rejects_bad_shapes() {
    let err = DynamicEnum::from_json("Empty", &json!({})).unwrap_err();
    assert!(matches!(err, EnumError::InvalidDefinition(_)));

    let err = DynamicEnum::from_json("List", &json!(["a"])).unwrap_err();
    assert!(matches!(err, EnumError::InvalidDefinition(_)));
}

#[test]
fn test_lookup_round_trip() {
    let status = status_enum();
    for member in status.members() {
        assert_eq!(status.lookup(member.value()).unwrap(), member);
        assert_eq!(status.lookup(member.extended_value().value()).unwrap(), member);
    }
    assert_eq!(
        status.lookup_json(&json!("closed")).unwrap().name(),
        "CLOSED"
    );
}

#[test]
fn test_lookup_failures() {
    let status = status_enum();
    let err = status.lookup("missing").unwrap_err();
    assert_eq!(err.to_string(), "'missing' is not a valid Status");

    let err = status.lookup_json(&json!(null)).unwrap_err();
    assert_eq!(err.to_string(), "None is not a valid Status");
    assert!(err.is_type_mismatch());
}

#[test]
fn test_members_of_separate_instances_are_not_equal() {
    let first = status_enum();
    let second = status_enum();
    let open_first = first.member("OPEN").unwrap();
    let open_second = second.member("OPEN").unwrap();
    assert_eq!(open_first.value(), open_second.value());
    assert_ne!(open_first, open_second);
    assert_eq!(open_first, first.member("OPEN").unwrap());
}

#[test]
fn test_member_serializes_as_scalar() {
    let status = status_enum();
    let members = status.get_members();
    assert_eq!(
        serde_json::to_string(&members).unwrap(),
        r#"{"OPEN":"open","PRIORITY":1,"CLOSED":"closed"}"#
    );
}

#[test]
fn test_canonical_and_duplicates() {
    let colors = DynamicEnum::from_json(
        "Colors",
        &json!({ "RED": "red", "CRIMSON": { "value": "red", "description": "darker" } }),
    )
    .unwrap();
    let crimson = colors.member("CRIMSON").unwrap();
    assert_eq!(crimson.canonical().name(), "RED");
    assert_eq!(crimson.to_string(), "Colors.CRIMSON");

    let err = colors.ensure_unique().unwrap_err();
    assert_eq!(
        err.to_string(),
        "duplicate values found in Colors: CRIMSON -> RED"
    );
}

#[test]
fn test_definition_set() {
    let set = DefinitionSet::from_json_str(
        r#"{
            "Status": { "OPEN": "open", "CLOSED": "closed" },
            "Sizes": { "SMALL": 1, "TINY": 1 }
        }"#,
    )
    .unwrap();
    assert_eq!(set.len(), 2);
    let names: Vec<&str> = set.enums().map(DynamicEnum::name).collect();
    assert_eq!(names, vec!["Status", "Sizes"]);
    assert!(set.get("Status").is_some());

    let failures = set.check_unique();
    assert_eq!(failures.len(), 1);
    assert_eq!(
        failures[0].to_string(),
        "duplicate values found in Sizes: TINY -> SMALL"
    );
}

#[test]
fn test_definition_set_invalid_json() {
    let err = DefinitionSet::from_json_str("{").unwrap_err();
    assert!(matches!(err, EnumError::JsonError(_)));
}
