use ssaidmod_core::{
    bool_from_attr, is_ssaid_value, tag_from_attr, validate_ssaid_value, SettingRecord,
};

fn sample_record() -> SettingRecord {
    SettingRecord {
        id: "12".to_string(),
        name: "10073".to_string(),
        value: "0011223344556677".to_string(),
        package_name: "com.a".to_string(),
        default_value: "0011223344556677".to_string(),
        default_sys_set: false,
        tag: None,
    }
}

#[test]
fn bool_from_attr_accepts_true_case_insensitively() {
    assert!(bool_from_attr("true"));
    assert!(bool_from_attr("TRUE"));
    assert!(bool_from_attr("True"));
}

#[test]
fn bool_from_attr_falls_back_to_false() {
    assert!(!bool_from_attr("false"));
    assert!(!bool_from_attr(""));
    assert!(!bool_from_attr("1"));
    assert!(!bool_from_attr("yes"));
}

#[test]
fn tag_from_attr_reads_null_sentinel_as_absent() {
    assert_eq!(tag_from_attr(Some("null")), None);
    assert_eq!(tag_from_attr(None), None);
}

#[test]
fn tag_from_attr_keeps_any_other_text_as_literal_tag() {
    assert_eq!(tag_from_attr(Some("data_tag")), Some("data_tag".to_string()));
    // The sentinel is case-sensitive; a differently-cased word is a tag.
    assert_eq!(tag_from_attr(Some("NULL")), Some("NULL".to_string()));
}

#[test]
fn ssaid_value_accepts_16_hex_characters_either_case() {
    assert!(is_ssaid_value("0123456789abcdef"));
    assert!(is_ssaid_value("0123456789ABCDEF"));
    assert!(is_ssaid_value("a1B2c3D4e5F60718"));
}

#[test]
fn ssaid_value_rejects_other_shapes() {
    assert!(!is_ssaid_value("short"));
    assert!(!is_ssaid_value("zzzzzzzzzzzzzzzz"));
    assert!(!is_ssaid_value("0123456789abcde"));
    assert!(!is_ssaid_value("0123456789abcdef0"));
    assert!(!is_ssaid_value("0123456789abcde "));
    assert!(!is_ssaid_value(""));
}

#[test]
fn validate_reports_the_rejected_value() {
    let error = validate_ssaid_value("nope").unwrap_err();
    assert_eq!(error.value, "nope");
    assert!(error.to_string().contains("16 hexadecimal"));

    assert!(validate_ssaid_value("0011223344556677").is_ok());
}

#[test]
fn record_serializes_with_document_attribute_names() {
    let json = serde_json::to_value(sample_record()).unwrap();

    assert_eq!(json["package"], "com.a");
    assert_eq!(json["defaultValue"], "0011223344556677");
    assert_eq!(json["defaultSysSet"], false);
    assert!(json["tag"].is_null());
}

#[test]
fn record_deserializes_from_document_attribute_names() {
    let record: SettingRecord = serde_json::from_str(
        r#"{
            "id": "12",
            "name": "10073",
            "value": "0011223344556677",
            "package": "com.a",
            "defaultValue": "0011223344556677",
            "defaultSysSet": false,
            "tag": null
        }"#,
    )
    .unwrap();

    assert_eq!(record, sample_record());
}
