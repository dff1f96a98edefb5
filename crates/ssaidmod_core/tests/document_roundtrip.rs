use ssaidmod_core::{parse_settings, split_trailing_fragment, update_document, NAMESPACE_HASHES};

// A document already in this serializer's canonical form: declaration,
// 4-space indentation, source attribute order, ` />` self-closing leaves.
const SAMPLE: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    "<settings version=\"178\">\n",
    "    <setting id=\"1\" name=\"userkey\" value=\"c0ffee00c0ffee00c0ffee00c0ffee00\" package=\"android\" defaultValue=\"\" defaultSysSet=\"false\" tag=\"null\" />\n",
    "    <setting id=\"12\" name=\"10073\" value=\"0011223344556677\" package=\"com.a\" defaultValue=\"0011223344556677\" defaultSysSet=\"false\" tag=\"null\" />\n",
    "    <setting id=\"13\" name=\"10105\" value=\"8899aabbccddeeff\" package=\"com.b\" defaultValue=\"8899aabbccddeeff\" defaultSysSet=\"true\" tag=\"null\" />\n",
    "</settings>\n",
);

fn sample_with_fragment() -> String {
    format!("{SAMPLE}{NAMESPACE_HASHES}")
}

#[test]
fn parse_extracts_records_in_document_order() {
    let (records, has_fragment) = parse_settings(SAMPLE).unwrap();

    assert!(!has_fragment);
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].id, "1");
    assert_eq!(records[0].name, "userkey");
    assert_eq!(records[0].package_name, "android");
    assert_eq!(records[0].default_value, "");
    assert!(!records[0].default_sys_set);
    assert_eq!(records[0].tag, None);

    assert_eq!(records[1].package_name, "com.a");
    assert_eq!(records[1].value, "0011223344556677");

    assert_eq!(records[2].package_name, "com.b");
    assert!(records[2].default_sys_set);
}

#[test]
fn parse_reads_literal_tag_text_but_not_the_sentinel() {
    let doc = "<settings>\
        <setting id=\"1\" package=\"com.a\" tag=\"data_tag\" />\
        <setting id=\"2\" package=\"com.b\" tag=\"null\" />\
        </settings>";

    let (records, _) = parse_settings(doc).unwrap();
    assert_eq!(records[0].tag, Some("data_tag".to_string()));
    assert_eq!(records[1].tag, None);
}

#[test]
fn parse_detects_trailing_fragment() {
    let (records, has_fragment) = parse_settings(&sample_with_fragment()).unwrap();
    assert!(has_fragment);
    assert_eq!(records.len(), 3);
}

#[test]
fn parse_rejects_garbage_input() {
    assert!(parse_settings("complete garbage, not markup").is_err());
    assert!(parse_settings("<settings><setting id=\"1\"").is_err());
    assert!(parse_settings("").is_err());
}

#[test]
fn no_match_update_round_trips_byte_identically() {
    let updated = update_document(SAMPLE, "com.installed.nowhere", "0123456789abcdef").unwrap();

    assert_eq!(updated.records_updated, 0);
    assert_eq!(updated.text, SAMPLE);
}

#[test]
fn no_match_update_round_trips_fragment_byte_identically() {
    let source = sample_with_fragment();
    let updated = update_document(&source, "com.installed.nowhere", "0123456789abcdef").unwrap();

    assert_eq!(updated.records_updated, 0);
    assert!(updated.fragment_preserved);
    assert_eq!(updated.text, source);
}

#[test]
fn targeted_update_changes_only_the_matching_record() {
    let updated = update_document(SAMPLE, "com.a", "0123456789abcdef").unwrap();
    assert_eq!(updated.records_updated, 1);

    let (records, _) = parse_settings(&updated.text).unwrap();
    assert_eq!(records[1].value, "0123456789abcdef");
    assert_eq!(records[1].default_value, "0123456789abcdef");
    // Untargeted fields of the matched record survive.
    assert_eq!(records[1].id, "12");
    assert_eq!(records[1].name, "10073");
    assert!(!records[1].default_sys_set);
    assert_eq!(records[1].tag, None);
    // Other records are untouched.
    assert_eq!(records[0].value, "c0ffee00c0ffee00c0ffee00c0ffee00");
    assert_eq!(records[2].value, "8899aabbccddeeff");
    assert_eq!(records[2].default_value, "8899aabbccddeeff");
}

#[test]
fn update_rewrites_every_record_sharing_the_package() {
    let doc = "<settings>\
        <setting id=\"1\" value=\"aaaaaaaaaaaaaaaa\" package=\"com.a\" defaultValue=\"aaaaaaaaaaaaaaaa\" />\
        <setting id=\"2\" value=\"bbbbbbbbbbbbbbbb\" package=\"com.a\" defaultValue=\"bbbbbbbbbbbbbbbb\" />\
        </settings>";

    let updated = update_document(doc, "com.a", "0123456789abcdef").unwrap();
    assert_eq!(updated.records_updated, 2);

    let (records, _) = parse_settings(&updated.text).unwrap();
    assert_eq!(records[0].value, "0123456789abcdef");
    assert_eq!(records[0].default_value, "0123456789abcdef");
    assert_eq!(records[1].value, "0123456789abcdef");
    assert_eq!(records[1].default_value, "0123456789abcdef");
}

#[test]
fn update_never_introduces_a_fragment() {
    let updated = update_document(SAMPLE, "com.a", "0123456789abcdef").unwrap();
    assert!(!updated.fragment_preserved);
    assert!(!updated.text.contains("namespaceHashes"));
}

#[test]
fn foreign_formatting_re_renders_canonically() {
    let doc = "<settings version=\"178\">\n\
  <setting id=\"12\" value=\"0011223344556677\" package=\"com.a\" defaultValue=\"0011223344556677\"/>\n\
</settings>";

    let updated = update_document(doc, "com.a", "0123456789abcdef").unwrap();

    assert!(updated
        .text
        .starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n"));
    assert!(updated
        .text
        .contains("\n    <setting id=\"12\" value=\"0123456789abcdef\" package=\"com.a\" defaultValue=\"0123456789abcdef\" />\n"));
}

#[test]
fn split_trailing_fragment_only_matches_the_exact_suffix() {
    let sample = sample_with_fragment();
    let (body, present) = split_trailing_fragment(&sample);
    assert!(present);
    assert_eq!(body, SAMPLE);

    let (body, present) = split_trailing_fragment(SAMPLE);
    assert!(!present);
    assert_eq!(body, SAMPLE);
}
