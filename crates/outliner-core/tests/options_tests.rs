//! Integration tests for outline options.

use std::io::Write as _;

use outliner_core::{ListStyle, NestingPolicy, OptionsError, OutlineOptions, SearchStrategy};

#[test]
fn test_defaults() {
    let options = OutlineOptions::default();
    assert_eq!(options.source_id, "doc");
    assert_eq!(options.container_id, "outline");
    assert_eq!(options.title.as_deref(), Some("Outline"));
    assert_eq!(options.list_style, ListStyle::Ol);
    assert_eq!(options.id_prefix, "head");
    assert_eq!(options.search, SearchStrategy::Children);
    assert_eq!(options.nesting, NestingPolicy::Strict);
}

#[test]
fn test_empty_json_is_default() {
    assert_eq!(
        OutlineOptions::from_json("{}").expect("options"),
        OutlineOptions::default()
    );
}

#[test]
fn test_partial_json_overrides_only_given_keys() {
    let options = OutlineOptions::from_json(
        r#"{ "title": null, "list_style": "ul", "search": "descendants", "nesting": "clamp" }"#,
    )
    .expect("options");
    assert_eq!(options.title, None);
    assert_eq!(options.list_style, ListStyle::Ul);
    assert_eq!(options.search, SearchStrategy::Descendants);
    assert_eq!(options.nesting, NestingPolicy::Clamp);
    assert_eq!(options.source_id, "doc");
}

#[test]
fn test_unknown_keys_and_values_are_rejected() {
    assert!(matches!(
        OutlineOptions::from_json(r#"{ "sourceId": "x" }"#),
        Err(OptionsError::Json(_))
    ));
    assert!(matches!(
        OutlineOptions::from_json(r#"{ "list_style": "dl" }"#),
        Err(OptionsError::Json(_))
    ));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("outliner-options-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("create");
    file.write_all(br#"{ "container_id": "toc" }"#).expect("write");
    drop(file);

    let options = OutlineOptions::load(&path).expect("load");
    std::fs::remove_file(&path).expect("cleanup");
    assert_eq!(options.container_id, "toc");
}

#[test]
fn test_load_missing_file() {
    let err = OutlineOptions::load(std::path::Path::new("/nonexistent/outliner.json"))
        .expect_err("missing file");
    assert!(matches!(err, OptionsError::Io { .. }));
    assert!(err.to_string().starts_with("failed to read /nonexistent/outliner.json"));
}

#[test]
fn test_enum_strings() {
    assert_eq!("UL".parse::<ListStyle>(), Ok(ListStyle::Ul));
    assert_eq!(ListStyle::Ol.to_string(), "ol");
    assert_eq!(ListStyle::Ul.tag_name(), "ul");
    assert_eq!(SearchStrategy::Descendants.to_string(), "descendants");
}
