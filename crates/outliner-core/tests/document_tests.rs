//! Integration tests for the whole-document pipeline.

use outliner_core::{
    ElementRole, ListStyle, NestingPolicy, OutlineError, OutlineOptions, SearchStrategy,
    make_outline, process_html, render_json,
};
use outliner_html::{inner_html, parse_document, serialize_document};

const PAGE: &str = concat!(
    r#"<nav id="outline"></nav>"#,
    r#"<article id="doc">"#,
    "<h1>Intro</h1><p>Hello</p>",
    "<h2>Scope</h2><h2 id=\"custom-id\">Goals</h2>",
    "<h1>Usage <em>now</em></h1>",
    "<h3>Flags</h3>",
    "</article>",
);

fn outline_markup(options: &OutlineOptions, html: &str) -> String {
    let processed = process_html(html, options).expect("outline");
    let container = processed
        .tree
        .get_element_by_id(&options.container_id)
        .expect("container");
    inner_html(&processed.tree, container)
}

#[test]
fn test_outline_is_rendered_into_container() {
    assert_eq!(
        outline_markup(&OutlineOptions::default(), PAGE),
        concat!(
            "<h1>Outline</h1><ol>",
            r##"<li><a href="#head0">Intro</a><ol>"##,
            r##"<li><a href="#head1">Scope</a></li>"##,
            r##"<li><a href="#custom-id">Goals</a></li>"##,
            "</ol></li>",
            r##"<li><a href="#head3">Usage <em>now</em></a><ol>"##,
            r##"<li><a href="#head4">Flags</a></li>"##,
            "</ol></li>",
            "</ol>",
        )
    );
}

#[test]
fn test_ids_are_written_back_to_headings() {
    let processed = process_html(PAGE, &OutlineOptions::default()).expect("outline");
    assert!(processed.html.contains(r#"<h1 id="head0">Intro</h1>"#));
    assert!(processed.html.contains(r#"<h2 id="custom-id">Goals</h2>"#));
    assert!(processed.html.contains(r#"<h3 id="head4">Flags</h3>"#));
    let assigned: Vec<&str> = processed
        .report
        .assigned_ids
        .iter()
        .map(|a| a.identifier.as_str())
        .collect();
    assert_eq!(assigned, vec!["head0", "head1", "head3", "head4"]);
    assert!(processed.report.failed_write_backs.is_empty());
    assert!(processed.report.id_collisions.is_empty());
}

#[test]
fn test_second_run_keeps_the_same_anchors() {
    let first = process_html(PAGE, &OutlineOptions::default()).expect("first run");
    let second = process_html(&first.html, &OutlineOptions::default()).expect("second run");
    assert!(second.report.assigned_ids.is_empty());
    let anchors = |outline: &outliner_core::OutlineTree| {
        outline
            .flatten()
            .iter()
            .map(|e| e.anchor.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(anchors(&first.report.outline), anchors(&second.report.outline));
}

#[test]
fn test_missing_source_is_an_error() {
    let result = process_html(r#"<div id="outline"></div>"#, &OutlineOptions::default());
    assert_eq!(
        result.map(|p| p.html).expect_err("no source"),
        OutlineError::MissingElement {
            role: ElementRole::Source,
            id: "doc".to_string(),
        }
    );
}

#[test]
fn test_missing_container_is_an_error() {
    let err = process_html(r#"<div id="doc"><h1>A</h1></div>"#, &OutlineOptions::default())
        .map(|p| p.html)
        .expect_err("no container");
    assert_eq!(err.to_string(), r#"container element with id "outline" not found"#);
}

#[test]
fn test_failed_build_leaves_document_untouched() {
    let html = r#"<div id="outline"></div><div id="doc"><h2>A</h2><h1>B</h1></div>"#;
    let mut doc = parse_document(html);
    let before = serialize_document(&doc.tree);

    let result = make_outline(&mut doc.tree, &OutlineOptions::default());

    assert!(matches!(result, Err(OutlineError::MalformedNesting { heading: 1, .. })));
    assert_eq!(serialize_document(&doc.tree), before);
}

#[test]
fn test_clamp_policy_recovers() {
    let html = r#"<div id="outline"></div><div id="doc"><h2>A</h2><h1>B</h1></div>"#;
    let options = OutlineOptions {
        nesting: NestingPolicy::Clamp,
        ..OutlineOptions::default()
    };
    let processed = process_html(html, &options).expect("clamped");
    assert_eq!(processed.report.outline.entries.len(), 2);
}

#[test]
fn test_empty_source_renders_empty_list() {
    let options = OutlineOptions::default();
    let markup = outline_markup(&options, r#"<div id="doc"><p>No headings</p></div><div id="outline"></div>"#);
    assert_eq!(markup, "<h1>Outline</h1><ol></ol>");
}

#[test]
fn test_unordered_list_without_title() {
    let options = OutlineOptions {
        title: None,
        list_style: ListStyle::Ul,
        ..OutlineOptions::default()
    };
    let markup = outline_markup(&options, r#"<div id="doc"><h3>Only</h3></div><div id="outline"></div>"#);
    assert_eq!(markup, r##"<ul><li><a href="#head0">Only</a></li></ul>"##);
}

#[test]
fn test_children_strategy_skips_nested_headings() {
    let html = r#"<div id="doc"><h1>A</h1><section><h2>Nested</h2></section></div><div id="outline"></div>"#;
    let processed = process_html(html, &OutlineOptions::default()).expect("outline");
    assert_eq!(processed.report.outline.len(), 1);
}

#[test]
fn test_descendants_strategy_finds_nested_headings() {
    let html = r#"<div id="doc"><h1>A</h1><section><h2>Nested</h2></section></div><div id="outline"></div>"#;
    let options = OutlineOptions {
        search: SearchStrategy::Descendants,
        ..OutlineOptions::default()
    };
    let processed = process_html(html, &options).expect("outline");
    assert_eq!(processed.report.outline.len(), 2);
    assert_eq!(processed.report.outline.entries[0].children[0].text, "Nested");
}

#[test]
fn test_container_inside_source_is_not_outlined() {
    let html = r#"<main id="doc"><nav id="outline"></nav><h1>A</h1><h2>B</h2></main>"#;
    let options = OutlineOptions {
        search: SearchStrategy::Descendants,
        ..OutlineOptions::default()
    };
    let first = process_html(html, &options).expect("first run");
    let second = process_html(&first.html, &options).expect("second run");
    assert_eq!(first.report.outline.len(), 2);
    assert_eq!(second.report.outline.len(), 2);
}

#[test]
fn test_source_inside_container_is_outlined() {
    let html = r#"<div id="outline"><div id="doc"><h1>A</h1><h2>B</h2></div></div>"#;
    let processed = process_html(html, &OutlineOptions::default()).expect("outline");
    assert_eq!(processed.report.outline.len(), 2);
    assert_eq!(processed.report.outline.entries[0].children[0].text, "B");
    assert!(processed.html.ends_with(concat!(
        r##"<ol><li><a href="#head0">A</a><ol><li><a href="#head1">B</a></li></ol></li></ol></div>"##
    )));
}

#[test]
fn test_copied_heading_content_drops_inner_ids() {
    let html = r#"<div id="outline"></div><div id="doc"><h1><span id="term" class="k">Term</span> list</h1></div>"#;
    let processed = process_html(html, &OutlineOptions::default()).expect("outline");
    assert_eq!(processed.html.matches(r#"id="term""#).count(), 1);
    assert!(processed.html.contains(r##"<a href="#head0"><span class="k">Term</span> list</a>"##));
}

#[test]
fn test_custom_ids_and_prefix() {
    let options = OutlineOptions::from_json(
        r#"{ "source_id": "main", "container_id": "toc", "id_prefix": "sec-" }"#,
    )
    .expect("options");
    let markup = outline_markup(&options, r#"<div id="main"><h1>A</h1></div><div id="toc"></div>"#);
    assert_eq!(markup, r##"<h1>Outline</h1><ol><li><a href="#sec-0">A</a></li></ol>"##);
}

#[test]
fn test_json_report() {
    let processed = process_html(PAGE, &OutlineOptions::default()).expect("outline");
    let json = render_json(&processed.report.outline).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value[1]["label"], "Usage <em>now</em>");
    assert_eq!(value[1]["text"], "Usage now");
    assert_eq!(value[1]["children"][0]["anchor"], "#head4");
}
