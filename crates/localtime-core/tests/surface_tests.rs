use localtime_core::{localize_html, FormatterHandle, LocaleContext};

/// Helper function to build the deterministic handle used across tests
fn test_handle() -> FormatterHandle {
    FormatterHandle::new(
        &LocaleContext::new()
            .with_locale("en-US")
            .with_time_zone("America/New_York"),
    )
}

const MARKED: &str = concat!(
    r#"<p>Posted <time data-local="true" datetime="2024-02-11T15:30:45+00:00">"#,
    "2024-02-11 15:30 UTC</time></p>",
);

#[test]
fn test_marked_element_is_localized() {
    let document = localize_html(MARKED, &test_handle());
    assert!(document.html.contains(">Feb 11, 2024, 10:30 AM EST</time>"));
    assert!(document
        .html
        .contains(r#"title="2024-02-11T15:30:45+00:00 (UTC)""#));
    assert_eq!(document.stats.marked, 1);
    assert_eq!(document.stats.localized, 1);
    assert_eq!(document.stats.fallback, 0);
}

#[test]
fn test_datetime_attribute_is_preserved() {
    let document = localize_html(MARKED, &test_handle());
    assert!(document
        .html
        .contains(r#"datetime="2024-02-11T15:30:45+00:00""#));
}

#[test]
fn test_unmarked_element_is_untouched() {
    let html = r#"<time datetime="2024-02-11T15:30:45+00:00">2024-02-11 15:30 UTC</time>"#;
    let document = localize_html(html, &test_handle());
    assert_eq!(document.html, html);
    assert_eq!(document.stats.marked, 0);
}

#[test]
fn test_element_without_datetime_is_untouched() {
    let html = r#"<time data-local="true">some text</time>"#;
    let document = localize_html(html, &test_handle());
    assert_eq!(document.html, html);
    assert_eq!(document.stats.marked, 0);
}

#[test]
fn test_empty_datetime_counts_as_absent() {
    let html = r#"<time data-local="true" datetime="">some text</time>"#;
    let document = localize_html(html, &test_handle());
    assert_eq!(document.html, html);
    assert_eq!(document.stats.marked, 0);
}

#[test]
fn test_invalid_timestamp_keeps_prerendered_text_and_sets_title() {
    let html = r#"<time data-local="true" datetime="not-a-date">server text</time>"#;
    let document = localize_html(html, &test_handle());
    assert!(document.html.contains(">server text</time>"));
    assert!(document.html.contains(r#"title="not-a-date (UTC)""#));
    assert_eq!(document.stats.marked, 1);
    assert_eq!(document.stats.localized, 0);
    assert_eq!(document.stats.fallback, 1);
}

#[test]
fn test_unavailable_handle_keeps_prerendered_text_and_sets_title() {
    let document = localize_html(MARKED, &FormatterHandle::Unavailable);
    assert!(document.html.contains(">2024-02-11 15:30 UTC</time>"));
    assert!(document
        .html
        .contains(r#"title="2024-02-11T15:30:45+00:00 (UTC)""#));
    assert_eq!(document.stats.marked, 1);
    assert_eq!(document.stats.fallback, 1);
}

#[test]
fn test_existing_title_is_replaced() {
    let html = concat!(
        r#"<time data-local="true" title="stale" datetime="2024-02-11T15:30:45+00:00">"#,
        "2024-02-11 15:30 UTC</time>",
    );
    let document = localize_html(html, &test_handle());
    assert!(document
        .html
        .contains(r#"title="2024-02-11T15:30:45+00:00 (UTC)""#));
    assert!(!document.html.contains("stale"));
}

#[test]
fn test_multiple_elements_are_independent() {
    let html = concat!(
        r#"<time data-local="true" datetime="2024-02-11T15:30:45+00:00">a</time>"#,
        r#"<time data-local="true" datetime="not-a-date">b</time>"#,
        r#"<time datetime="2024-02-11T15:30:45+00:00">c</time>"#,
    );
    let document = localize_html(html, &test_handle());
    assert!(document.html.contains(">Feb 11, 2024, 10:30 AM EST</time>"));
    assert!(document.html.contains(">b</time>"));
    assert!(document.html.contains(">c</time>"));
    assert_eq!(document.stats.marked, 2);
    assert_eq!(document.stats.localized, 1);
    assert_eq!(document.stats.fallback, 1);
}

#[test]
fn test_surrounding_markup_is_untouched() {
    let html = format!("<html><body>{MARKED}<footer>end</footer></body></html>");
    let document = localize_html(&html, &test_handle());
    assert!(document.html.starts_with("<html><body><p>Posted <time"));
    assert!(document.html.ends_with("</time></p><footer>end</footer></body></html>"));
}

#[test]
fn test_document_without_time_elements_is_untouched() {
    let html = "<html><body><p>nothing to do</p></body></html>";
    let document = localize_html(html, &test_handle());
    assert_eq!(document.html, html);
    assert_eq!(document.stats, Default::default());
}

#[test]
fn test_stats_serialize_for_reports() {
    let document = localize_html(MARKED, &test_handle());
    let json = serde_json::to_value(document.stats).expect("stats should serialize");
    assert_eq!(json["marked"], 1);
    assert_eq!(json["localized"], 1);
    assert_eq!(json["fallback"], 0);
}
