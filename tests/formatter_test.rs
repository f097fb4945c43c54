//! End-to-end formatting and punctuation tests.

use mdinline::normalize::{normalize, PunctuationNormalizer};
use mdinline::{format_text, MdInline, PunctuationOptions, StyleConfig};

fn style() -> StyleConfig {
    StyleConfig::new("#333333", "#07c160", 15.0, 1.75, 0.5, 16.0)
}

#[test]
fn test_normalize_mixed_text() {
    let input = "他说\"用Rust写...\"--然后走了";
    assert_eq!(normalize(input), "他说「用 Rust 写……」——然后走了");
}

#[test]
fn test_normalize_idempotent_on_converted_text() {
    let samples = [
        "他说「你好」——然后『离开』了……",
        "Rust 很快，版本 1 发布",
        "普通段落  有两个空格",
        "| a | b |\n| --- | --- |\n---",
    ];
    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent: {:?}", sample);
    }
}

#[test]
fn test_apostrophes_untouched() {
    assert_eq!(normalize("it's"), "it's");
    assert_eq!(normalize("Tom's book"), "Tom's book");
}

#[test]
fn test_rules_and_separators_keep_hyphens() {
    let text = "a -- b\n---\n| --- | --- |";
    assert_eq!(normalize(text), "a —— b\n---\n| --- | --- |");
}

#[test]
fn test_nfc_option() {
    let decomposed = "Cafe\u{301}";
    let normalizer =
        PunctuationNormalizer::new(PunctuationOptions::none().with_unicode_nfc(true));
    assert_eq!(normalizer.process(decomposed), "Caf\u{e9}");
    assert_eq!(normalize(decomposed), decomposed);
}

#[test]
fn test_format_scenario_title_and_paragraph() {
    let html = format_text("# Title\n\nHello **world** 42%\n", &style());
    assert!(html.contains(">Title</h1>\n"));
    assert!(html.contains("<strong style=\"color: #07c160; font-weight: 700;\">world</strong>"));
    assert!(html.contains("<span style=\"color: #07c160; font-weight: 600;\">42%</span>"));
    assert_eq!(html.matches("<p ").count(), 1);
}

#[test]
fn test_format_whole_document_shape() {
    let html = format_text("Hello", &style());
    assert_eq!(
        html,
        "<section style=\"font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans SC', sans-serif; color: #333333; font-size: 15px; line-height: 1.75; letter-spacing: 0.5px;\">\n\
         <p style=\"margin-bottom: 16px; text-align: justify;\">Hello</p>\n\
         </section>"
    );
}

#[test]
fn test_format_is_deterministic() {
    let text = "# 标题\n\n- 一\n- 二\n\n> 引用\n\n```\ncode\n```";
    assert_eq!(format_text(text, &style()), format_text(text, &style()));
}

#[test]
fn test_builder_matches_free_function() {
    let text = "## 小节\n\n用 `cargo` 构建，提升 **30%**";
    let result = MdInline::new(style()).format(text);
    assert_eq!(result.content, format_text(text, &style()));
}

#[test]
fn test_percentage_in_code_untouched() {
    let html = format_text("see `100%` and 100%", &style());
    assert!(html.contains(">100%</code>"));
    assert_eq!(html.matches("font-weight: 600;\">100%</span>").count(), 1);
}
