//! HTML and JSON rendering tests.

use mdinline::render::{
    format_inline, group_lists, to_html, to_html_with_stats, to_json, JsonFormat, RenderUnit,
};
use mdinline::{parse_text, Block, Document, ListKind, StyleConfig};

fn style() -> StyleConfig {
    StyleConfig::new("#333333", "#07c160", 15.0, 1.75, 0.5, 16.0)
}

fn render(text: &str) -> String {
    to_html(&parse_text(text), &style())
}

#[test]
fn test_unordered_run_is_one_container() {
    let html = render("- one\n- two\n- three");
    assert_eq!(html.matches("<ul ").count(), 1);
    assert_eq!(html.matches("</ul>").count(), 1);
    assert_eq!(html.matches("<li ").count(), 3);
}

#[test]
fn test_blank_lines_do_not_split_lists() {
    let html = render("- one\n\n- two");
    assert_eq!(html.matches("<ul ").count(), 1);
    assert_eq!(html.matches("<li ").count(), 2);
}

#[test]
fn test_mixed_runs_render_two_containers() {
    let html = render("- a\n1. b");
    assert_eq!(html.matches("<ul ").count(), 1);
    assert_eq!(html.matches("<ol ").count(), 1);
    let ul_close = html.find("</ul>").unwrap();
    let ol_open = html.find("<ol ").unwrap();
    assert!(ul_close < ol_open);
}

#[test]
fn test_paragraph_splits_list() {
    let html = render("- a\nbreak\n- b");
    assert_eq!(html.matches("<ul ").count(), 2);
}

#[test]
fn test_grouping_units() {
    let doc = parse_text("1. a\n2. b\n\n# H");
    let units = group_lists(&doc.blocks);
    assert_eq!(
        units[0],
        RenderUnit::List {
            kind: ListKind::Ordered,
            items: vec!["a", "b"],
        }
    );
    assert_eq!(units[1], RenderUnit::Block(&doc.blocks[2]));
}

#[test]
fn test_code_block_escaped_and_unformatted() {
    let html = render("```\n<b>**42%**</b>\nline2\n```");
    assert!(html.contains(">&lt;b&gt;**42%**&lt;/b&gt;<br>line2</pre>\n"));
    assert!(!html.contains("<strong"));
    assert!(!html.contains("font-weight: 600;"));
}

#[test]
fn test_table_render() {
    let html = render("| Name | Share |\n| --- | --- |\n| A | 12% |\n| B |");
    assert_eq!(html.matches("<tr>").count(), 3);
    assert_eq!(html.matches("<th ").count(), 2);
    assert_eq!(html.matches("<td ").count(), 3);
    assert!(html.contains("<span style=\"color: #07c160; font-weight: 600;\">12%</span></td>"));
    assert!(!html.contains("---"));
}

#[test]
fn test_blockquote_highlight_and_rule() {
    let html = render("> 引用内容\n\n「金句」\n\n***");
    assert!(html.contains("<blockquote style=\"background: #f7f7f8; border-left: 4px solid #07c160;"));
    assert!(html.contains(">引用内容</blockquote>\n"));
    assert!(html.contains("linear-gradient(to right, #07c16015, #07c16008)"));
    assert!(html.contains(">「金句」</div>\n"));
    assert!(html.contains(
        "<div style=\"width: 100%; height: 1px; background-color: #07c160; margin: 24px 0; border: none;\"></div>\n"
    ));
}

#[test]
fn test_todo_render() {
    let html = render("- [ ] write\n- [x] ship");
    assert!(html.contains("<span>write</span>"));
    assert!(html.contains("<svg viewBox=\"0 0 12 12\""));
    assert!(html.contains("opacity: 0.6;\">ship</span>"));
    assert!(!html.contains("<ul"));
}

#[test]
fn test_stats_count_lists_and_items() {
    let doc = parse_text("# T\n\n- a\n- b\n1. c\n\n```\nx\n```\n\n| h |\n\n- [ ] t");
    let result = to_html_with_stats(&doc, &style());
    let stats = result.stats;
    assert_eq!(stats.heading_count, 1);
    assert_eq!(stats.list_count, 2);
    assert_eq!(stats.list_item_count, 3);
    assert_eq!(stats.code_block_count, 1);
    assert_eq!(stats.table_count, 1);
    assert_eq!(stats.todo_count, 1);
    assert_eq!(result.content, to_html(&doc, &style()));
}

#[test]
fn test_style_values_flow_into_markup() {
    let style = StyleConfig::new("#111", "rgb(1, 2, 3)", 17.5, 2.0, 0.0, 20.0);
    let html = to_html(&parse_text("## H\n\n**b**"), &style);
    assert!(html.contains("font-size: 17.5px; line-height: 2; letter-spacing: 0px;"));
    assert!(html.contains("border-left: 4px solid rgb(1, 2, 3);"));
    assert!(html.contains("margin-bottom: 20px; text-align: justify;"));
    assert!(html.contains("<strong style=\"color: rgb(1, 2, 3); font-weight: 700;\">b</strong>"));
}

#[test]
fn test_inline_precedence() {
    let html = format_inline("*a `*b*` c* 5%", "#07c160");
    assert!(html.starts_with("<em style=\"font-style: italic;\">a <code "));
    assert!(html.contains(">*b*</code> c</em> <span"));
}

#[test]
fn test_json_round_trip() {
    let doc = parse_text("# T\n\n- a\n\n| x | y |\n\n```js\nlet a;\n```");
    let json = to_json(&doc, JsonFormat::Pretty).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
    assert!(matches!(back.blocks[3], Block::CodeBlock { ref language, .. } if language.as_deref() == Some("js")));
}
