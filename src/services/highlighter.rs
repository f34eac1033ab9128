//! 关键字高亮 - 业务能力层
//!
//! 在已渲染的 HTML 中标记关键字：先解析为节点树，只改写文字节点，
//! 再序列化回 HTML，因此不会匹配到标签名或属性值。

use crate::text::normalize::{html_name, parse_fragment};
use kuchikiki::{Attribute, ExpandedName, NodeRef};
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// 高亮标记元素
const MARK_TAG: &str = "mark";

/// 不进入的元素：已高亮、行内代码、代码块，以及内容只能是纯文字的元素
fn is_skipped(tag: &str) -> bool {
    matches!(
        tag,
        "mark" | "code" | "pre" | "style" | "script" | "title" | "textarea"
    )
}

/// 将 HTML 中所有关键字（不区分大小写，按字面匹配）包进 `<mark>`
///
/// 关键字为空时原样返回。
pub fn highlight(html: &str, keyword: &str) -> String {
    if keyword.is_empty() || html.is_empty() {
        return html.to_string();
    }

    let pattern = match RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            warn!("无法建立高亮规则 ({}): {}", keyword, e);
            return html.to_string();
        }
    };

    let Some(root) = parse_fragment(html) else {
        return html.to_string();
    };

    highlight_children(&root, &pattern);

    match serialize_children(&root) {
        Some(out) => out,
        None => {
            warn!("高亮结果序列化失败，返回原文");
            html.to_string()
        }
    }
}

/// 前序、深度优先、从左到右
fn highlight_children(node: &NodeRef, pattern: &Regex) {
    // 先取快照，替换当前文字节点不影响后续遍历
    let children: Vec<NodeRef> = node.children().collect();

    for child in children {
        if let Some(text) = child.as_text() {
            let text = text.borrow().clone();
            highlight_text_node(&child, &text, pattern);
        } else if let Some(element) = child.as_element() {
            if !is_skipped(&element.name.local) {
                highlight_children(&child, pattern);
            }
        }
    }
}

/// 拆分文字节点：匹配部分放进 `<mark>`，其余保持为文字
fn highlight_text_node(node: &NodeRef, text: &str, pattern: &Regex) {
    if !pattern.is_match(text) {
        return;
    }

    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            node.insert_before(NodeRef::new_text(&text[last..found.start()]));
        }
        let mark = new_element(MARK_TAG);
        mark.append(NodeRef::new_text(found.as_str()));
        node.insert_before(mark);
        last = found.end();
    }
    if last < text.len() {
        node.insert_before(NodeRef::new_text(&text[last..]));
    }
    node.detach();
}

fn new_element(tag: &str) -> NodeRef {
    NodeRef::new_element(
        html_name(tag),
        Vec::<(ExpandedName, Attribute)>::new(),
    )
}

fn serialize_children(node: &NodeRef) -> Option<String> {
    let mut out = Vec::new();
    for child in node.children() {
        child.serialize(&mut out).ok()?;
    }
    String::from_utf8(out).ok()
}
