//! 文字正规化
//!
//! 题干/解析中的转义换行、反引号和代码块处理，以及去除 HTML 标签。

use html5ever::{LocalName, Namespace, QualName};
use kuchikiki::traits::*;
use kuchikiki::NodeRef;
use regex::Regex;
use std::sync::LazyLock;

/// 带语言标记的代码块开头
const CODE_BLOCK_MARKER: &str = r#"<pre><code class="language-"#;

static CODE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<pre><code.*?>(?s:.*?)</code></pre>").expect("代码块正则无效")
});

static BACKTICK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("反引号正则无效"));

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// HTML 命名空间下的元素名
pub(crate) fn html_name(tag: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(tag))
}

/// 以 `<div>` 为上下文解析 HTML 片段，返回包含所有片段节点的根元素
///
/// 不会补上 `<head>`/`<body>`，前导空白与 `<style>`、`<title>` 都留在原位。
pub(crate) fn parse_fragment(html: &str) -> Option<NodeRef> {
    kuchikiki::parse_fragment(html_name("div"), Vec::new())
        .one(html)
        .first_child()
}

/// 去除 HTML 标签，返回可见文字（实体已解码）
pub fn strip_tags(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    parse_fragment(html)
        .map(|root| root.text_contents())
        .unwrap_or_default()
}

/// 对代码块以外的部分执行 `f`，代码块原样保留在原位置
fn map_outside_code_blocks(text: &str, f: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for block in CODE_BLOCK_RE.find_iter(text) {
        out.push_str(&f(&text[last..block.start()]));
        out.push_str(block.as_str());
        last = block.end();
    }
    out.push_str(&f(&text[last..]));
    out
}

/// 反引号包围的文字转为 `<code>`，代码块内容不变
pub fn format_inline_code(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    map_outside_code_blocks(text, |part| {
        BACKTICK_RE.replace_all(part, "<code>${1}</code>").into_owned()
    })
}

/// 字面 `\n` 转为换行，再将换行显示为 `<br>`
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\\n", "\n").replace('\n', "<br>")
}

/// 处理题干/解析文字（换行、反引号、代码块）
pub fn process_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let unescaped = text.replace("\\n", "\n");

    if unescaped.contains(CODE_BLOCK_MARKER) {
        map_outside_code_blocks(&unescaped, |part| {
            normalize_newlines(&format_inline_code(part))
        })
    } else {
        normalize_newlines(&format_inline_code(&unescaped))
    }
}
