//! 渲染层
//!
//! 将搜索结果渲染为 HTML 片段：
//! - `badges` - 题号 / 题型 / 权重标签
//! - `options` - 四种题型的选项渲染
//! - `card` - 单题卡片与折叠解析

pub mod badges;
pub mod card;
pub mod options;

pub use card::{render_explanation, render_question, render_question_body};
pub use options::render_options;

use crate::models::Question;
use maud::{html, Markup};

/// 没有任何结果时的占位内容
pub fn render_no_results() -> Markup {
    html! {
        div class="text-center text-muted py-4" {
            i class="fa-solid fa-face-sad-tear fa-2x mb-2" {}
            br;
            "找不到符合的題目"
        }
    }
}

/// 题库载入失败时显示的固定提示
pub fn render_load_error(source: &str) -> Markup {
    html! {
        div class="alert alert-danger" {
            "題庫載入失敗，請確認 " (source) " 檔案存在。"
        }
    }
}

/// 渲染搜索结果，空结果渲染为占位内容而不是空片段
pub fn render_results(results: &[&Question], keyword: &str) -> Markup {
    if results.is_empty() {
        return render_no_results();
    }
    html! {
        @for question in results {
            (render_question(question, keyword))
        }
    }
}
