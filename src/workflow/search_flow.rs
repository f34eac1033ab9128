//! 搜索流程 - 流程层
//!
//! 定义"一次搜索"的完整流程：筛选 → 渲染 → 计数

use crate::models::{result_label, total_label, QuestionBank, SearchOutcome, TypeFilter};
use crate::render::render_results;
use crate::services::search;
use crate::utils::logging::truncate_text;
use std::sync::Arc;
use tracing::info;

/// 执行一次搜索
///
/// 关键字为空白时清空结果区域，只显示题库总数。
pub fn perform_search(bank: &QuestionBank, keyword: &str, types: &TypeFilter) -> SearchOutcome {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return SearchOutcome::new("", Some(total_label(bank.len())));
    }

    let results = search(bank, &keyword, types);
    info!(
        "🔍 搜索 \"{}\"：找到 {} 筆結果",
        truncate_text(&keyword, 30),
        results.len()
    );

    let html = render_results(&results, &keyword).into_string();
    SearchOutcome::new(html, Some(result_label(results.len(), bank.len())))
}

/// 搜索请求快照
///
/// 持有题库的共享引用和当时的输入，可以移交给防抖任务稍后执行。
#[derive(Debug, Clone)]
pub struct SearchRequest {
    bank: Arc<QuestionBank>,
    keyword: String,
    types: TypeFilter,
}

impl SearchRequest {
    pub fn new(bank: Arc<QuestionBank>, keyword: impl Into<String>, types: TypeFilter) -> Self {
        Self {
            bank,
            keyword: keyword.into(),
            types,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn execute(&self) -> SearchOutcome {
        perform_search(&self.bank, &self.keyword, &self.types)
    }
}
