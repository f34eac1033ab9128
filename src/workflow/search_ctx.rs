//! 搜索上下文
//!
//! 持有题库和当前输入（关键字、勾选的题型），取代全局变量

use crate::error::LoadError;
use crate::models::{total_label, QuestionBank, QuestionType, SearchOutcome, TypeFilter};
use crate::render::render_load_error;
use crate::workflow::search_flow::{perform_search, SearchRequest};
use std::sync::Arc;
use tracing::error;

/// 搜索上下文
#[derive(Debug, Clone)]
pub struct SearchContext {
    bank: Arc<QuestionBank>,
    /// 载入失败时的题库来源，用于显示固定提示
    failed_source: Option<String>,
    keyword: String,
    types: TypeFilter,
}

impl SearchContext {
    pub fn new(bank: Arc<QuestionBank>, types: TypeFilter) -> Self {
        Self {
            bank,
            failed_source: None,
            keyword: String::new(),
            types,
        }
    }

    /// 根据载入结果创建；载入失败时题库为空，之后所有搜索都没有结果
    pub fn from_load_result(
        result: Result<QuestionBank, LoadError>,
        source: &str,
        types: TypeFilter,
    ) -> Self {
        match result {
            Ok(bank) => Self::new(Arc::new(bank), types),
            Err(e) => {
                error!("❌ 题库载入失败: {}", e);
                Self {
                    failed_source: Some(source.to_string()),
                    ..Self::new(Arc::new(QuestionBank::empty()), types)
                }
            }
        }
    }

    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn types(&self) -> &TypeFilter {
        &self.types
    }

    pub fn is_load_failed(&self) -> bool {
        self.failed_source.is_some()
    }

    /// 载入完成后的显示内容：题库总数，或载入失败提示（不显示计数）
    pub fn initial_outcome(&self) -> SearchOutcome {
        match &self.failed_source {
            Some(source) => SearchOutcome::new(render_load_error(source).into_string(), None),
            None => SearchOutcome::new("", Some(total_label(self.bank.len()))),
        }
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn set_type(&mut self, question_type: QuestionType, enabled: bool) {
        self.types.set(question_type, enabled);
    }

    /// 当前输入的快照，供防抖任务使用
    pub fn request(&self) -> SearchRequest {
        SearchRequest::new(self.bank.clone(), self.keyword.clone(), self.types.clone())
    }

    /// 立即以当前输入搜索
    pub fn perform_search(&self) -> SearchOutcome {
        perform_search(&self.bank, &self.keyword, &self.types)
    }

    /// 清除关键字和结果，只显示题库总数
    pub fn clear(&mut self) -> SearchOutcome {
        self.keyword.clear();
        SearchOutcome::new("", Some(total_label(self.bank.len())))
    }
}
