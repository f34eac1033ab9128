/// 一次搜索（或清除、载入）后要显示的内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// 结果区域的 HTML 片段
    pub html: String,
    /// 结果计数文字；载入失败时为 None
    pub count_label: Option<String>,
}

impl SearchOutcome {
    pub fn new(html: impl Into<String>, count_label: Option<String>) -> Self {
        Self {
            html: html.into(),
            count_label,
        }
    }
}

/// 题库总数文字
pub fn total_label(total: usize) -> String {
    format!("題庫共 {} 題", total)
}

/// 搜索结果计数文字
pub fn result_label(found: usize, total: usize) -> String {
    format!("找到 {} 筆結果（共 {} 題）", found, total)
}
