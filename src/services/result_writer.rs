//! 结果输出服务 - 业务能力层
//!
//! 只负责把一次搜索的结果交给显示区域，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::SearchOutcome;
use std::fs;
use tracing::debug;

/// 显示区域
///
/// 防抖后的搜索在后台任务中执行，因此要求 `Send + Sync`。
pub trait ResultSink: Send + Sync {
    fn present(&self, outcome: &SearchOutcome) -> AppResult<()>;
}

/// 结果输出服务
///
/// 职责：
/// - 将结果 HTML 片段覆盖写入文件
/// - 将计数文字输出到终端
pub struct ResultWriter {
    output_file_path: String,
}

impl ResultWriter {
    /// 使用默认文件路径创建
    pub fn new() -> Self {
        Self::with_path("search_results.html")
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            output_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.output_file_path
    }
}

impl ResultSink for ResultWriter {
    fn present(&self, outcome: &SearchOutcome) -> AppResult<()> {
        debug!(
            "写入结果: {} | HTML 长度: {}",
            self.output_file_path,
            outcome.html.len()
        );

        fs::write(&self.output_file_path, &outcome.html)
            .map_err(|e| AppError::output_failed(&self.output_file_path, e))?;

        if let Some(label) = &outcome.count_label {
            println!("{}", label);
        }

        Ok(())
    }
}

impl Default for ResultWriter {
    fn default() -> Self {
        Self::new()
    }
}
