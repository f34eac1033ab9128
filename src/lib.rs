//! # Question Bank Search
//!
//! 静态题库的关键字搜索与 HTML 渲染
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、题库、题型筛选，以及题库载入（本地文件或 http(s)）
//!
//! ### ② 业务能力层（Services / Text / Render）
//! - `text` - 去除标签、反引号转行内代码、换行处理
//! - `services::matcher` - 关键字 + 题型筛选
//! - `services::highlighter` - 在节点树的文字节点上标记关键字
//! - `render` - 题目卡片与四种题型的选项渲染
//! - `services::result_writer` - 把结果交给显示区域
//!
//! ### ③ 流程层（Workflow）
//! - `SearchContext` - 持有题库与当前输入
//! - `perform_search` - 筛选 → 渲染 → 计数
//! - `Debouncer` - 输入防抖
//!
//! ### ④ 应用层（App）
//! - `App` - 逐行读取输入事件并驱动搜索
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod render;
pub mod services;
pub mod text;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, Command};
pub use config::Config;
pub use error::{AppError, AppResult, ConfigError, LoadError};
pub use models::{Question, QuestionBank, QuestionType, SearchOutcome, TypeFilter};
pub use render::{render_question, render_results};
pub use services::{highlight, search};
pub use text::{format_inline_code, normalize_newlines, strip_tags};
pub use workflow::{perform_search, Debouncer, SearchContext};
