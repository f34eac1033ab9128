/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use crate::config::Config;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 题库搜索启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📁 题库来源: {}", config.questions_path);
    info!("⏱️ 防抖静默期: {} ms", config.debounce_ms);
    info!("📄 结果输出: {}", config.output_html_file);
    info!("{}", "=".repeat(60));
}

/// 记录使用说明
pub fn log_usage(debounce_ms: u64) {
    info!("💡 输入关键字后静默 {} ms 自动搜索；以 ! 开头立即搜索", debounce_ms);
    info!("💡 :type <题型> on|off 切换题型，:clear 清除，:quit 离开");
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
