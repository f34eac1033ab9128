use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题库加载错误
    #[error("题库加载错误: {0}")]
    Load(#[from] LoadError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 结果输出错误
    #[error("结果输出失败 ({path}): {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 题库加载错误
///
/// 对外只表现为一种失败（显示固定的提示信息，不重试），
/// 各变体保留原因用于日志。
#[derive(Debug, Error)]
pub enum LoadError {
    /// 文件不存在
    #[error("题库文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取题库文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 远程下载失败
    #[error("题库下载失败 ({url}): {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// JSON 解析失败
    #[error("题库解析失败 ({path}): {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    FileParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl LoadError {
    /// 根据 io 错误类型区分"不存在"和"读取失败"
    pub fn from_io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound { path }
        } else {
            LoadError::ReadFailed { path, source }
        }
    }
}

impl AppError {
    /// 创建结果输出错误
    pub fn output_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Output {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
