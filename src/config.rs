use crate::error::ConfigError;
use crate::models::QuestionType;
use serde::Deserialize;
use std::str::FromStr;

/// 程序配置
///
/// 先取默认值，若设置了 `QUIZ_CONFIG` 则读取该 TOML 文件，最后由环境变量覆盖。
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题库文件路径或 http(s) 地址
    pub questions_path: String,
    /// 输入防抖静默期（毫秒）
    pub debounce_ms: u64,
    /// 结果 HTML 片段输出文件
    pub output_html_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 是否跳过数据有问题的题目
    pub strict_validation: bool,
    /// 启动时勾选的题型
    pub default_types: Vec<QuestionType>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_path: "data/questions.json".to_string(),
            debounce_ms: 300,
            output_html_file: "search_results.html".to_string(),
            verbose_logging: false,
            strict_validation: false,
            default_types: QuestionType::KNOWN.to_vec(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("QUIZ_CONFIG") {
            Ok(path) => Self::from_toml_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(path) = std::env::var("QUESTIONS_PATH") {
            config.questions_path = path;
        }
        if let Some(ms) = env_parse("SEARCH_DEBOUNCE_MS", "u64")? {
            config.debounce_ms = ms;
        }
        if let Ok(path) = std::env::var("OUTPUT_HTML_FILE") {
            config.output_html_file = path;
        }
        if let Some(verbose) = env_parse("VERBOSE_LOGGING", "bool")? {
            config.verbose_logging = verbose;
        }
        if let Some(strict) = env_parse("STRICT_VALIDATION", "bool")? {
            config.strict_validation = strict;
        }
        if let Ok(types) = std::env::var("DEFAULT_TYPES") {
            config.default_types = parse_type_list(&types);
        }

        Ok(config)
    }

    /// 读取 TOML 配置文件，未出现的字段使用默认值
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadFailed {
            path: path.to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content, path)
    }

    pub fn from_toml_str(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::FileParseFailed {
            path: path.to_string(),
            source: e,
        })
    }
}

/// 逗号分隔的题型列表
pub fn parse_type_list(value: &str) -> Vec<QuestionType> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(QuestionType::from)
        .collect()
}

fn env_parse<T: FromStr>(var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
