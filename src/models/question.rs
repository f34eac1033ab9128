use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 题型
///
/// 未知题型保留原始字符串，渲染时显示为通用标签。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    /// 单选
    Single,
    /// 复选
    Multiple,
    /// 是非
    TrueFalse,
    /// 下拉选项（每个选项内含逗号分隔的子选项）
    MultiOption,
    /// 其他未知题型
    Other(String),
}

impl QuestionType {
    /// 四种已知题型
    pub const KNOWN: [QuestionType; 4] = [
        QuestionType::Single,
        QuestionType::Multiple,
        QuestionType::TrueFalse,
        QuestionType::MultiOption,
    ];

    /// 获取题库文件中使用的标识
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::Single => "single",
            QuestionType::Multiple => "multiple",
            QuestionType::TrueFalse => "truefalse",
            QuestionType::MultiOption => "multioption",
            QuestionType::Other(raw) => raw,
        }
    }
}

impl From<&str> for QuestionType {
    fn from(s: &str) -> Self {
        match s {
            "single" => QuestionType::Single,
            "multiple" => QuestionType::Multiple,
            "truefalse" => QuestionType::TrueFalse,
            "multioption" => QuestionType::MultiOption,
            other => QuestionType::Other(other.to_string()),
        }
    }
}

impl From<String> for QuestionType {
    fn from(s: String) -> Self {
        QuestionType::from(s.as_str())
    }
}

impl From<QuestionType> for String {
    fn from(t: QuestionType) -> Self {
        t.as_str().to_string()
    }
}

impl FromStr for QuestionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(QuestionType::from(s.trim()))
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 题目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// 题干，可能包含 HTML / 代码标记
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// 正确答案（从 1 开始的选项序号）
    #[serde(default)]
    pub answer: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_weight", deserialize_with = "deserialize_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

// weight 可能缺失、为 null 或为数字
fn deserialize_weight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(default_weight))
}

/// 题目数据问题
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionIssue {
    #[error("没有任何选项")]
    NoOptions,
    #[error("没有标注正确答案")]
    NoAnswer,
    #[error("答案序号 {index} 超出选项范围 [1, {len}]")]
    AnswerOutOfRange { index: usize, len: usize },
    #[error("下拉选项题的答案数量 ({answers}) 与选项数量 ({options}) 不一致")]
    AnswerCountMismatch { options: usize, answers: usize },
    #[error("第 {entry} 个下拉选项的答案序号 {index} 超出子选项范围 [1, {len}]")]
    SubChoiceOutOfRange { entry: usize, index: usize, len: usize },
}

impl Question {
    /// 将下拉选项拆分为子选项
    pub fn sub_choices(option: &str) -> Vec<&str> {
        option.split(',').map(str::trim).collect()
    }

    /// 是否有非空解析
    pub fn has_explanation(&self) -> bool {
        self.explanation
            .as_deref()
            .is_some_and(|e| !e.trim().is_empty())
    }

    /// 检查题目数据，返回发现的所有问题
    pub fn validate(&self) -> Vec<QuestionIssue> {
        let mut issues = Vec::new();

        if self.options.is_empty() {
            issues.push(QuestionIssue::NoOptions);
        }
        if self.answer.is_empty() {
            issues.push(QuestionIssue::NoAnswer);
        }

        match self.question_type {
            QuestionType::MultiOption => {
                if !self.answer.is_empty() && self.answer.len() != self.options.len() {
                    issues.push(QuestionIssue::AnswerCountMismatch {
                        options: self.options.len(),
                        answers: self.answer.len(),
                    });
                }
                for (entry, (option, &index)) in self.options.iter().zip(&self.answer).enumerate() {
                    let len = Self::sub_choices(option).len();
                    if index == 0 || index > len {
                        issues.push(QuestionIssue::SubChoiceOutOfRange {
                            entry: entry + 1,
                            index,
                            len,
                        });
                    }
                }
            }
            _ => {
                let len = self.options.len();
                for &index in &self.answer {
                    if index == 0 || index > len {
                        issues.push(QuestionIssue::AnswerOutOfRange { index, len });
                    }
                }
            }
        }

        issues
    }
}
