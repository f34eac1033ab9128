use crate::error::LoadError;
use crate::models::bank::QuestionBank;
use crate::models::question::Question;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

/// 是否为远程地址
fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// 加载题库（本地路径或 http(s) 地址）
///
/// # 参数
/// - `source`: 题库 JSON 文件路径或 URL
/// - `strict`: 为 true 时跳过数据有问题的题目，否则保留并记录警告
pub async fn load_question_bank(source: &str, strict: bool) -> Result<QuestionBank, LoadError> {
    tracing::info!("正在加载题库: {}", source);

    let content = if is_remote(source) {
        fetch_remote(source).await?
    } else {
        read_local(Path::new(source)).await?
    };

    let bank = parse_question_bank(&content, source, strict)?;
    tracing::info!("成功加载 {} 个题目", bank.len());
    Ok(bank)
}

async fn read_local(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::from_io(path.display().to_string(), e))
}

async fn fetch_remote(url: &str) -> Result<String, LoadError> {
    let request_failed = |source| LoadError::RequestFailed {
        url: url.to_string(),
        source,
    };

    reqwest::get(url)
        .await
        .and_then(|res| res.error_for_status())
        .map_err(request_failed)?
        .text()
        .await
        .map_err(request_failed)
}

/// 解析题库 JSON（题目数组）并检查每道题的数据
pub fn parse_question_bank(
    content: &str,
    source: &str,
    strict: bool,
) -> Result<QuestionBank, LoadError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(content).map_err(|e| LoadError::ParseFailed {
            path: source.to_string(),
            source: e,
        })?;

    let mut seen_ids = HashSet::new();
    let mut accepted = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        // 单笔格式错误只跳过该笔，不影响整个题库
        let question = match serde_json::from_value::<Question>(record) {
            Ok(question) => question,
            Err(e) => {
                tracing::warn!("第 {} 笔题目无法解析，已跳过: {}", index + 1, e);
                continue;
            }
        };

        if !seen_ids.insert(question.id) {
            tracing::warn!("题号 {} 重复出现", question.id);
        }

        let issues = question.validate();
        if issues.is_empty() {
            accepted.push(question);
            continue;
        }

        for issue in &issues {
            tracing::warn!("第 {} 题数据有问题: {}", question.id, issue);
        }
        if strict {
            tracing::warn!("严格模式：跳过第 {} 题", question.id);
        } else {
            accepted.push(question);
        }
    }

    Ok(QuestionBank::new(accepted))
}
