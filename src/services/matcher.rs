//! 题目搜索 - 业务能力层
//!
//! 只负责"哪些题目符合关键字和题型"，不关心渲染

use crate::models::{Question, QuestionBank, TypeFilter};
use crate::text::strip_tags;

/// 判断单个题目是否包含关键字
///
/// `keyword` 须已去除首尾空白并转为小写。
/// 比对范围：题干（去标签）、所有选项（去标签，以空格连接）、
/// 解析（不去标签）、题号（完全相等）。
pub fn matches_keyword(question: &Question, keyword: &str) -> bool {
    let question_text = strip_tags(&question.question).to_lowercase();
    if question_text.contains(keyword) {
        return true;
    }

    let option_texts = question
        .options
        .iter()
        .map(|o| strip_tags(o).to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    if option_texts.contains(keyword) {
        return true;
    }

    let explanation_text = question
        .explanation
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    if explanation_text.contains(keyword) {
        return true;
    }

    question.id.to_string() == keyword
}

/// 按题型和关键字筛选题库，保持题库原有顺序
///
/// 关键字为空白时不做筛选也不显示任何题目，返回空列表。
pub fn search<'a>(bank: &'a QuestionBank, keyword: &str, types: &TypeFilter) -> Vec<&'a Question> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() || types.is_empty() {
        return Vec::new();
    }

    bank.iter()
        .filter(|q| types.contains(&q.question_type))
        .filter(|q| matches_keyword(q, &keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;

    fn question(id: u64, question_type: QuestionType, text: &str, options: &[&str]) -> Question {
        Question {
            id,
            question_type,
            question: text.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            answer: vec![1],
            explanation: None,
            image: None,
            weight: 1.0,
        }
    }

    fn bank() -> QuestionBank {
        let mut with_explanation = question(3, QuestionType::TrueFalse, "Statement", &["Yes", "No"]);
        with_explanation.explanation = Some("See <b>Azure</b> docs".to_string());

        QuestionBank::new(vec![
            question(1, QuestionType::Single, "What is <code>RAM</code>?", &["Memory", "Disk"]),
            question(2, QuestionType::Multiple, "Pick the <i>clouds</i>", &["Azure", "C++ SDK"]),
            with_explanation,
            question(12, QuestionType::MultiOption, "Fill blanks", &["A, B, C"]),
        ])
    }

    fn ids(results: &[&Question]) -> Vec<u64> {
        results.iter().map(|q| q.id).collect()
    }

    #[test]
    fn test_matches_tag_stripped_question_text() {
        let bank = bank();
        let results = search(&bank, "ram", &TypeFilter::from_types([QuestionType::Single]));
        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn test_blank_keyword_returns_nothing() {
        let bank = bank();
        assert!(search(&bank, "", &TypeFilter::all()).is_empty());
        assert!(search(&bank, "   ", &TypeFilter::all()).is_empty());
    }

    #[test]
    fn test_empty_type_filter_returns_nothing() {
        let bank = bank();
        assert!(search(&bank, "ram", &TypeFilter::none()).is_empty());
    }

    #[test]
    fn test_type_filter_excludes() {
        let bank = bank();
        let mut types = TypeFilter::all();
        types.set(QuestionType::Multiple, false);
        assert!(search(&bank, "azure", &types).iter().all(|q| q.id != 2));
    }

    #[test]
    fn test_id_matches_exactly() {
        let bank = bank();
        assert_eq!(ids(&search(&bank, "2", &TypeFilter::all())), vec![2]);
        assert_eq!(ids(&search(&bank, " 12 ", &TypeFilter::all())), vec![12]);
    }

    #[test]
    fn test_options_and_explanation() {
        let bank = bank();
        assert_eq!(ids(&search(&bank, "AZURE", &TypeFilter::all())), vec![2, 3]);
        assert_eq!(ids(&search(&bank, "<b>azure", &TypeFilter::all())), vec![3]);
        assert_eq!(ids(&search(&bank, "disk", &TypeFilter::all())), vec![1]);
        assert_eq!(ids(&search(&bank, "b, c", &TypeFilter::all())), vec![12]);
    }

    #[test]
    fn test_regex_special_keyword_is_literal() {
        let bank = bank();
        assert_eq!(ids(&search(&bank, "c++", &TypeFilter::all())), vec![2]);
        assert!(search(&bank, "r.m", &TypeFilter::all()).is_empty());
    }
}
