use crate::models::{Question, QuestionType};
use maud::{html, Markup};
use phf::phf_map;

/// 题型标签（class, 文字）
static TYPE_BADGES: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "single" => ("badge bg-info", "單選"),
    "multiple" => ("badge bg-warning text-dark", "複選"),
    "truefalse" => ("badge bg-secondary", "是非"),
    "multioption" => ("badge bg-purple text-white", "下拉選項"),
};

/// 题号标签
pub fn id_badge(question: &Question) -> Markup {
    html! {
        span class="badge bg-primary me-2" { "第 " (question.id) " 題" }
    }
}

/// 题型标签，未知题型显示原始字符串
pub fn type_badge(question_type: &QuestionType) -> Markup {
    match TYPE_BADGES.get(question_type.as_str()) {
        Some(&(class, label)) => html! { span class=(class) { (label) } },
        None => html! { span class="badge bg-dark" { (question_type.as_str()) } },
    }
}

/// 权重标签，只在权重大于 1 时显示
pub fn weight_badge(question: &Question) -> Option<Markup> {
    (question.weight > 1.0).then(|| {
        html! {
            span class="badge bg-warning text-dark ms-2" { "權重 " (format!("{}", question.weight)) }
        }
    })
}
