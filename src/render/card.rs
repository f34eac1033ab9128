use crate::models::Question;
use crate::render::badges::{id_badge, type_badge, weight_badge};
use crate::render::options::render_options;
use crate::services::highlight;
use crate::text::process_text;
use maud::{html, Markup, PreEscaped};

/// 题干 HTML（换行、反引号处理后再高亮）
pub fn render_question_body(question: &Question, keyword: &str) -> String {
    highlight(&process_text(&question.question), keyword)
}

/// 渲染单题卡片
pub fn render_question(question: &Question, keyword: &str) -> Markup {
    let image = question.image.as_deref().filter(|src| !src.trim().is_empty());

    html! {
        div class="search-result-card" {
            // 标题列：题号 + 题型 + 权重
            div class="d-flex align-items-center mb-2" {
                (id_badge(question))
                (type_badge(&question.question_type))
                @if let Some(badge) = weight_badge(question) { (badge) }
            }

            div class="search-question-text" { (PreEscaped(render_question_body(question, keyword))) }

            @if let Some(src) = image {
                div class="my-2" {
                    img src=(src) alt="題目圖片" style="max-width:100%;max-height:300px;border-radius:6px;";
                }
            }

            (render_options(question, keyword))

            @if let Some(explanation) = question.explanation.as_deref().filter(|_| question.has_explanation()) {
                (render_explanation(explanation, keyword))
            }
        }
    }
}

/// 渲染解析（预设折叠）
pub fn render_explanation(explanation: &str, keyword: &str) -> Markup {
    let explanation_html = highlight(&process_text(explanation), keyword);

    html! {
        details class="mt-2" {
            summary style="cursor:pointer;color:#3498db;font-weight:bold;" {
                i class="fa-solid fa-lightbulb" {}
                " 查看解析"
            }
            div class="search-explanation" { (PreEscaped(explanation_html)) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;
    use crate::text::strip_tags;

    fn ram_question() -> Question {
        Question {
            id: 1,
            question_type: QuestionType::Single,
            question: "What is <code>RAM</code>?".to_string(),
            options: vec!["Memory".to_string(), "Disk".to_string()],
            answer: vec![1],
            explanation: None,
            image: None,
            weight: 1.0,
        }
    }

    #[test]
    fn test_card_header_order() {
        let html = render_question(&ram_question(), "").into_string();
        let id_pos = html.find("第 1 題").unwrap();
        let type_pos = html.find("單選").unwrap();
        let body_pos = html.find("search-question-text").unwrap();
        let options_pos = html.find("search-options").unwrap();
        assert!(id_pos < type_pos && type_pos < body_pos && body_pos < options_pos);
        assert!(!html.contains("權重"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<details"));
    }

    #[test]
    fn test_weight_image_and_explanation() {
        let mut question = ram_question();
        question.weight = 2.0;
        question.image = Some("img/q1.png".to_string());
        question.explanation = Some("RAM is `volatile`".to_string());

        let html = render_question(&question, "volatile").into_string();
        assert!(html.contains(r#"<span class="badge bg-warning text-dark ms-2">權重 2</span>"#));
        assert!(html.contains(r#"<img src="img/q1.png" alt="題目圖片""#));
        assert!(html.contains(r#"<details class="mt-2">"#));
        // 行内代码里的关键字不高亮
        assert!(html.contains("RAM is <code>volatile</code>"));
        assert!(!html.contains("<mark>volatile</mark>"));
    }

    #[test]
    fn test_blank_explanation_not_rendered() {
        let mut question = ram_question();
        question.explanation = Some("  ".to_string());
        assert!(!render_question(&question, "").into_string().contains("查看解析"));
    }

    #[test]
    fn test_body_round_trip_visible_text() {
        let question = ram_question();
        assert_eq!(strip_tags(&render_question_body(&question, "")), "What is RAM?");
        assert_eq!(strip_tags(&render_question_body(&question, "what")), "What is RAM?");
    }

    #[test]
    fn test_highlight_in_question_body() {
        let html = render_question(&ram_question(), "what").into_string();
        assert!(html.contains("<mark>What</mark> is <code>RAM</code>?"));
    }
}
