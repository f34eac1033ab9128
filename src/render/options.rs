//! 选项渲染（依题型处理）

use crate::models::{Question, QuestionType};
use crate::services::highlight;
use maud::{html, Markup, PreEscaped};

fn check_icon() -> Markup {
    html! { i class="fa-solid fa-check text-success me-1" {} }
}

fn correct_badge(label: &str) -> Markup {
    html! { span class="badge bg-success ms-2" { (label) } }
}

fn option_class(is_correct: bool) -> &'static str {
    if is_correct {
        "search-option search-correct-option"
    } else {
        "search-option"
    }
}

/// 渲染选项列表
pub fn render_options(question: &Question, keyword: &str) -> Markup {
    html! {
        div class="search-options" {
            @match question.question_type {
                QuestionType::TrueFalse => { (render_true_false(question, keyword)) }
                QuestionType::MultiOption => { (render_multi_option(question, keyword)) }
                QuestionType::Multiple => { (render_choices(question, keyword, "正確")) }
                _ => { (render_choices(question, keyword, "正確答案")) }
            }
        }
    }
}

/// 是非题：每个选项是一句完整陈述
fn render_true_false(question: &Question, keyword: &str) -> Markup {
    html! {
        @for (idx, option) in question.options.iter().enumerate() {
            @let is_correct = question.answer.contains(&(idx + 1));
            div class=(option_class(is_correct)) {
                @if is_correct { (check_icon()) }
                span { (PreEscaped(highlight(option, keyword))) }
                @if is_correct { (correct_badge("正確答案")) }
            }
        }
    }
}

/// 下拉选项题：每个选项形如 "空格N: opt1, opt2, opt3"，
/// `answer[idx]` 为第 idx 个选项中正确子选项的序号。
///
/// 没有对应答案或答案超出子选项范围时，不标记任何子选项。
fn render_multi_option(question: &Question, keyword: &str) -> Markup {
    html! {
        @for (idx, option) in question.options.iter().enumerate() {
            @let parts = Question::sub_choices(option);
            @let correct_idx = question.answer.get(idx).and_then(|a| a.checked_sub(1));
            div class="search-option" {
                span class="option-number" { "選項 " (idx + 1) "：" }
                @for (p_idx, part) in parts.iter().enumerate() {
                    @if Some(p_idx) == correct_idx {
                        span class="badge bg-success me-1" { (PreEscaped(highlight(part, keyword))) }
                    } @else {
                        span class="me-1" { (PreEscaped(highlight(part, keyword))) }
                    }
                    @if p_idx + 1 < parts.len() { " / " }
                }
            }
        }
    }
}

/// 单选 / 复选（未知题型同单选）：编号列出，选项内换行显示为 `<br>`
fn render_choices(question: &Question, keyword: &str, correct_label: &str) -> Markup {
    html! {
        @for (idx, option) in question.options.iter().enumerate() {
            @let is_correct = question.answer.contains(&(idx + 1));
            div class=(option_class(is_correct)) {
                span class="option-number" { (idx + 1) "." }
                " "
                @if is_correct { (check_icon()) }
                (PreEscaped(highlight(&option.replace('\n', "<br>"), keyword)))
                @if is_correct { (correct_badge(correct_label)) }
            }
        }
    }
}
