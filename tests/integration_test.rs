use question_bank_search::models::parse_question_bank;
use question_bank_search::render::render_question_body;
use question_bank_search::{
    highlight, perform_search, render_results, search, strip_tags, App, Command, Config,
    QuestionBank, QuestionType, TypeFilter,
};
use std::io::Write;

const BANK: &str = r#"[
    {"id": 1, "type": "single", "question": "What is <code>RAM</code>?", "options": ["Memory", "Disk"], "answer": [1]},
    {"id": 2, "type": "multiple", "question": "Which are cloud models?", "options": ["IaaS", "PaaS", "Toaster"], "answer": [1, 2], "weight": 2},
    {"id": 12, "type": "multioption", "question": "Fill the blanks", "options": ["A, B, C"], "answer": [2]},
    {"id": 20, "type": "truefalse", "question": "Azure is a `cloud` platform", "options": ["Yes", "No"], "answer": [1],
     "explanation": "Use <pre><code class=\"language-sh\">az login</code></pre> to sign in to azure."}
]"#;

fn bank() -> QuestionBank {
    parse_question_bank(BANK, "integration", false).expect("题库解析失败")
}

#[test]
fn test_search_ram_through_tags() {
    let bank = bank();
    let results = search(&bank, "ram", &TypeFilter::from_types([QuestionType::Single]));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 1);

    let html = render_results(&results, "ram").into_string();
    assert!(html.contains("search-correct-option"));
    assert!(html.contains("Memory<span class=\"badge bg-success ms-2\">正確答案</span>"));
    // 代码内的关键字不标记
    assert!(!html.contains("<mark>"));
}

#[test]
fn test_keyword_matches_id_exactly() {
    let bank = bank();
    let ids: Vec<u64> = search(&bank, "2", &TypeFilter::all())
        .iter()
        .map(|q| q.id)
        .collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_search_only_returns_selected_types() {
    let bank = bank();
    let types = TypeFilter::from_types([QuestionType::Multiple, QuestionType::TrueFalse]);
    for keyword in ["a", "cloud", "i", "2"] {
        for question in search(&bank, keyword, &types) {
            assert!(types.contains(&question.question_type));
        }
    }
}

#[test]
fn test_multioption_marks_only_second_choice() {
    let bank = bank();
    let results = search(&bank, "12", &TypeFilter::all());
    let html = render_results(&results, "12").into_string();
    assert!(html.contains(r#"<span class="badge bg-success me-1">B</span>"#));
    assert!(html.contains(r#"<span class="me-1">A</span>"#));
    assert!(html.contains(r#"<span class="me-1">C</span>"#));
}

#[test]
fn test_explanation_code_block_not_highlighted() {
    let bank = bank();
    let outcome = perform_search(&bank, "az", &TypeFilter::all());
    assert!(outcome.html.contains(r#"<code class="language-sh">az login</code>"#));
    assert!(outcome.html.contains("<mark>az</mark>ure"));
    assert!(outcome.html.contains("<code>cloud</code>"));
}

#[test]
fn test_blank_keyword_is_not_show_all() {
    let bank = bank();
    assert!(search(&bank, "", &TypeFilter::all()).is_empty());

    let outcome = perform_search(&bank, "", &TypeFilter::all());
    assert_eq!(outcome.html, "");
    assert_eq!(outcome.count_label.as_deref(), Some("題庫共 4 題"));
}

#[test]
fn test_highlight_properties() {
    let html = "<p title=\"a.b\">a.b and axb <code>a.b</code></p>";
    assert_eq!(highlight(html, ""), html);
    assert_eq!(
        highlight(html, "a.b"),
        "<p title=\"a.b\"><mark>a.b</mark> and axb <code>a.b</code></p>"
    );
    assert_eq!(strip_tags(&highlight(html, "a.b")), strip_tags(html));
}

#[test]
fn test_question_body_round_trip() {
    let bank = bank();
    for question in bank.iter() {
        assert_eq!(
            strip_tags(&render_question_body(question, "")).replace('`', ""),
            strip_tags(&question.question).replace('`', "")
        );
    }
}

#[tokio::test]
async fn test_app_end_to_end_with_files() {
    let mut bank_file = tempfile::NamedTempFile::new().unwrap();
    bank_file.write_all(BANK.as_bytes()).unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("results.html");

    let config = Config {
        questions_path: bank_file.path().to_str().unwrap().to_string(),
        output_html_file: out_path.to_str().unwrap().to_string(),
        ..Config::default()
    };

    let mut app = App::initialize(config).await.unwrap();
    assert_eq!(app.context().bank().len(), 4);
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "");

    app.handle(Command::Commit("paas".to_string())).unwrap();
    let html = std::fs::read_to_string(&out_path).unwrap();
    assert!(html.contains("<mark>PaaS</mark>"));
    assert!(html.contains("權重 2"));
}

#[tokio::test]
async fn test_app_load_failure_shows_message() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("results.html");
    let missing = dir.path().join("missing.json");

    let config = Config {
        questions_path: missing.to_str().unwrap().to_string(),
        output_html_file: out_path.to_str().unwrap().to_string(),
        ..Config::default()
    };

    let mut app = App::initialize(config).await.unwrap();
    assert!(app.context().is_load_failed());
    assert!(std::fs::read_to_string(&out_path)
        .unwrap()
        .contains("題庫載入失敗"));

    app.handle(Command::Commit("ram".to_string())).unwrap();
    assert!(std::fs::read_to_string(&out_path)
        .unwrap()
        .contains("找不到符合的題目"));
}
