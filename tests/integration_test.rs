use question_domain::models::{
    load_all_question_files, load_interaction_specs, load_misconceptions, load_question_file,
};
use question_domain::{App, Config, QuestionValidationError};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// 每个测试独占一个临时目录
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("question_domain_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn valid_question_json(id: Option<&str>) -> Value {
    json!({
        "id": id,
        "question_state_data": {
            "content": {"content_id": "content", "html": "<p>1/2 + 1/3 = ?</p>"},
            "interaction": {
                "id": "FractionInput",
                "customization_args": {"requireSimplestForm": {"value": false}},
                "hints": [{"hint_content": {"content_id": "hint_1", "html": "<p>通分</p>"}}],
                "solution": {
                    "answer_is_exclusive": false,
                    "correct_answer": {"numerator": 5, "denominator": 6},
                    "explanation": {"content_id": "solution", "html": "<p>5/6</p>"}
                },
                "answer_groups": [
                    {"outcome": {"labelled_as_correct": true, "dest": null}, "rule_specs": [], "tagged_skill_misconception_id": null},
                    {"outcome": {"labelled_as_correct": false, "dest": null}, "rule_specs": [], "tagged_skill_misconception_id": "skill_frac-0"}
                ],
                "default_outcome": {"dest": null, "labelled_as_correct": false}
            },
            "param_changes": [],
            "solicit_answer_details": false
        },
        "language_code": "en",
        "version": 7,
        "linked_skill_ids": ["skill_frac"],
        "inapplicable_misconception_ids": []
    })
}

fn write_json(path: &Path, value: &Value) {
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn config_for(dir: &Path) -> Config {
    Config {
        question_folder: dir.join("questions").to_string_lossy().to_string(),
        output_folder: dir.join("out").to_string_lossy().to_string(),
        misconceptions_file: Some(dir.join("misconceptions.json").to_string_lossy().to_string()),
        warn_file: dir.join("warn.txt").to_string_lossy().to_string(),
        output_log_file: dir.join("output.txt").to_string_lossy().to_string(),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_review_folder_end_to_end() {
    let dir = scratch_dir("e2e");
    let questions = dir.join("questions");
    std::fs::create_dir_all(&questions).unwrap();

    write_json(&questions.join("a_valid.json"), &valid_question_json(Some("q_a")));

    let mut no_hint = valid_question_json(None);
    no_hint["question_state_data"]["interaction"]["hints"] = json!([]);
    write_json(&questions.join("b_no_hint.json"), &no_hint);

    std::fs::write(questions.join("c_broken.json"), "{ not json").unwrap();
    std::fs::write(questions.join("notes.md"), "ignored").unwrap();

    write_json(
        &dir.join("misconceptions.json"),
        &json!({
            "skill_frac": [
                {"id": 0, "name": "分子分母分别相加", "must_be_addressed": true},
                {"id": 1, "name": "忘记约分", "must_be_addressed": true},
                {"id": 2, "name": "小数混淆", "must_be_addressed": false}
            ]
        }),
    );

    let app = App::initialize(config_for(&dir)).await.unwrap();
    let stats = app.run().await.unwrap();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.valid, 1);
    assert_eq!(stats.invalid, 1);
    assert_eq!(stats.unaddressed, 1);

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("out/a_valid.json")).unwrap())
            .unwrap();
    assert_eq!(written["id"], json!("q_a"));
    assert_eq!(written["version"], json!(7));
    assert_eq!(
        written["question_state_data"]["interaction"]["customization_args"],
        json!({"requireSimplestForm": {"value": false}})
    );
    assert!(!dir.join("out/b_no_hint.json").exists());

    let warn = std::fs::read_to_string(dir.join("warn.txt")).unwrap();
    assert!(warn.contains("b_no_hint.json"));
    assert!(warn.contains(&QuestionValidationError::MissingHint.to_string()));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_same_stem_questions_both_written() {
    let dir = scratch_dir("same_stem");
    let questions = dir.join("questions");
    std::fs::create_dir_all(&questions).unwrap();

    write_json(&questions.join("a.json"), &valid_question_json(Some("q_json")));
    std::fs::write(
        questions.join("a.toml"),
        r#"
id = "q_toml"
language_code = "en"
version = 2

[question_state_data.interaction]
id = "Continue"

[[question_state_data.interaction.hints]]
hint_content = { content_id = "hint_1", html = "<p>next</p>" }

[[question_state_data.interaction.answer_groups]]
outcome = { labelled_as_correct = true }
"#,
    )
    .unwrap();

    let config = Config {
        misconceptions_file: None,
        ..config_for(&dir)
    };
    let stats = App::initialize(config).await.unwrap().run().await.unwrap();
    assert_eq!(stats.valid, 2);

    let read = |name: &str| -> Value {
        serde_json::from_str(&std::fs::read_to_string(dir.join("out").join(name)).unwrap()).unwrap()
    };
    assert_eq!(read("a.json")["id"], json!("q_json"));
    assert_eq!(read("a.toml.json")["id"], json!("q_toml"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_initialize_rejects_unsupported_language() {
    let dir = scratch_dir("lang");
    let config = Config {
        default_language_code: "xx-unknown".to_string(),
        ..config_for(&dir)
    };

    assert!(App::initialize(config).await.is_err());
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_missing_question_folder_is_error() {
    let result = load_all_question_files("/definitely/not/a/real/folder").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_missing_specs_file_error_names_path() {
    let path = Path::new("/definitely/not/a/real/interaction_specs.json");
    let err = load_interaction_specs(path).await.unwrap_err();
    assert!(format!("{:#}", err).contains("interaction_specs.json"));
}

#[tokio::test]
async fn test_misconception_file_keeps_skill_order() {
    let dir = scratch_dir("order");
    let path = dir.join("misconceptions.json");
    std::fs::write(
        &path,
        r#"{"skill_b": [{"id": 1, "name": "b1"}], "skill_a": [{"id": 0, "name": "a0"}]}"#,
    )
    .unwrap();

    let map = load_misconceptions(&path).await.unwrap();
    let skills: Vec<&str> = map.iter().map(|(id, _)| id).collect();
    assert_eq!(skills, vec!["skill_b", "skill_a"]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_load_toml_question_blocking() {
    let dir = scratch_dir("toml");
    let path = dir.join("q.toml");
    std::fs::write(
        &path,
        r#"
id = "q_toml"
language_code = "es"
version = 3
linked_skill_ids = ["skill_1"]

[question_state_data.interaction]
id = "Continue"

[[question_state_data.interaction.hints]]
hint_content = { content_id = "hint_1", html = "<p>pista</p>" }

[[question_state_data.interaction.answer_groups]]
outcome = { labelled_as_correct = true }
"#,
    )
    .unwrap();

    let dict = tokio_test::block_on(load_question_file(&path)).unwrap();
    assert_eq!(dict.id.as_deref(), Some("q_toml"));
    assert_eq!(dict.language_code, "es");
    assert_eq!(dict.question_state_data.interaction.hints.len(), 1);
    assert!(dict.question_state_data.interaction.answer_groups[0]
        .outcome
        .labelled_as_correct);

    let _ = std::fs::remove_dir_all(&dir);
}
