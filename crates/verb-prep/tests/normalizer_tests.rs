use std::path::Path;
use tempfile::TempDir;
use verb_prep::*;

const HEADER: &str =
    "infinitive,spanish,pronunciation,simple_past,past_participle,gerund,image_url\n";

fn write_csv(dir: &Path, body: &str) -> NormalizeOptions {
    let layout = ProjectLayout::new(dir);
    let input = layout.input_csv();
    std::fs::create_dir_all(input.parent().unwrap()).unwrap();
    std::fs::write(&input, format!("{HEADER}{body}")).unwrap();
    NormalizeOptions::from_layout(&layout)
}

fn row(infinitive: &str) -> VerbRow {
    VerbRow {
        infinitive: infinitive.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_normalize_rows_run_scenario() {
    let rows = vec![VerbRow {
        infinitive: "To Run ".to_string(),
        spanish: " correr\u{00a0}".to_string(),
        pronunciation: "rán".to_string(),
        simple_past: "Ran".to_string(),
        past_participle: " RUN".to_string(),
        gerund: "running".to_string(),
        image_url: "".to_string(),
    }];

    let records = normalize_rows(&rows);
    assert_eq!(records.len(), 1);
    let run = &records[0];
    assert_eq!(run.id, "to_run");
    assert_eq!(run.infinitive, "run");
    assert_eq!(run.past, "ran");
    assert_eq!(run.past_participle, "run");
    assert_eq!(run.gerund, "running");
    assert_eq!(run.spanish, "correr");
    assert_eq!(run.image, "");
}

#[test]
fn test_normalize_rows_first_duplicate_wins() {
    let mut first = row("eat");
    first.spanish = "comer".to_string();
    let mut second = row("To  EAT");
    second.spanish = "tragar".to_string();

    let records = normalize_rows(&[first, second, row("drink")]);
    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["to_eat", "to_drink"]);
    assert_eq!(records[0].spanish, "comer");
}

#[test]
fn test_normalize_rows_drops_empty_infinitive() {
    let records = normalize_rows(&[row(""), row(" \u{00a0} "), row("go")]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "to_go");
}

#[test]
fn test_normalize_rows_multi_word_id() {
    let records = normalize_rows(&[row("to  give   up")]);
    assert_eq!(records[0].infinitive, "give up");
    assert_eq!(records[0].id, "to_give_up");
}

#[test]
fn test_normalize_rows_keeps_image_url() {
    let mut r = row("fly");
    r.image_url = "  https://example.com/fly.jpg ".to_string();
    let records = normalize_rows(&[r]);
    assert_eq!(records[0].image, "https://example.com/fly.jpg");
}

#[test]
fn test_normalize_rows_invariants() {
    let rows: Vec<_> = ["To Run", "to  run", "TO\u{00a0}Sleep  In", "  ", "walk", "Walk "]
        .into_iter()
        .map(row)
        .collect();
    let records = normalize_rows(&rows);

    let mut ids = std::collections::HashSet::new();
    for record in &records {
        assert!(!record.infinitive.is_empty());
        assert!(!record.infinitive.starts_with("to "));
        assert!(!record.infinitive.contains("  "));
        assert!(!record.infinitive.contains('\u{00a0}'));
        assert!(ids.insert(record.id.clone()), "duplicate id {}", record.id);
    }
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_normalize_rows_space_and_underscore_share_id() {
    let mut first = row("give up");
    first.spanish = "rendirse".to_string();
    let rows = [first, row("give_up"), row("To Give_Up"), row("give in")];

    let records = normalize_rows(&rows);
    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["to_give_up", "to_give_in"]);
    assert_eq!(records[0].infinitive, "give up");
    assert_eq!(records[0].spanish, "rendirse");
}

#[tokio::test]
async fn test_run_normalizer_writes_dataset() {
    let temp = TempDir::new().unwrap();
    let options = write_csv(
        temp.path(),
        "To Run ,correr,rán,Ran,Run,running,\n\
         eat,comer,ít,ate,eaten,eating,\n\
         To eat,tragar,,ate,eaten,eating,\n\
         ,vacío,,,,,\n",
    );

    let report = run_normalizer(&options).await.unwrap();
    assert_eq!(report.records, 2);
    assert_eq!(report.output, temp.path().join("public/verbs.json"));

    let records = load_dataset(&report.output).await.unwrap();
    assert_eq!(records[0].id, "to_run");
    assert_eq!(records[0].past, "ran");
    assert_eq!(records[1].id, "to_eat");
    assert_eq!(records[1].spanish, "comer");

    let text = std::fs::read_to_string(&report.output).unwrap();
    assert!(text.contains("\"pronunciation\": \"rán\""));
}

#[tokio::test]
async fn test_run_normalizer_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let options = write_csv(
        temp.path(),
        "to go,ir,góu,went,gone,going,\nto see,ver,sí,saw,seen,seeing,\n",
    );

    run_normalizer(&options).await.unwrap();
    let first = std::fs::read(&options.output_json).unwrap();
    run_normalizer(&options).await.unwrap();
    let second = std::fs::read(&options.output_json).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_run_normalizer_missing_input() {
    let temp = TempDir::new().unwrap();
    let options = NormalizeOptions::from_layout(&ProjectLayout::new(temp.path()));

    let err = run_normalizer(&options).await.unwrap_err();
    assert!(matches!(err, PrepError::Io(_)));
    assert!(!options.output_json.exists());
}

#[tokio::test]
async fn test_run_normalizer_missing_column_leaves_output() {
    let temp = TempDir::new().unwrap();
    let layout = ProjectLayout::new(temp.path());
    let options = NormalizeOptions::from_layout(&layout);
    std::fs::create_dir_all(layout.input_csv().parent().unwrap()).unwrap();
    std::fs::write(&options.input_csv, "infinitive,spanish\nrun,correr\n").unwrap();
    std::fs::create_dir_all(options.output_json.parent().unwrap()).unwrap();
    std::fs::write(&options.output_json, "[]").unwrap();

    let err = run_normalizer(&options).await.unwrap_err();
    assert!(matches!(err, PrepError::MissingColumn("pronunciation")));
    assert_eq!(std::fs::read_to_string(&options.output_json).unwrap(), "[]");
}

#[tokio::test]
async fn test_run_normalizer_rejects_output_over_input() {
    let temp = TempDir::new().unwrap();
    let mut options = write_csv(temp.path(), "to go,ir,,went,gone,going,\n");
    options.output_json = options.input_csv.clone();

    let err = run_normalizer(&options).await.unwrap_err();
    assert!(matches!(err, PrepError::Config(_)));
    let csv = std::fs::read_to_string(&options.input_csv).unwrap();
    assert!(csv.starts_with("infinitive,"));
}
