use qlm_core::RankerConfig;
use searcher::{read_batch, resolve_config, run, OutputFormat};
use serde_json::Value;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn rank_input(input: &str) -> anyhow::Result<String> {
    run(Cursor::new(input), &RankerConfig::default(), OutputFormat::Plain)
}

#[test]
fn ranks_cat_example() {
    let out = rank_input("3\nthe cat sat\nthe dog ran\nthe cat ran\ncat\n").unwrap();
    assert_eq!(out, "[0, 2, 1]");
}

#[test]
fn trims_lines_and_ignores_trailing_input() {
    let batch = read_batch(Cursor::new(" 2 \r\n  first doc  \n\nquery words \nextra\nlines\n")).unwrap();
    assert_eq!(batch.documents, vec!["first doc".to_string(), String::new()]);
    assert_eq!(batch.query, "query words");
}

#[test]
fn zero_documents() {
    assert_eq!(rank_input("0\nanything\n").unwrap(), "[]");
}

#[test]
fn empty_query_line_is_valid() {
    assert_eq!(rank_input("3\nc\nb\na\n\n").unwrap(), "[0, 1, 2]");
}

#[test]
fn rejects_malformed_input() {
    assert!(rank_input("").is_err());
    assert!(rank_input("three\na\nb\nc\nq\n").is_err());
    assert!(rank_input("-1\nq\n").is_err());
    // Declared count larger than the lines supplied.
    assert!(rank_input("3\na\nb\n").is_err());
    // Documents present but no query line.
    assert!(rank_input("2\na\nb\n").is_err());
}

#[test]
fn huge_declared_count_is_an_error_not_an_allocation() {
    assert!(rank_input("18446744073709551615\na\nq\n").is_err());
    assert!(read_batch(Cursor::new("1000000000\ndoc\nq\n")).is_err());
}

#[test]
fn json_output_carries_scores() {
    let cfg = RankerConfig { lambda: 0.7 };
    let out = run(Cursor::new("2\napple\nbanana\napple\n"), &cfg, OutputFormat::Json).unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["lambda"], 0.7);
    assert_eq!(v["ranking"], serde_json::json!([0, 1]));
    let scores = v["scores"].as_array().unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0]["index"], 0);
    assert!(scores[0]["score"].as_f64().unwrap() > scores[1]["score"].as_f64().unwrap());
}

#[test]
fn config_file_and_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ranker.json");
    fs::write(&path, r#"{"lambda": 1.0}"#).unwrap();

    let cfg = resolve_config(None, None, Some(path.as_path())).unwrap();
    assert_eq!(cfg.lambda, 1.0);
    assert_eq!(resolve_config(None, Some("0.2"), Some(path.as_path())).unwrap().lambda, 0.2);
    assert_eq!(resolve_config(Some(0.0), Some("0.2"), Some(path.as_path())).unwrap().lambda, 0.0);

    fs::write(&path, r#"{"lambda": 3}"#).unwrap();
    assert!(resolve_config(None, None, Some(path.as_path())).is_err());
    assert!(resolve_config(None, None, Some(dir.path().join("missing.json").as_path())).is_err());
}

#[test]
fn lambda_changes_ranking() {
    // Short document with one hit vs. long document with more hits.
    let input = "2\nrare\nrare common common common common common common common\nrare common\n";
    let doc_only = run(Cursor::new(input), &RankerConfig { lambda: 1.0 }, OutputFormat::Plain).unwrap();
    assert_eq!(doc_only, "[1, 0]");
    let coll_only = run(Cursor::new(input), &RankerConfig { lambda: 0.0 }, OutputFormat::Plain).unwrap();
    assert_eq!(coll_only, "[0, 1]");
}
