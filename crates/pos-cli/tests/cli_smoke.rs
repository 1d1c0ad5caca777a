use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

fn positroid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_positroid"))
        .args(args)
        .output()
        .expect("spawn positroid")
}

fn json_lines(output: &Output) -> Vec<Value> {
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn json_document(output: &Output) -> Value {
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

fn write_input(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn matroids_prints_one_record_per_matroid() {
    let records = json_lines(&positroid(&["matroids", "--n", "4", "--k", "2"]));
    assert_eq!(records.len(), 36);
    assert!(records
        .iter()
        .all(|record| record["hash"].as_str().map(str::len) == Some(64)));
    let positroids = records
        .iter()
        .filter(|record| record["positroid"] == Value::Bool(true))
        .count();
    assert_eq!(positroids, 33);

    let filtered = json_lines(&positroid(&[
        "matroids",
        "--n",
        "4",
        "--k",
        "2",
        "--parallel",
        "--positroids-only",
    ]));
    assert_eq!(filtered.len(), 33);
}

#[test]
fn matroids_rejects_rank_above_ground_set() {
    let output = positroid(&["matroids", "--n", "2", "--k", "3"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("rank-exceeds-ground-set"));
}

#[test]
fn le_diagrams_lists_every_diagram() {
    let records = json_lines(&positroid(&["le-diagrams", "--n", "4", "--k", "2"]));
    assert_eq!(records.len(), 33);
    assert_eq!(records[0]["dimension"], 0);
    assert_eq!(records[32]["dimension"], 4);
    assert_eq!(records[32]["necklace"]["entries"][0], serde_json::json!([1, 2]));
}

#[test]
fn necklace_reports_the_envelope() {
    let dir = tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "crossing.json",
        r#"{"n": 4, "bases": [[1, 2], [1, 4], [2, 3], [3, 4]]}"#,
    );
    let report = json_document(&positroid(&["necklace", "--input", &input]));
    assert_eq!(report["positroid"], false);
    assert_eq!(report["positroid_bases"].as_array().unwrap().len(), 6);
    assert_eq!(report["dimension"], 4);
    assert_eq!(
        report["necklace"]["permutation"]["images"],
        serde_json::json!([3, 4, 1, 2])
    );
}

#[test]
fn closure_completes_two_triangles() {
    let dir = tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "circuits.json",
        r#"{"n": 4, "circuits": [[1, 2, 3], [1, 2, 4]]}"#,
    );
    let report = json_document(&positroid(&["closure", "--input", &input]));
    assert_eq!(report["insertions"], 2);
    assert_eq!(report["circuits"].as_array().unwrap().len(), 4);
    assert_eq!(report["bases"].as_array().unwrap().len(), 6);

    let capped = positroid(&["closure", "--input", &input, "--max-insertions", "1"]);
    assert!(!capped.status.success());
    assert!(String::from_utf8_lossy(&capped.stderr).contains("closure-diverged"));
}

#[test]
fn le_diagram_inverts_a_necklace() {
    let dir = tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "necklace.json",
        r#"{"necklace": {"n": 4, "k": 2, "entries": [[1, 2], [2, 3], [3, 4], [1, 4]]}}"#,
    );
    let report = json_document(&positroid(&["le-diagram", "--input", &input]));
    assert_eq!(report["dimension"], 4);
    assert_eq!(
        report["diagram"]["rows"],
        serde_json::json!([["+", "+"], ["+", "+"]])
    );
}
