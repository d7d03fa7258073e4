use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn catz(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("catz").unwrap();
    cmd.env("CATZ_DATA_DIR", data.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_fields_lists_plugin_fields() {
    let data = TempDir::new().unwrap();
    catz(&data)
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("moodlets"))
        .stdout(predicate::str::contains("set<enum Activity>"));
}

#[test]
fn test_show_missing_day_prints_defaults() {
    let data = TempDir::new().unwrap();
    catz(&data)
        .args(["show", "--day", "2024-01-02", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""day": "2024-01-02""#))
        .stdout(predicate::str::contains(r#""energy": -1"#))
        .stdout(predicate::str::contains(r#""type": "Other""#));
    // Showing does not create a file
    assert!(!data.path().join("2024-01-02.json").exists());
}

#[test]
fn test_set_then_show() {
    let data = TempDir::new().unwrap();
    catz(&data)
        .args(["set", "energy", "3", "--day", "2024-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-02: energy = 3"));
    catz(&data)
        .args(["set", "type", "v", "--day", "2024-01-02"])
        .assert()
        .success();
    catz(&data)
        .args(["set", "activities", r#"["Yoga", "h", ""]"#, "--day", "2024-01-02"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(data.path().join("2024-01-02.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["energy"], 3);
    assert_eq!(json["type"], "Social");
    assert_eq!(json["activities"], serde_json::json!(["Yoga", "Vegetables"]));
    assert_eq!(json["moodlets"], serde_json::json!([]));
}

#[test]
fn test_set_rejects_bad_values() {
    let data = TempDir::new().unwrap();
    catz(&data)
        .args(["set", "energy", "lots", "--day", "2024-01-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid integer"));
    catz(&data)
        .args(["set", "type", "Sabbatical", "--day", "2024-01-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a member"));
    catz(&data)
        .args(["set", "sleep", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field 'sleep'"));
    assert!(!data.path().join("2024-01-02.json").exists());
}

#[test]
fn test_corrupt_day_fails_to_load() {
    let data = TempDir::new().unwrap();
    std::fs::write(
        data.path().join("2024-01-05.json"),
        r#"{"day": "2024-01-05", "energy": true}"#,
    )
    .unwrap();
    catz(&data)
        .args(["show", "--day", "2024-01-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load 2024-01-05"));
}

#[test]
fn test_edit_walks_pages_in_order() {
    let data = TempDir::new().unwrap();
    catz(&data)
        .args(["edit", "--day", "2024-03-04"])
        .write_stdin("4\n3\n2\nh\nrested\n\ny\nW\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Mood =="))
        .stdout(predicate::str::contains("== Activities =="));

    let saved = std::fs::read_to_string(data.path().join("2024-03-04.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "day": "2024-03-04",
            "overall": 4,
            "energy": 3,
            "productivity": 2,
            "type": "Holiday",
            "moodlets": ["rested"],
            "activities": ["Yoga", "Hike"],
        })
    );
}

#[test]
fn test_chart_marks_missing_days() {
    let data = TempDir::new().unwrap();
    std::fs::write(
        data.path().join("2024-01-02.json"),
        r#"{"day": "2024-01-02", "overall": 3, "energy": 2, "productivity": 4}"#,
    )
    .unwrap();

    catz(&data)
        .args(["chart", "--days", "3", "--until", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood [2..20]"))
        .stdout(predicate::str::contains("2024-01-01    -1  grey"))
        .stdout(predicate::str::contains("14 (o: 3, e: 2, p: 4)"));
}

#[test]
fn test_chart_days_from_config() {
    let data = TempDir::new().unwrap();
    std::fs::write(data.path().join("config.json"), r#"{"chart_days": 2}"#).unwrap();

    let out = catz(&data)
        .args(["chart", "--until", "2024-01-03", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let points = json[0]["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["day"], "2024-01-02");
    assert_eq!(points[1]["colour"], "grey");
}

#[test]
fn test_chart_reads_only_stored_days_in_window() {
    let data = TempDir::new().unwrap();
    std::fs::write(data.path().join("2023-12-01.json"), "{broken").unwrap();
    std::fs::write(
        data.path().join("2024-01-03.json"),
        r#"{"overall": 1, "energy": 1, "productivity": 1}"#,
    )
    .unwrap();

    catz(&data)
        .args(["chart", "--days", "2", "--until", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-02    -1  grey"))
        .stdout(predicate::str::contains("2 (o: 1, e: 1, p: 1)"));
}

#[test]
fn test_set_on_misdated_file_keeps_other_day() {
    let data = TempDir::new().unwrap();
    std::fs::write(
        data.path().join("2024-01-07.json"),
        r#"{"day": "2024-01-07", "energy": 4}"#,
    )
    .unwrap();
    std::fs::write(
        data.path().join("2024-01-05.json"),
        r#"{"day": "2024-01-07", "energy": 1}"#,
    )
    .unwrap();

    catz(&data)
        .args(["set", "energy", "2", "--day", "2024-01-05"])
        .assert()
        .success();

    let read = |name: &str| -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(data.path().join(name)).unwrap()).unwrap()
    };
    assert_eq!(read("2024-01-07.json")["energy"], 4);
    assert_eq!(read("2024-01-05.json")["energy"], 2);
    assert_eq!(read("2024-01-05.json")["day"], "2024-01-05");
}
