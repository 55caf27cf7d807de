use assert_cmd::Command;
use serde_json::Value;
use std::io::Write;

fn rigbench() -> Command {
    let mut cmd = Command::cargo_bin("rigbench").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_of(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn search_prints_json() {
    let hits = json_of(rigbench().args(&["catalog", "cpu", "search", "ryzen", "--limit", "3"]));
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 3);
    assert!(hits[0]["name"].as_str().unwrap().contains("Ryzen"));
    assert!(hits[0]["specs"].as_str().unwrap().ends_with('W'));
}

#[test]
fn list_prints_every_record() {
    let gpus = json_of(rigbench().args(&["catalog", "gpu", "list"]));
    assert_eq!(gpus.as_array().unwrap().len(), 23);

    let games = json_of(rigbench().args(&["games", "list"]));
    assert!(games
        .as_array()
        .unwrap()
        .iter()
        .any(|game| game["key"] == "overall"));
}

#[test]
fn analyze_without_gpu_fails() {
    rigbench()
        .args(&["analyze", "--cpu", "Intel Core i5-14400F"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("GPU"));
}

#[test]
fn analyze_unknown_component_fails() {
    rigbench()
        .args(&["analyze", "--cpu", "Pentium II", "--gpu", "NVIDIA RTX 4090"])
        .assert()
        .failure();
}

#[test]
fn analyze_with_seed_is_reproducible() {
    let args = [
        "analyze",
        "--cpu",
        "AMD Ryzen 7 7800X3D",
        "--gpu",
        "NVIDIA RTX 4080",
        "--ram",
        "G.Skill Trident Z5 32GB DDR5-6000",
        "--resolution",
        "4k",
        "--game",
        "cyberpunk2077",
        "--seed",
        "11",
    ];
    let first = json_of(rigbench().args(&args));
    let second = json_of(rigbench().args(&args));

    assert_eq!(first["result"], second["result"]);
    assert_eq!(first["report"], second["report"]);
    assert_eq!(first["result"]["resolution"], "4k");
    assert_eq!(first["result"]["game"], "cyberpunk2077");
    assert!(first["recommendations"]["upgrade"].is_string());
    assert!(first["completedAt"].is_string());
}

#[test]
fn config_file_sets_defaults() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        config,
        "[analysis]\nresolution = \"1080p\"\n\n[catalog]\nsearch_limit = 2"
    )
    .unwrap();
    let path = config.path().to_str().unwrap();

    let hits = json_of(rigbench().args(&["--config", path, "catalog", "gpu", "search", "nvidia"]));
    assert_eq!(hits.as_array().unwrap().len(), 2);

    let record = json_of(rigbench().args(&[
        "--config",
        path,
        "analyze",
        "--cpu",
        "Intel Core i9-14900K",
        "--gpu",
        "NVIDIA RTX 4090",
    ]));
    assert_eq!(record["result"]["resolution"], "1080p");
}

#[test]
fn rate_prints_band() {
    let rated = json_of(rigbench().args(&["rate", "fps", "119.999"]));
    assert_eq!(rated["rating"], "Good");
    assert_eq!(rated["kind"], "fps");
}

#[test]
fn settings_are_logged_once_logging_is_up() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[logging]\nfilter = \"debug\"").unwrap();

    rigbench()
        .args(&["--config", config.path().to_str().unwrap(), "games", "list"])
        .assert()
        .success()
        .stderr(predicates::str::contains("loaded settings"));
}
