use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bodycomp"))
}

/// An isolated home: config and data dirs live under a temp dir.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    fn store_path(&self) -> PathBuf {
        self.dir.path().join("entries.json")
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn data_home(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env("NO_COLOR", "1")
            .env_remove("BODYCOMP_CONFIG")
            .env_remove("BODYCOMP_STORE")
            .env_remove("BODYCOMP_LOG");
        cmd
    }

    /// Run with `--store` pointing at the sandbox store.
    fn run(&self, args: &[&str]) -> Output {
        let store = self.store_path();
        let mut cmd = self.command();
        cmd.arg("--store").arg(&store).args(args);
        cmd.output().expect("run bodycomp")
    }

    /// Run without `--store`, relying on config resolution.
    fn run_bare(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run bodycomp")
    }

    fn add(
        &self,
        date: &str,
        weight: &str,
        muscle: &str,
        fat_mass: &str,
        fat_percent: &str,
    ) -> Output {
        self.run(&[
            "add",
            "--no-input",
            "--date",
            date,
            "--weight",
            weight,
            "--muscle",
            muscle,
            "--fat-mass",
            fat_mass,
            "--fat-percent",
            fat_percent,
        ])
    }

    fn list_json(&self) -> Vec<serde_json::Value> {
        let output = self.run(&["list", "--json"]);
        assert!(output.status.success(), "list failed: {}", stderr(&output));
        serde_json::from_slice(&output.stdout).expect("list output is JSON")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "stdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}

fn read_store(path: &Path) -> Vec<serde_json::Value> {
    let bytes = std::fs::read(path).expect("read store");
    serde_json::from_slice(&bytes).expect("store is a JSON array")
}

#[test]
fn test_add_then_list_newest_first() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2024-01-01", "80", "40", "12", "15").status.success());
    assert!(sandbox.add("2024-02-01", "82", "41", "12.5", "15.2").status.success());

    let entries = sandbox.list_json();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["date"], "2024-02-01");
    assert_eq!(entries[1]["date"], "2024-01-01");
    assert_eq!(entries[0]["bodyWeight"], 82.0);

    let stored = read_store(&sandbox.store_path());
    assert_eq!(stored.len(), 2);
    assert!(stored[0].get("skeletalMuscleMass").is_some());
    assert!(stored[0].get("createdAt").is_some());
}

#[test]
fn test_add_same_date_replaces_entry() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2024-01-01", "80", "40", "12", "15").status.success());
    let first_id = sandbox.list_json()[0]["id"].as_str().unwrap().to_string();

    assert!(sandbox.add("2024-01-01", "79", "40", "11", "14").status.success());

    let entries = sandbox.list_json();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], first_id.as_str());
    assert_eq!(entries[0]["bodyWeight"], 79.0);
}

#[test]
fn test_add_quiet_prints_id() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[
        "--quiet",
        "add",
        "--no-input",
        "--date",
        "2024-01-01",
        "--weight",
        "80",
        "--muscle",
        "40",
        "--fat-mass",
        "12",
        "--fat-percent",
        "15",
    ]);
    assert!(output.status.success());
    let id = stdout(&output).trim().to_string();
    assert_eq!(sandbox.list_json()[0]["id"], id.as_str());
}

#[test]
fn test_add_missing_value_without_input_fails() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["add", "--no-input", "--date", "2024-01-01", "--weight", "80"]);
    assert_exit(&output, 4);
    assert!(stderr(&output).contains("All fields are required"));
    assert!(!sandbox.store_path().exists());
}

#[test]
fn test_add_rejects_non_positive_values() {
    let sandbox = Sandbox::new();
    let output = sandbox.add("2024-01-01", "80", "40", "0", "15");
    assert_exit(&output, 4);
    assert!(stderr(&output).contains("greater than 0"));
}

#[test]
fn test_add_rejects_non_canonical_date() {
    let sandbox = Sandbox::new();
    let output = sandbox.add("2024-1-5", "80", "40", "12", "15");
    assert_exit(&output, 4);
}

#[test]
fn test_edit_updates_values_and_keeps_identity() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2024-01-01", "80", "40", "12", "15").status.success());
    let before = sandbox.list_json()[0].clone();
    let id = before["id"].as_str().unwrap();

    let output = sandbox.run(&["edit", id, "--weight", "78.5", "--date", "2024-01-03"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let after = sandbox.list_json()[0].clone();
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["createdAt"], before["createdAt"]);
    assert_eq!(after["date"], "2024-01-03");
    assert_eq!(after["bodyWeight"], 78.5);
    assert_eq!(after["skeletalMuscleMass"], 40.0);
}

#[test]
fn test_edit_date_conflict_leaves_store_unchanged() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2024-01-01", "80", "40", "12", "15").status.success());
    assert!(sandbox.add("2024-02-01", "81", "40", "12", "15").status.success());
    let older = sandbox.list_json()[1]["id"].as_str().unwrap().to_string();
    let bytes_before = std::fs::read(sandbox.store_path()).unwrap();

    let output = sandbox.run(&["edit", &older, "--date", "2024-02-01"]);
    assert_exit(&output, 4);
    assert!(stderr(&output).contains("2024-02-01"));
    assert_eq!(std::fs::read(sandbox.store_path()).unwrap(), bytes_before);
}

#[test]
fn test_edit_unknown_id_is_not_found() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2024-01-01", "80", "40", "12", "15").status.success());
    let output = sandbox.run(&["edit", "nope", "--weight", "70"]);
    assert_exit(&output, 3);
}

#[test]
fn test_delete_requires_confirmation_without_tty() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2024-01-01", "80", "40", "12", "15").status.success());
    let id = sandbox.list_json()[0]["id"].as_str().unwrap().to_string();

    let output = sandbox.run(&["delete", &id]);
    assert_exit(&output, 4);
    assert!(stderr(&output).contains("--yes"));
    assert_eq!(sandbox.list_json().len(), 1);

    let output = sandbox.run(&["delete", &id, "--yes"]);
    assert!(output.status.success());
    assert!(sandbox.list_json().is_empty());
}

#[test]
fn test_delete_unknown_id_is_not_found() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2024-01-01", "80", "40", "12", "15").status.success());
    let output = sandbox.run(&["delete", "missing", "--yes"]);
    assert_exit(&output, 3);
    assert_eq!(sandbox.list_json().len(), 1);
}

#[test]
fn test_summary_json_reports_deltas() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2024-01-01", "80", "40", "12", "15").status.success());
    assert!(sandbox.add("2024-02-01", "82", "41", "11.5", "14.6").status.success());

    let output = sandbox.run(&["summary", "--json"]);
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["latest_date"], "2024-02-01");
    assert_eq!(summary["previous_date"], "2024-01-01");

    let cards = summary["cards"].as_array().unwrap();
    assert_eq!(cards[0]["delta_label"], "+2.0KG VS LAST");
    assert_eq!(cards[0]["verdict"], "good");
    assert_eq!(cards[2]["delta"], -0.5);
    assert_eq!(cards[2]["verdict"], "good");
}

#[test]
fn test_summary_on_missing_store_is_empty() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["summary", "--json"]);
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(summary["latest_date"].is_null());
}

#[test]
fn test_history_json_range_filter() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2000-01-01", "80", "40", "12", "15").status.success());

    let output = sandbox.run(&["history", "--range", "3m", "--json"]);
    assert!(output.status.success());
    let history: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(history["range"], "3m");
    assert!(history["points"].as_array().unwrap().is_empty());

    let output = sandbox.run(&["history", "--range", "all", "--json"]);
    let history: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(history["points"][0]["other"], 28.0);
}

#[test]
fn test_invalid_range_is_rejected() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["list", "--range", "2w"]);
    assert_exit(&output, 4);
}

#[test]
fn test_seed_and_clear() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2024-01-01", "80", "40", "12", "15").status.success());

    let output = sandbox.run(&["seed", "--yes"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let entries = sandbox.list_json();
    assert_eq!(entries.len(), 17);
    assert!(entries.iter().all(|e| e["id"].as_str().unwrap().starts_with("seed-")));

    let output = sandbox.run(&["clear", "--yes"]);
    assert!(output.status.success());
    assert!(!sandbox.store_path().exists());
    assert!(sandbox.list_json().is_empty());
}

#[test]
fn test_export_csv_to_stdout() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2024-02-01", "82", "41", "12.5", "15.2").status.success());
    assert!(sandbox.add("2024-01-01", "80", "40", "12", "15").status.success());

    let output = sandbox.run(&["export"]);
    assert!(output.status.success());
    let csv = stdout(&output);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Date,Weight (kg),Muscle Mass (kg),Body Fat Mass (kg),Body Fat (%)"
    );
    assert_eq!(lines[1], "2024-01-01,80,40,12,15");
    assert_eq!(lines[2], "2024-02-01,82,41,12.5,15.2");
}

#[test]
fn test_export_to_directory_uses_default_name() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2024-01-01", "80", "40", "12", "15").status.success());
    let out_dir = sandbox.dir.path().join("out");
    std::fs::create_dir_all(&out_dir).unwrap();

    let output = sandbox.run(&["export", "--format", "json", "--output", out_dir.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));

    let files: Vec<_> = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("body-comp-export-"));
    assert!(files[0].ends_with(".json"));
}

#[test]
fn test_export_empty_store_writes_nothing() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["export"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Nothing to export"));
}

#[test]
fn test_corrupt_store_reads_empty_but_fails_check() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.store_path(), b"{not json").unwrap();

    assert!(sandbox.list_json().is_empty());

    let output = sandbox.run(&["check"]);
    assert_exit(&output, 6);
    // Nothing rewrote the corrupt file.
    assert_eq!(std::fs::read(sandbox.store_path()).unwrap(), b"{not json");
}

#[test]
fn test_check_reports_duplicate_dates() {
    let sandbox = Sandbox::new();
    let contents = r#"[
  {"id":"a","date":"2024-01-01","bodyWeight":80,"skeletalMuscleMass":40,"bodyFatMass":12,"bodyFatPercentage":15,"createdAt":"2024-01-01T00:00:00Z"},
  {"id":"b","date":"2024-01-01","bodyWeight":81,"skeletalMuscleMass":40,"bodyFatMass":12,"bodyFatPercentage":15,"createdAt":"2024-01-01T00:00:00Z"}
]"#;
    std::fs::write(sandbox.store_path(), contents).unwrap();

    let output = sandbox.run(&["check"]);
    assert_exit(&output, 6);
    assert!(stderr(&output).contains("duplicate date 2024-01-01"));
}

#[test]
fn test_check_clean_store() {
    let sandbox = Sandbox::new();
    assert!(sandbox.run(&["seed", "--yes"]).status.success());
    let output = sandbox.run(&["check"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Integrity check: OK (17 entries)"));
}

#[test]
fn test_missing_config_is_not_found() {
    let sandbox = Sandbox::new();
    let output = sandbox.run_bare(&["list"]);
    assert_exit(&output, 3);
    assert!(stderr(&output).contains("bodycomp init"));
}

#[test]
fn test_init_seed_then_use_config() {
    let sandbox = Sandbox::new();
    let store = sandbox.store_path();
    let output = sandbox.run_bare(&[
        "init",
        store.to_str().unwrap(),
        "--seed",
        "--timezone",
        "Europe/London",
        "--default-range",
        "all",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let config = std::fs::read_to_string(sandbox.config_home().join("bodycomp").join("config.toml"))
        .expect("config written");
    assert!(config.contains("Europe/London"));

    let output = sandbox.run_bare(&["list", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let entries: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries.len(), 17);

    let output = sandbox.run_bare(&["init", store.to_str().unwrap()]);
    assert_exit(&output, 4);
}

#[test]
fn test_init_seed_never_overwrites_existing_data() {
    let sandbox = Sandbox::new();
    assert!(sandbox.add("2024-01-01", "80", "40", "12", "15").status.success());

    let store = sandbox.store_path();
    let output = sandbox.run_bare(&["init", store.to_str().unwrap(), "--seed"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(read_store(&store).len(), 1);
}

#[test]
fn test_init_rejects_unknown_timezone() {
    let sandbox = Sandbox::new();
    let store = sandbox.store_path();
    let output = sandbox.run_bare(&["init", store.to_str().unwrap(), "--timezone", "Mars/Base"]);
    assert_exit(&output, 4);
    assert!(!sandbox.config_home().join("bodycomp").join("config.toml").exists());
}
