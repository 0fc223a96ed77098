#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DEFAULT_DATA_PATH: &str = "app/src/main/assets/data/hafs_smart_v8.json";

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub data: PathBuf,
}

impl TestEnv {
    /// Three-ayah dataset with two ayahs on page 2.
    pub fn new() -> Self {
        Self::with_dataset(serde_json::json!([
            {"id": 1, "sura_no": 1, "aya_no": 1, "page": 1},
            {"id": 2, "sura_no": 1, "aya_no": 2, "page": 2},
            {"id": 3, "sura_no": 1, "aya_no": 3, "page": 2}
        ]))
    }

    pub fn with_dataset(dataset: Value) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let data = write_dataset(&root, &dataset);
        Self {
            _tmp: tmp,
            root,
            data,
        }
    }

    /// Runs inside the fixture root so the default dataset path resolves.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("hafs-pages");
        cmd.current_dir(&self.root)
            .env_remove("HAFS_PAGES_DATA")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

fn write_dataset(root: &Path, dataset: &Value) -> PathBuf {
    let path = root.join(DEFAULT_DATA_PATH);
    fs::create_dir_all(path.parent().expect("dataset parent")).expect("create asset dir");
    fs::write(
        &path,
        serde_json::to_string_pretty(dataset).expect("serialize dataset"),
    )
    .expect("write dataset");
    path
}

/// Full-shape records spanning two surahs and two juz.
pub fn rich_dataset() -> Value {
    serde_json::json!([
        {"id": 1, "jozz": 1, "sura_no": 1, "sura_name_en": "Al-Fātiḥah", "sura_name_ar": "الفَاتِحة",
         "page": 1, "line_start": 2, "line_end": 2, "aya_no": 1, "aya_text": "a", "aya_text_emlaey": "a"},
        {"id": 2, "jozz": 1, "sura_no": 1, "sura_name_en": "Al-Fātiḥah", "sura_name_ar": "الفَاتِحة",
         "page": 1, "line_start": 3, "line_end": 3, "aya_no": 2, "aya_text": "b", "aya_text_emlaey": "b"},
        {"id": 8, "jozz": 1, "sura_no": 2, "sura_name_en": "Al-Baqarah", "sura_name_ar": "البَقَرَة",
         "page": 2, "line_start": 3, "line_end": 3, "aya_no": 1, "aya_text": "c", "aya_text_emlaey": "c"},
        {"id": 9, "jozz": 1, "sura_no": 2, "sura_name_en": "Al-Baqarah", "sura_name_ar": "البَقَرَة",
         "page": 2, "line_start": 3, "line_end": 5, "aya_no": 2, "aya_text": "d", "aya_text_emlaey": "d"},
        {"id": 148, "jozz": 2, "sura_no": 2, "sura_name_en": "Al-Baqarah", "sura_name_ar": "البَقَرَة",
         "page": 22, "line_start": 1, "line_end": 2, "aya_no": 142, "aya_text": "e", "aya_text_emlaey": "e"}
    ])
}
