//! 出力ディレクトリの検証
//!
//! 保存済みの各レコードを読み直し、以下を確認する:
//! - コンテンツ側スキーマの必須フィールドがあること
//! - `slugify(name)` がファイル名と一致すること
//! - インデックスの各項目に対応するファイルがあること

use crate::error::{WorkoutDbError, Result};
use crate::pipeline::writer::{record_path, RECORD_EXTENSION};
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use workout_db_common::{missing_required_fields, slugify, IndexEntry};

/// 検証で見つかった問題
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyIssue {
    pub file: PathBuf,
    pub problem: String,
}

#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    /// 検査したファイル数
    pub checked: usize,
    pub issues: Vec<VerifyIssue>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

pub fn verify_output_dir(output_dir: &Path) -> Result<VerifyReport> {
    if !output_dir.is_dir() {
        return Err(WorkoutDbError::FolderNotFound(output_dir.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(output_dir)
        .max_depth(1)  // 直下のみ
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().map(|e| e == RECORD_EXTENSION).unwrap_or(false))
        .collect();
    files.sort();

    let mut report = VerifyReport::default();
    for path in files {
        report.checked += 1;
        if let Some(problem) = check_record_file(&path) {
            report.issues.push(VerifyIssue { file: path, problem });
        }
    }

    Ok(report)
}

/// インデックス項目のうち、ファイルが存在しないものを返す
pub fn check_index(output_dir: &Path, entries: &[IndexEntry]) -> Vec<VerifyIssue> {
    entries
        .iter()
        .filter_map(|entry| {
            let path = record_path(output_dir, &entry.slug);
            if path.is_file() {
                None
            } else {
                Some(VerifyIssue {
                    file: path,
                    problem: format!("インデックスの「{}」に対応するファイルがありません", entry.name),
                })
            }
        })
        .collect()
}

fn check_record_file(path: &Path) -> Option<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return Some(format!("読み込み失敗: {}", e)),
    };

    let value: Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => return Some(format!("JSONパース失敗: {}", e)),
    };

    let missing = missing_required_fields(&value);
    if !missing.is_empty() {
        return Some(format!("必須フィールドがありません: {}", missing.join(", ")));
    }

    let name = value["name"].as_str().unwrap_or_default();
    let expected = slugify(name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    if stem != expected {
        return Some(format!("スラッグ不一致: ファイル名 {} / 名前から {}", stem, expected));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_check_record_file_slug_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plank.json");
        std::fs::write(
            &path,
            r#"{"id":"x","name":"Side Plank","category":"strength","images":[],"instructions":[]}"#,
        )
        .unwrap();

        let problem = check_record_file(&path).unwrap();
        assert!(problem.contains("side-plank"));
    }

    #[test]
    fn test_check_record_file_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plank.json");
        std::fs::write(&path, r#"{"id":"x","name":"Plank"}"#).unwrap();

        let problem = check_record_file(&path).unwrap();
        assert!(problem.contains("category"));
        assert!(problem.contains("images"));
    }

    #[test]
    fn test_verify_missing_dir() {
        let err = verify_output_dir(Path::new("/nonexistent/workout-db/12345")).unwrap_err();
        assert!(matches!(err, WorkoutDbError::FolderNotFound(_)));
    }
}
