//! 一括処理パイプラインの統合テスト
//!
//! 正規化・書き込み・インデックス生成・失敗時の継続を検証

use std::path::Path;
use tempfile::tempdir;
use workout_db_common::{slugify, CatalogRecord, NormalizedRecord};
use workout_db_rust::pipeline::{self, PipelineOptions};
use workout_db_rust::verify;

const IMAGES_BASE: &str = "https://example.com/exercises";

fn create_test_record(name: &str) -> CatalogRecord {
    CatalogRecord {
        id: Some(name.replace(' ', "_")),
        name: Some(name.to_string()),
        level: Some("intermediate".to_string()),
        primary_muscles: Some(vec!["chest".to_string()]),
        instructions: Some(vec!["Lift.".to_string(), "Lower.".to_string()]),
        category: Some("strength".to_string()),
        images: Some(vec![format!("{}/0.jpg", name.replace(' ', "_"))]),
        ..Default::default()
    }
}

fn test_catalog() -> Vec<CatalogRecord> {
    [
        "Barbell Bench Press",
        "Dumbbell Flyes",
        "EZ-Bar Curl",
        "Lat Pulldown",
        "Seated Cable Rows",
    ]
    .iter()
    .map(|n| create_test_record(n))
    .collect()
}

fn options(output_dir: &Path, jobs: usize) -> PipelineOptions {
    PipelineOptions {
        output_dir: output_dir.to_path_buf(),
        images_base_url: IMAGES_BASE.to_string(),
        jobs,
        index_path: None,
        show_progress: false,
    }
}

#[test]
fn test_run_writes_every_record() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_dir = dir.path().join("content").join("exercises");
    let catalog = test_catalog();

    let report = pipeline::run(&catalog, &options(&output_dir, 2)).expect("パイプライン失敗");

    assert_eq!(report.successes.len(), 5);
    assert!(report.failures.is_empty());
    assert_eq!(report.total(), 5);

    let slugs: Vec<&str> = report.successes.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec![
            "barbell-bench-press",
            "dumbbell-flyes",
            "ez-bar-curl",
            "lat-pulldown",
            "seated-cable-rows",
        ]
    );

    for entry in &report.successes {
        assert!(pipeline::record_path(&output_dir, &entry.slug).is_file());
    }
}

#[test]
fn test_written_record_content() {
    let dir = tempdir().expect("Failed to create temp dir");
    let catalog = vec![CatalogRecord {
        id: Some("Plank".to_string()),
        name: Some("Plank".to_string()),
        images: Some(vec!["Plank/0.jpg".to_string()]),
        ..Default::default()
    }];

    pipeline::run(&catalog, &options(dir.path(), 1)).expect("パイプライン失敗");

    let content = std::fs::read_to_string(dir.path().join("plank.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["level"], "beginner");
    assert_eq!(value["category"], "strength");
    assert!(value["force"].is_null());
    assert_eq!(value["primaryMuscles"], serde_json::json!([]));
    assert_eq!(value["images"][0], "https://example.com/exercises/Plank/0.jpg");
    // 2スペースインデント
    assert!(content.starts_with("{\n  \"id\": \"Plank\""));
}

#[test]
fn test_one_failed_write_does_not_abort_batch() {
    let dir = tempdir().expect("Failed to create temp dir");
    let catalog = test_catalog();
    let failing = &catalog[2];
    let failing_slug = slugify(failing.name());

    // 出力先と同名のディレクトリを置いて書き込みを失敗させる
    std::fs::create_dir_all(pipeline::record_path(dir.path(), &failing_slug)).unwrap();

    let index_path = dir.path().join("data").join("exercises-index.json");
    let options = PipelineOptions {
        index_path: Some(index_path.clone()),
        ..options(dir.path(), 4)
    };
    let report = pipeline::run(&catalog, &options).expect("パイプライン失敗");

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.successes.len(), catalog.len() - 1);
    assert_eq!(report.failures[0].name, "EZ-Bar Curl");
    assert!(!report.failures[0].reason.is_empty());

    let index = pipeline::read_index(&index_path).expect("インデックス読み込み失敗");
    assert_eq!(index.len(), catalog.len() - 1);
    assert!(index.iter().all(|e| e.slug != failing_slug));
    assert_eq!(index[2].name, "Lat Pulldown");
}

#[test]
fn test_order_independent_of_jobs() {
    let catalog: Vec<CatalogRecord> = (0..40)
        .map(|i| create_test_record(&format!("Exercise {}", i)))
        .collect();

    let sequential_dir = tempdir().unwrap();
    let parallel_dir = tempdir().unwrap();
    let sequential = pipeline::run(&catalog, &options(sequential_dir.path(), 1)).unwrap();
    let parallel = pipeline::run(&catalog, &options(parallel_dir.path(), 8)).unwrap();

    assert_eq!(sequential.successes, parallel.successes);
    assert_eq!(parallel.successes[39].slug, "exercise-39");
}

#[test]
fn test_slug_collision_reported_as_failure() {
    let dir = tempdir().unwrap();
    let catalog = vec![
        create_test_record("Push Up"),
        create_test_record("Plank"),
        create_test_record("Push-up"),
    ];

    let report = pipeline::run(&catalog, &options(dir.path(), 2)).unwrap();

    assert_eq!(report.successes.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].name, "Push-up");
    assert!(report.failures[0].reason.contains("push-up"));

    // 先行レコードの内容が残っている
    let content = std::fs::read_to_string(dir.path().join("push-up.json")).unwrap();
    let record: NormalizedRecord = serde_json::from_str(&content).unwrap();
    assert_eq!(record.id, "Push_Up");
}

#[test]
fn test_invalid_record_reported_as_failure() {
    let dir = tempdir().unwrap();
    let catalog = vec![
        CatalogRecord {
            id: Some("nameless".to_string()),
            ..Default::default()
        },
        create_test_record("Plank"),
    ];

    let report = pipeline::run(&catalog, &options(dir.path(), 1)).unwrap();

    assert_eq!(report.successes.len(), 1);
    assert_eq!(report.failures[0].name, "nameless");
}

#[test]
fn test_round_trip_slug_matches_file_name() {
    let dir = tempdir().unwrap();
    let catalog = test_catalog();
    let report = pipeline::run(&catalog, &options(dir.path(), 3)).unwrap();

    for entry in &report.successes {
        let path = pipeline::record_path(dir.path(), &entry.slug);
        let content = std::fs::read_to_string(&path).unwrap();
        let record: NormalizedRecord = serde_json::from_str(&content).unwrap();
        assert_eq!(record.slug(), entry.slug);
        assert_eq!(slugify(&record.name), entry.slug);
    }

    let verified = verify::verify_output_dir(dir.path()).unwrap();
    assert_eq!(verified.checked, catalog.len());
    assert!(verified.is_ok(), "{:?}", verified.issues);
    assert!(verify::check_index(dir.path(), &report.successes).is_empty());
}

#[test]
fn test_check_index_reports_missing_file() {
    let dir = tempdir().unwrap();
    let catalog = test_catalog();
    let report = pipeline::run(&catalog, &options(dir.path(), 1)).unwrap();

    std::fs::remove_file(pipeline::record_path(dir.path(), "lat-pulldown")).unwrap();

    let issues = verify::check_index(dir.path(), &report.successes);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].problem.contains("Lat Pulldown"));
}

#[test]
fn test_empty_catalog() {
    let dir = tempdir().unwrap();
    let output_dir = dir.path().join("out");
    let report = pipeline::run(&[], &options(&output_dir, 0)).unwrap();

    assert_eq!(report.total(), 0);
    assert!(output_dir.is_dir());
}

#[test]
fn test_run_writes_index_in_catalog_order() {
    let dir = tempdir().unwrap();
    let index_path = dir.path().join("data").join("exercises-index.json");
    let catalog = test_catalog();
    let options = PipelineOptions {
        index_path: Some(index_path.clone()),
        ..options(&dir.path().join("exercises"), 3)
    };

    let report = pipeline::run(&catalog, &options).unwrap();

    let index = pipeline::read_index(&index_path).expect("インデックスが書かれていない");
    assert_eq!(index, report.successes);
    let names: Vec<&str> = index.iter().map(|e| e.name.as_str()).collect();
    let expected: Vec<&str> = catalog.iter().map(|r| r.name()).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_run_without_index_path_writes_no_index() {
    let dir = tempdir().unwrap();
    let output_dir = dir.path().join("exercises");
    pipeline::run(&test_catalog(), &options(&output_dir, 1)).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
