//! 一括処理パイプライン
//!
//! カタログの各レコードを正規化し、スラッグをキーに1ファイルずつ保存する。
//!
//! ## 処理フロー
//! 1. スラッグの確定（カタログ順、重複は後勝ちにせず失敗扱い）
//! 2. 正規化・書き込み（rayonで並列、結果はカタログ順で回収）
//! 3. 成功・失敗の集計
//! 4. インデックスの書き込み（成功分のみ、カタログ順）
//!
//! 1レコードの失敗はそのレコードだけを失敗リストに積み、処理は継続する。

pub mod writer;

use crate::error::{WorkoutDbError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use workout_db_common::{normalize, slugify, CatalogRecord, IndexEntry};

pub use writer::{read_index, record_path, write_index, write_record};

/// パイプラインの実行オプション
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// レコードファイルの出力先（なければ作成）
    pub output_dir: PathBuf,
    /// 画像参照の前に付けるベースURL
    pub images_base_url: String,
    /// 並列数（0 = CPU数）
    pub jobs: usize,
    /// インデックスJSONの出力先（`None` なら書き込まない）
    pub index_path: Option<PathBuf>,
    /// 進捗バーを表示する
    pub show_progress: bool,
}

/// 失敗したレコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedRecord {
    pub name: String,
    pub reason: String,
}

/// 実行結果
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// 保存に成功したレコード（カタログ順）
    pub successes: Vec<IndexEntry>,
    /// 失敗したレコード（カタログ順）
    pub failures: Vec<FailedRecord>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.successes.len() + self.failures.len()
    }
}

/// カタログ全体を正規化して保存する
///
/// 出力ディレクトリの作成、スレッドプールの構築、インデックスの書き込みに
/// 失敗した場合のみエラーを返す。
/// レコード単位の失敗は `BatchReport::failures` に入る。
pub fn run(records: &[CatalogRecord], options: &PipelineOptions) -> Result<BatchReport> {
    std::fs::create_dir_all(&options.output_dir)?;

    let claims = claim_slugs(records);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs)
        .build()
        .map_err(|e| WorkoutDbError::Config(format!("スレッドプールの作成に失敗: {}", e)))?;

    let progress = progress_bar(records.len() as u64, options.show_progress);

    let outcomes: Vec<Result<IndexEntry>> = pool.install(|| {
        records
            .par_iter()
            .zip(claims.into_par_iter())
            .map(|(record, claim)| {
                let outcome = claim.and_then(|slug| process_record(record, slug, options));
                progress.inc(1);
                outcome
            })
            .collect()
    });

    progress.finish_and_clear();

    let mut report = BatchReport::default();
    for (record, outcome) in records.iter().zip(outcomes) {
        match outcome {
            Ok(entry) => report.successes.push(entry),
            Err(e) => {
                let name = display_name(record);
                tracing::warn!("{} の処理に失敗: {}", name, e);
                report.failures.push(FailedRecord {
                    name,
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "処理完了: 成功 {} / 失敗 {}",
        report.successes.len(),
        report.failures.len()
    );

    if let Some(index_path) = &options.index_path {
        write_index(index_path, &report.successes)?;
        tracing::info!("インデックス: {} ({}件)", index_path.display(), report.successes.len());
    }

    Ok(report)
}

/// 1レコードを正規化して書き込む
fn process_record(
    record: &CatalogRecord,
    slug: String,
    options: &PipelineOptions,
) -> Result<IndexEntry> {
    let normalized = normalize(record, &options.images_base_url);
    let path = write_record(&options.output_dir, &slug, &normalized)?;
    tracing::debug!("{} -> {}", normalized.name, path.display());

    Ok(IndexEntry {
        name: normalized.name,
        slug,
    })
}

/// カタログ順にスラッグを確定する
///
/// 名前かIDが空のレコード、スラッグが空になるレコード、
/// 先行レコードと同じスラッグになるレコードはエラーになる。
pub fn claim_slugs(records: &[CatalogRecord]) -> Vec<Result<String>> {
    let mut owners: HashMap<String, &str> = HashMap::new();

    records
        .iter()
        .map(|record| {
            if record.name().is_empty() {
                return Err(WorkoutDbError::InvalidRecord(format!(
                    "名前がありません (id: {})",
                    record.id()
                )));
            }
            if record.id().is_empty() {
                return Err(WorkoutDbError::InvalidRecord(format!(
                    "IDがありません ({})",
                    record.name()
                )));
            }

            let slug = slugify(record.name());
            if slug.is_empty() {
                return Err(WorkoutDbError::InvalidRecord(format!(
                    "スラッグが空になります ({})",
                    record.name()
                )));
            }

            if let Some(existing) = owners.get(&slug) {
                return Err(WorkoutDbError::SlugCollision {
                    slug,
                    existing: existing.to_string(),
                });
            }
            owners.insert(slug.clone(), record.name());
            Ok(slug)
        })
        .collect()
}

fn display_name(record: &CatalogRecord) -> String {
    if !record.name().is_empty() {
        record.name().to_string()
    } else if !record.id().is_empty() {
        record.id().to_string()
    } else {
        "(名前なし)".to_string()
    }
}

fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len);
    let style = ProgressStyle::with_template("  {bar:40} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}
