//! カタログ取得モジュール
//!
//! 外部エクササイズDB（JSON配列）を1回だけ取得する。リトライはしない。
//! 取得・パースの失敗は実行全体を中断する。

use crate::error::{WorkoutDbError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use workout_db_common::CatalogRecord;

/// カタログの取得元
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// HTTPSで取得
    Remote { url: String, timeout: Duration },
    /// ローカルのJSONファイル
    File(PathBuf),
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Remote { url, .. } => url.clone(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }

    pub async fn load(&self) -> Result<Vec<CatalogRecord>> {
        match self {
            CatalogSource::Remote { url, timeout } => fetch_catalog(url, *timeout).await,
            CatalogSource::File(path) => load_catalog_file(path),
        }
    }
}

/// リモートからカタログ全体を取得する
pub async fn fetch_catalog(url: &str, timeout: Duration) -> Result<Vec<CatalogRecord>> {
    let retrieval_error = |e: reqwest::Error| WorkoutDbError::Retrieval {
        url: url.to_string(),
        detail: e.to_string(),
    };

    let client = reqwest::Client::builder()
        .user_agent(concat!("workout-db-rust/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(retrieval_error)?;

    tracing::info!("カタログ取得: {}", url);
    let response = client.get(url).send().await.map_err(retrieval_error)?;

    if !response.status().is_success() {
        return Err(WorkoutDbError::RetrievalStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let body = response.text().await.map_err(retrieval_error)?;
    tracing::debug!("レスポンス長: {} bytes", body.len());

    parse_catalog(&body)
}

/// ローカルファイルからカタログを読み込む
pub fn load_catalog_file(path: &Path) -> Result<Vec<CatalogRecord>> {
    if !path.exists() {
        return Err(WorkoutDbError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// JSON配列をカタログとしてパースする
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogRecord>> {
    serde_json::from_str(json).map_err(|e| WorkoutDbError::CatalogParse(e.to_string()))
}
