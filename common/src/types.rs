//! 種目データの型定義
//!
//! - CatalogRecord: 外部エクササイズDBの生レコード（読み取り専用）
//! - NormalizedRecord: 保存用に正規化したレコード（1レコード1ファイル）
//! - IndexEntry: 名前→スラッグのインデックス項目

use crate::slug::slugify;
use serde::{Deserialize, Serialize};

/// 外部カタログの生レコード
///
/// 任意項目は null・欠落のどちらもあり得るため、すべて `Option` で受ける。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub force: Option<String>,
    pub level: Option<String>,
    pub mechanic: Option<String>,
    pub equipment: Option<String>,
    pub primary_muscles: Option<Vec<String>>,
    pub secondary_muscles: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
}

impl CatalogRecord {
    /// 種目名（欠落時は空文字）
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}

/// 正規化済みレコード
///
/// フィールド順はそのまま出力JSONのキー順になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub id: String,
    pub name: String,
    pub force: Option<String>,
    #[serde(default = "default_level")]
    pub level: String,
    pub mechanic: Option<String>,
    pub equipment: Option<String>,
    #[serde(default)]
    pub primary_muscles: Vec<String>,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    pub instructions: Vec<String>,
    pub category: String,
    pub images: Vec<String>,
}

fn default_level() -> String {
    crate::record::DEFAULT_LEVEL.to_string()
}

impl NormalizedRecord {
    /// 名前から導出したスラッグ（出力ファイル名のキー）
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// インデックス項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    pub slug: String,
}
