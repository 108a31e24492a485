//! レコード正規化モジュール
//!
//! 生レコードの欠落項目を既定値で埋め、画像参照を完全なURLに書き換える。
//! 空文字は欠落と同じ扱い。

use crate::types::{CatalogRecord, NormalizedRecord};
use serde_json::Value;

/// `level` 欠落時の既定値
pub const DEFAULT_LEVEL: &str = "beginner";

/// `category` 欠落時の既定値
pub const DEFAULT_CATEGORY: &str = "strength";

/// 保存済みレコードに必須のフィールド（コンテンツ側スキーマ）
const REQUIRED_STRING_FIELDS: &[&str] = &["id", "name", "category"];
const REQUIRED_LIST_FIELDS: &[&str] = &["images", "instructions"];

/// 生レコードを正規化する
///
/// # Arguments
/// * `record` - カタログの生レコード
/// * `images_base_url` - 画像参照の前に付けるベースURL
pub fn normalize(record: &CatalogRecord, images_base_url: &str) -> NormalizedRecord {
    let base = images_base_url.trim_end_matches('/');

    let images = record
        .images
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|img| format!("{}/{}", base, img))
        .collect();

    NormalizedRecord {
        id: record.id().to_string(),
        name: record.name().to_string(),
        force: present(&record.force),
        level: present(&record.level).unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
        mechanic: present(&record.mechanic),
        equipment: present(&record.equipment),
        primary_muscles: record.primary_muscles.clone().unwrap_or_default(),
        secondary_muscles: record.secondary_muscles.clone().unwrap_or_default(),
        instructions: record.instructions.clone().unwrap_or_default(),
        category: present(&record.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        images,
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// 保存済みJSONに欠けている必須フィールド名を返す
///
/// 文字列フィールドは文字列、リストフィールドは文字列の配列であること。
pub fn missing_required_fields(value: &Value) -> Vec<&'static str> {
    let mut missing = Vec::new();

    for &field in REQUIRED_STRING_FIELDS {
        if !value.get(field).map(Value::is_string).unwrap_or(false) {
            missing.push(field);
        }
    }

    for &field in REQUIRED_LIST_FIELDS {
        let ok = value
            .get(field)
            .and_then(Value::as_array)
            .map(|items| items.iter().all(Value::is_string))
            .unwrap_or(false);
        if !ok {
            missing.push(field);
        }
    }

    missing
}
