//! 一覧表CSV
//!
//! 全フィールドをダブルクォートで囲み、内部の `"` は `""` にする。
//! 欠落値は空文字。行区切りは `\n`（末尾改行なし）。

use workout_db_common::CatalogRecord;

pub const HEADERS: &[&str] = &["Name", "Category", "Equipment", "Primary Muscle", "Level", "Mechanic"];

/// CSV全体を文字列で生成
pub fn render(records: &[CatalogRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADERS.join(","));
    lines.extend(records.iter().map(row));
    lines.join("\n")
}

/// 1レコード分の行
pub fn row(record: &CatalogRecord) -> String {
    let primary_muscle = record
        .primary_muscles
        .as_ref()
        .and_then(|m| m.first())
        .map(String::as_str);

    [
        record.name.as_deref(),
        record.category.as_deref(),
        record.equipment.as_deref(),
        primary_muscle,
        record.level.as_deref(),
        record.mechanic.as_deref(),
    ]
    .iter()
    .map(|field| quote(field.unwrap_or("")))
    .collect::<Vec<_>>()
    .join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
