//! レコード・インデックスのJSON書き込み

use crate::error::Result;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use workout_db_common::{IndexEntry, NormalizedRecord};

/// レコードファイルの拡張子
pub const RECORD_EXTENSION: &str = "json";

/// スラッグに対応する出力パス
pub fn record_path(output_dir: &Path, slug: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", slug, RECORD_EXTENSION))
}

/// 正規化済みレコードを `<slug>.json` に書き込む
pub fn write_record(output_dir: &Path, slug: &str, record: &NormalizedRecord) -> Result<PathBuf> {
    let path = record_path(output_dir, slug);
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(&path, json)?;
    Ok(path)
}

/// 名前→スラッグのインデックスを書き込む（親ディレクトリは作成）
pub fn write_index(path: &Path, entries: &[IndexEntry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn read_index(path: &Path) -> Result<Vec<IndexEntry>> {
    let file = File::open(path)?;
    let entries = serde_json::from_reader(BufReader::new(file))?;
    Ok(entries)
}
