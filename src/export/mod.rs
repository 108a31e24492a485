pub mod csv;

use crate::error::Result;
use std::path::Path;
use workout_db_common::CatalogRecord;

/// カタログ全体をCSVに書き出す
pub fn export_csv(records: &[CatalogRecord], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    println!("- CSVを生成中... ({}件)", records.len());
    std::fs::write(output_path, csv::render(records))?;
    println!("✔ CSV出力: {}", output_path.display());

    Ok(())
}
