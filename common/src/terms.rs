//! 検索語リスト
//!
//! ワークアウトプランに登場する種目名（自由記述）。
//! `--test` 指定時は少数のスモークテスト用リストを使う。

use crate::error::{Error, Result};

/// 本番用: ワークアウトプラン全体の検索語
pub const ALL_TERMS: &[&str] = &[
    // Hybrid Monday
    "dumbbell sumo squat",
    "dumbbell bench press",
    "face pull",
    "dumbbell lateral raise",
    "dumbbell pullover",
    // Hybrid Thursday
    "incline dumbbell press",
    "chest supported row",
    "seated dumbbell press",
    "lat pulldown",
    "tricep pushdown",
    "hammer curl",
    "dumbbell shrug",
    // Hybrid Friday
    "leg press",
    "seated leg curl",
    "goblet squat",
    "seated calf raise",
    "leg extension",
    "romanian deadlift",
    // Machine Monday
    "chest press machine",
    "seated cable row",
    "machine shoulder press",
    "ab crunch machine",
    // Machine Thursday
    "incline chest press machine",
    "pec deck",
    "reverse fly",
    "machine bicep curl",
    // Machine Friday
    "standing calf raise",
    "lying leg curl",
    "glute kickback",
    // Option A: free weight
    "ez-bar curl",
    "skull crusher",
    "concentration curl",
    "tricep kickback",
    // Option B: machine
    "preacher curl",
    "cable pushdown",
    "cable curl",
    "tricep extension",
    "lateral raise",
    // Core
    "dead bug",
    "heel touch",
    "bird dog",
];

/// スモークテスト用
pub const TEST_TERMS: &[&str] = &["bench press", "squat", "deadlift"];

/// モードに応じた検索語リストを返す
pub fn terms_for(test_mode: bool) -> &'static [&'static str] {
    if test_mode {
        TEST_TERMS
    } else {
        ALL_TERMS
    }
}

/// JSON文字列（文字列の配列）から検索語リストを読み込む
///
/// 前後の空白を除去し、空の要素は捨てる。
pub fn parse_terms(json: &str) -> Result<Vec<String>> {
    let raw: Vec<String> = serde_json::from_str(json)?;
    let terms: Vec<String> = raw
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        return Err(Error::Config("検索語リストが空です".to_string()));
    }
    Ok(terms)
}

/// ファイルから検索語リストを読み込む
pub fn load_terms(path: &std::path::Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    parse_terms(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_for_mode() {
        assert_eq!(terms_for(true), TEST_TERMS);
        assert_eq!(terms_for(false).len(), 41);
    }

    #[test]
    fn test_all_terms_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for term in ALL_TERMS {
            assert_eq!(*term, term.to_lowercase());
            assert!(seen.insert(*term), "重複: {}", term);
        }
    }

    #[test]
    fn test_parse_terms() {
        let terms = parse_terms(r#"[" face pull ", "", "pec deck"]"#).unwrap();
        assert_eq!(terms, vec!["face pull".to_string(), "pec deck".to_string()]);
    }

    #[test]
    fn test_parse_terms_empty() {
        let err = parse_terms("[]").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_parse_terms_invalid_json() {
        let err = parse_terms("{\"terms\": 1}").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
