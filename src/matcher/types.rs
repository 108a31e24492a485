use serde::Serialize;
use workout_db_common::MatchTier;

/// 検索語ごとの照合結果
///
/// 該当なしの場合は `tier` 以下がすべて `None`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermMatch {
    pub term: String,
    pub tier: Option<MatchTier>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl TermMatch {
    pub fn is_match(&self) -> bool {
        self.tier.is_some()
    }
}

/// 照合レポート（JSON出力用）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub generated_at: String,
    pub total: usize,
    pub matched: usize,
    pub results: Vec<TermMatch>,
}
