//! 種目名照合モジュール
//!
//! 自由記述の検索語をカタログの1レコードに照合する。
//! 以下の段階を優先順に評価し、最初に一致した段階の結果を返す:
//! 1. 完全一致
//! 2. 候補名が検索語を含む
//! 3. 検索語が候補名を含む
//! 4. 検索語の単語（3文字以上）をすべて含む
//! 5. 単語の過半数（切り上げ）を含む
//!
//! 各段階内ではカタログ順で最初の候補が勝つ。大文字小文字は区別しない。

use crate::types::CatalogRecord;
use serde::Serialize;
use std::collections::HashMap;

/// 一致した段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchTier {
    Exact,
    Contains,
    Reverse,
    AllWords,
    Partial,
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchTier::Exact => write!(f, "完全一致"),
            MatchTier::Contains => write!(f, "部分一致"),
            MatchTier::Reverse => write!(f, "逆部分一致"),
            MatchTier::AllWords => write!(f, "全単語一致"),
            MatchTier::Partial => write!(f, "過半数単語一致"),
        }
    }
}

/// 照合結果（1件に確定するか、該当なし）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchOutcome<'a> {
    Matched {
        record: &'a CatalogRecord,
        tier: MatchTier,
    },
    NoMatch,
}

impl<'a> MatchOutcome<'a> {
    pub fn record(&self) -> Option<&'a CatalogRecord> {
        match self {
            MatchOutcome::Matched { record, .. } => Some(record),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn tier(&self) -> Option<MatchTier> {
        match self {
            MatchOutcome::Matched { tier, .. } => Some(*tier),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }
}

/// 小文字化した種目名の索引
///
/// カタログを一度だけ走査して作り、複数の検索語で使い回す。
/// 元の並び順を保持するので、段階内の優先順位はカタログ順のまま。
pub struct NameIndex<'a> {
    records: &'a [CatalogRecord],
    lowered: Vec<String>,
    exact: HashMap<String, usize>,
}

impl<'a> NameIndex<'a> {
    pub fn new(records: &'a [CatalogRecord]) -> Self {
        let lowered: Vec<String> = records.iter().map(|r| r.name().to_lowercase()).collect();

        let mut exact = HashMap::with_capacity(lowered.len());
        for (i, name) in lowered.iter().enumerate() {
            exact.entry(name.clone()).or_insert(i);
        }

        Self { records, lowered, exact }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 検索語に最も合う1件を返す
    ///
    /// 3文字以上の単語を含まない検索語では段階4が常に成立し、先頭の候補が返る。
    pub fn find(&self, term: &str) -> MatchOutcome<'a> {
        let search = term.to_lowercase();

        // 1. 完全一致
        if let Some(&i) = self.exact.get(&search) {
            return self.matched(i, MatchTier::Exact);
        }

        // 2. 候補名が検索語を含む
        if let Some(i) = self.position(|name| name.contains(search.as_str())) {
            return self.matched(i, MatchTier::Contains);
        }

        // 3. 検索語が候補名を含む
        if let Some(i) = self.position(|name| search.contains(name)) {
            return self.matched(i, MatchTier::Reverse);
        }

        let words = significant_words(&search);

        // 4. 全単語を含む
        if let Some(i) = self.position(|name| words.iter().all(|w| name.contains(w))) {
            return self.matched(i, MatchTier::AllWords);
        }

        // 5. 過半数の単語を含む
        let required = words.len().div_ceil(2);
        if let Some(i) = self.position(|name| {
            words.iter().filter(|w| name.contains(*w)).count() >= required
        }) {
            return self.matched(i, MatchTier::Partial);
        }

        MatchOutcome::NoMatch
    }

    fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(&str) -> bool,
    {
        self.lowered.iter().position(|name| predicate(name.as_str()))
    }

    fn matched(&self, index: usize, tier: MatchTier) -> MatchOutcome<'a> {
        MatchOutcome::Matched {
            record: &self.records[index],
            tier,
        }
    }
}

/// 検索語を空白で分割し、2文字以下の単語を除く
pub fn significant_words(search: &str) -> Vec<&str> {
    search
        .split(' ')
        .filter(|w| w.chars().count() > 2)
        .collect()
}

/// カタログから検索語に最も合う1件を探す
///
/// 複数の検索語を照合する場合は `NameIndex` を作って使い回すこと。
pub fn find_best_match<'a>(catalog: &'a [CatalogRecord], term: &str) -> MatchOutcome<'a> {
    NameIndex::new(catalog).find(term)
}
