mod types;

pub use types::{MatchReport, TermMatch};

use crate::error::Result;
use rayon::prelude::*;
use std::path::Path;
use workout_db_common::{slugify, CatalogRecord, MatchOutcome, NameIndex};

/// 検索語リストをカタログと照合する
///
/// 索引は一度だけ作り、検索語ごとの照合は並列に行う。結果は入力順。
pub fn match_terms<S>(catalog: &[CatalogRecord], terms: &[S]) -> Vec<TermMatch>
where
    S: AsRef<str> + Sync,
{
    let index = NameIndex::new(catalog);

    terms
        .par_iter()
        .map(|term| {
            let term = term.as_ref();
            let outcome = index.find(term);
            tracing::debug!("{} -> {:?}", term, outcome.record().map(|r| r.name()));
            to_term_match(term, &outcome)
        })
        .collect()
}

fn to_term_match(term: &str, outcome: &MatchOutcome<'_>) -> TermMatch {
    match outcome {
        MatchOutcome::Matched { record, tier } => TermMatch {
            term: term.to_string(),
            tier: Some(*tier),
            id: Some(record.id().to_string()),
            name: Some(record.name().to_string()),
            slug: Some(slugify(record.name())),
        },
        MatchOutcome::NoMatch => TermMatch {
            term: term.to_string(),
            tier: None,
            id: None,
            name: None,
            slug: None,
        },
    }
}

pub fn build_report(results: Vec<TermMatch>) -> MatchReport {
    MatchReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        total: results.len(),
        matched: results.iter().filter(|r| r.is_match()).count(),
        results,
    }
}

pub fn write_report(path: &Path, report: &MatchReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
