//! Workout DB Common Library
//!
//! CLIとテストで共有される型と純粋ロジック（スラッグ化・正規化・照合）

pub mod types;
pub mod slug;
pub mod record;
pub mod matcher;
pub mod terms;
pub mod error;

pub use types::{CatalogRecord, NormalizedRecord, IndexEntry};
pub use slug::slugify;
pub use record::{normalize, missing_required_fields, DEFAULT_LEVEL, DEFAULT_CATEGORY};
pub use matcher::{find_best_match, MatchOutcome, MatchTier, NameIndex};
pub use terms::{ALL_TERMS, TEST_TERMS, terms_for, parse_terms, load_terms};
pub use error::{Error, Result};
