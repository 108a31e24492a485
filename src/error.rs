use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutDbError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("カタログ取得に失敗: {url} ({detail})")]
    Retrieval { url: String, detail: String },

    #[error("カタログ取得に失敗: {url} (HTTP {status})")]
    RetrievalStatus { url: String, status: u16 },

    #[error("カタログのパースに失敗: {0}")]
    CatalogParse(String),

    #[error("不正なレコード: {0}")]
    InvalidRecord(String),

    #[error("スラッグが重複: {slug}（既存: {existing}）")]
    SlugCollision { slug: String, existing: String },

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Common(#[from] workout_db_common::Error),
}

impl WorkoutDbError {
    /// カタログ取得系（実行全体を中断する）エラーか
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            WorkoutDbError::Retrieval { .. }
                | WorkoutDbError::RetrievalStatus { .. }
                | WorkoutDbError::CatalogParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, WorkoutDbError>;
