use crate::error::{WorkoutDbError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_EXERCISES_URL: &str =
    "https://raw.githubusercontent.com/yuhonas/free-exercise-db/main/dist/exercises.json";
pub const DEFAULT_IMAGES_BASE_URL: &str =
    "https://raw.githubusercontent.com/yuhonas/free-exercise-db/main/exercises";

const URL_ENV: &str = "WORKOUT_DB_URL";
const IMAGES_URL_ENV: &str = "WORKOUT_DB_IMAGES_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub exercises_url: String,
    pub images_base_url: String,
    pub output_dir: PathBuf,
    pub index_path: PathBuf,
    pub csv_path: PathBuf,
    /// 並列数（0 = CPU数）
    pub jobs: usize,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exercises_url: DEFAULT_EXERCISES_URL.into(),
            images_base_url: DEFAULT_IMAGES_BASE_URL.into(),
            output_dir: PathBuf::from("src/content/exercises"),
            index_path: PathBuf::from("src/data/exercises-index.json"),
            csv_path: PathBuf::from("exercises.csv"),
            jobs: 0,
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        Ok(config.with_env_overrides())
    }

    /// 読み込めない場合は既定値（設定ファイルの修復用）
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                tracing::warn!("設定の読み込みに失敗、既定値を使用: {}", e);
                Self::default().with_env_overrides()
            }
        }
    }

    pub fn load_or_default_from(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            tracing::warn!("設定の読み込みに失敗、既定値を使用: {} ({})", e, config_path.display());
            Self::default().with_env_overrides()
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| WorkoutDbError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("workout-db").join("config.json"))
    }

    /// 環境変数を優先
    fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(URL_ENV) {
            if !url.trim().is_empty() {
                self.exercises_url = url;
            }
        }
        if let Ok(url) = std::env::var(IMAGES_URL_ENV) {
            if !url.trim().is_empty() {
                self.images_base_url = url;
            }
        }
        self
    }

    pub fn set_exercises_url(&mut self, url: String) -> Result<()> {
        validate_url(&url)?;
        self.exercises_url = url;
        self.save()
    }

    pub fn set_images_base_url(&mut self, url: String) -> Result<()> {
        validate_url(&url)?;
        self.images_base_url = url;
        self.save()
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.output_dir = dir;
        self.save()
    }

    pub fn set_jobs(&mut self, jobs: usize) -> Result<()> {
        self.jobs = jobs;
        self.save()
    }
}

fn validate_url(url: &str) -> Result<()> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(WorkoutDbError::Config(format!("URLが不正です: {}", url)))
    }
}
