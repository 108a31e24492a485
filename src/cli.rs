use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "workout-db")]
#[command(about = "エクササイズDB取得・正規化・種目名照合ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 進捗バーを表示しない
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// リモート取得の代わりにローカルのカタログJSONを使う
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログを取得し、1種目1ファイルに正規化して保存
    Fetch {
        /// 出力ディレクトリ（デフォルト: 設定値）
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// インデックスJSONの出力先
        #[arg(short, long)]
        index: Option<PathBuf>,

        /// 並列数（0 = CPU数）
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// ワークアウトプランの種目名をカタログと照合
    Match {
        /// スモークテスト用の少数リストで照合
        #[arg(long, conflicts_with_all = ["term", "terms_file"])]
        test: bool,

        /// 検索語を直接指定（複数可）
        #[arg(short, long)]
        term: Vec<String>,

        /// 検索語リストJSON（文字列の配列）
        #[arg(long, conflicts_with = "term")]
        terms_file: Option<PathBuf>,

        /// 照合レポートJSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// カタログ一覧をCSVに出力
    Csv {
        /// 出力ファイル（デフォルト: 設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 出力ディレクトリを検証（必須フィールド・スラッグ整合性）
    Verify {
        /// 出力ディレクトリ（デフォルト: 設定値）
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// インデックスJSON（指定時は対応ファイルの存在も確認）
        #[arg(short, long)]
        index: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// カタログURLを設定
        #[arg(long)]
        set_url: Option<String>,

        /// 画像ベースURLを設定
        #[arg(long)]
        set_images_url: Option<String>,

        /// 出力ディレクトリを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// 並列数を設定
        #[arg(long)]
        set_jobs: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
