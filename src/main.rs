use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use workout_db_rust::{cli, config, error, export, fetcher, matcher, pipeline, verify};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use fetcher::CatalogSource;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // config サブコマンドは設定ファイルが壊れていても実行できる
    let config = match &cli.command {
        Commands::Config { .. } => Config::load_or_default(),
        _ => Config::load()?,
    };
    let source = catalog_source(&cli, &config);

    match cli.command {
        Commands::Fetch { output_dir, index, jobs } => {
            println!("🏋 workout-db - カタログ取得・正規化\n");
            println!("📦 取得元: {}\n", source.describe());

            // 1. カタログ取得
            println!("[1/2] エクササイズDBを取得中...");
            let catalog = source.load().await?;
            println!("✔ {}件の種目を読み込み\n", catalog.len());

            // 2. 正規化・書き込み・インデックス保存
            let index_path = index.unwrap_or_else(|| config.index_path.clone());
            let options = pipeline::PipelineOptions {
                output_dir: output_dir.unwrap_or_else(|| config.output_dir.clone()),
                images_base_url: config.images_base_url.clone(),
                jobs: jobs.unwrap_or(config.jobs),
                index_path: Some(index_path.clone()),
                show_progress: !cli.quiet,
            };
            println!("[2/2] 正規化・書き込み中... ({})", options.output_dir.display());
            let report = pipeline::run(&catalog, &options)?;

            println!("{}", "=".repeat(50));
            println!("📊 取得結果");
            println!("{}", "=".repeat(50));
            println!("✅ 成功: {}", report.successes.len());
            println!("❌ 失敗: {}", report.failures.len());
            for failed in &report.failures {
                println!("  ✘ {}: {}", failed.name, failed.reason);
            }
            println!();
            println!("✔ インデックス: {} ({}件)", index_path.display(), report.successes.len());

            println!("\n✅ 完了");
        }

        Commands::Match { test, term, terms_file, output } => {
            println!("🔍 workout-db - 種目名照合{}\n", if test { " (テストモード)" } else { "" });

            let terms: Vec<String> = if !term.is_empty() {
                term
            } else if let Some(path) = terms_file {
                workout_db_common::load_terms(&path)?
            } else {
                workout_db_common::terms_for(test)
                    .iter()
                    .map(|t| t.to_string())
                    .collect()
            };

            println!("[1/2] エクササイズDBを取得中...");
            let catalog = source.load().await?;
            println!("✔ {}件の種目を読み込み\n", catalog.len());

            println!("[2/2] {}件の検索語を照合中...", terms.len());
            let results = matcher::match_terms(&catalog, &terms);
            for result in &results {
                match (&result.name, &result.slug, &result.tier) {
                    (Some(name), Some(slug), Some(tier)) => {
                        println!("  ✔ {} → {} ({}) [{}]", result.term, name, slug, tier);
                    }
                    _ => println!("  ✘ {}: 該当なし", result.term),
                }
            }

            let report = matcher::build_report(results);
            println!("\n📊 照合: {}/{}件", report.matched, report.total);

            if let Some(path) = output {
                matcher::write_report(&path, &report)?;
                println!("✔ レポート: {}", path.display());
            }
        }

        Commands::Csv { output } => {
            println!("📄 workout-db - CSV出力\n");

            println!("- エクササイズDBを取得中...");
            let catalog = source.load().await?;
            println!("✔ {}件の種目を読み込み", catalog.len());

            let output_path = output.unwrap_or_else(|| config.csv_path.clone());
            export::export_csv(&catalog, &output_path)?;
        }

        Commands::Verify { output_dir, index } => {
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            println!("🔎 workout-db - 出力検証: {}\n", output_dir.display());

            let mut report = verify::verify_output_dir(&output_dir)?;
            if let Some(index_path) = index {
                let entries = pipeline::read_index(&index_path)?;
                report.issues.extend(verify::check_index(&output_dir, &entries));
            }

            for issue in &report.issues {
                println!("  ✘ {}: {}", issue.file.display(), issue.problem);
            }
            println!("\n📊 検査: {}件 / 問題: {}件", report.checked, report.issues.len());
            if report.is_ok() {
                println!("✅ 問題なし");
            }
        }

        Commands::Config { set_url, set_images_url, set_output_dir, set_jobs, show } => {
            let mut config = config;

            if let Some(url) = set_url {
                config.set_exercises_url(url)?;
                println!("✔ カタログURLを設定しました");
            }

            if let Some(url) = set_images_url {
                config.set_images_base_url(url)?;
                println!("✔ 画像ベースURLを設定しました");
            }

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ 出力ディレクトリを設定しました");
            }

            if let Some(jobs) = set_jobs {
                config.set_jobs(jobs)?;
                println!("✔ 並列数を設定しました");
            }

            if show {
                println!("設定 ({}):", Config::config_path()?.display());
                println!("  カタログURL: {}", config.exercises_url);
                println!("  画像ベースURL: {}", config.images_base_url);
                println!("  出力ディレクトリ: {}", config.output_dir.display());
                println!("  インデックス: {}", config.index_path.display());
                println!("  CSV: {}", config.csv_path.display());
                println!("  並列数: {}", if config.jobs == 0 { "自動".to_string() } else { config.jobs.to_string() });
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

/// ログはstderrへ（RUST_LOG優先、--verboseでdebug）
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn catalog_source(cli: &Cli, config: &Config) -> CatalogSource {
    match &cli.catalog {
        Some(path) => CatalogSource::File(PathBuf::from(path)),
        None => CatalogSource::Remote {
            url: config.exercises_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        },
    }
}
