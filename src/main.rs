use anyhow::Context;
use clap::Parser;
use gallery_common::format_file_size;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use wedding_gallery::{builder, cli, config, error, export, reader};
use cli::{BuildArgs, Cli, Commands};
use config::Config;
use error::GalleryError;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?,
        None => Config::load()?,
    };

    match cli.command.unwrap_or_else(|| Commands::Build(BuildArgs::default())) {
        Commands::Build(args) => run_build(config, args)?,

        Commands::Stats { catalog } => {
            let path = catalog.unwrap_or_else(|| config.output.clone());
            let (catalog, source) = reader::load_catalog(&path, &config)?;

            println!("カタログ: {}", describe_source(&path, source));
            println!("  合計: {}枚", catalog.len());
            for (category, count) in catalog.stats().categories {
                println!("  {:<14} {:>5}枚  {}", category.as_str(), count, category.summary());
            }
        }

        Commands::Show { id, catalog } => {
            let path = catalog.unwrap_or_else(|| config.output.clone());
            let (catalog, _) = reader::load_catalog(&path, &config)?;

            let photo = catalog
                .get_by_id(&id)
                .ok_or_else(|| GalleryError::PhotoNotFound(id.clone()))?;
            println!("{}", serde_json::to_string_pretty(photo)?);
            println!("サイズ: {}", format_file_size(photo.file_size));
        }

        Commands::Config { show } => {
            if show {
                let scheme = config.category_scheme()?;
                println!("設定:");
                println!(
                    "  設定ファイル: {}",
                    cli.config
                        .or_else(Config::config_path)
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "（既定値）".into())
                );
                println!("  写真フォルダ: {}", config.photos_dir.display());
                println!("  公開パス: {}", config.public_path);
                println!("  出力先: {}", config.output.display());
                println!("  拡張子: {}", config.extensions.join(", "));
                if config.category_scheme.is_some() {
                    println!("  カテゴリ: カスタム");
                } else {
                    println!("  カテゴリ: {}", config.category_preset);
                }
                for band in &scheme.bands {
                    println!("    ~{:>5} → {}", band.up_to, band.category);
                }
                println!("    それ以外 → {}", scheme.fallback);
                println!(
                    "  プレースホルダー: {} ({}x{}, 失敗時: {})",
                    if config.placeholder.enabled { "有効" } else { "無効" },
                    config.placeholder.width,
                    config.placeholder.height,
                    config.placeholder.on_error
                );
                println!("  並列処理: {}", if config.parallel { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}

fn run_build(mut config: Config, args: BuildArgs) -> anyhow::Result<()> {
    if let Some(input) = args.input {
        config.photos_dir = input;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(scheme) = args.scheme {
        config.category_preset = scheme;
        config.category_scheme = None;
    }
    if let Some(policy) = args.placeholder_policy {
        config.placeholder.on_error = policy;
    }
    if args.no_placeholder {
        config.placeholder.enabled = false;
    }
    if args.sequential {
        config.parallel = false;
    }

    println!("📸 gallery-catalog - カタログ生成\n");

    // 1. 写真の処理
    println!("[1/2] 写真を処理中... ({})", config.photos_dir.display());
    let report = builder::CatalogBuilder::new(&config)?
        .with_progress(true)
        .build(&config.photos_dir)?;
    println!("✔ {}/{}枚を処理", report.photos.len(), report.scanned);

    for skipped in &report.skipped {
        println!("  ✗ {}: {}", skipped.file_name, skipped.reason);
    }
    if report.missing_placeholders > 0 {
        println!("  - プレースホルダーなし: {}枚", report.missing_placeholders);
    }

    // 2. 保存
    println!("\n[2/2] カタログを保存中...");
    export::write_catalog(&report.photos, &config.output)?;
    println!("✔ カタログを保存: {}", config.output.display());

    println!("\n✅ {}枚のメタデータを生成", report.photos.len());
    Ok(())
}

fn describe_source(path: &Path, source: reader::CatalogSource) -> String {
    match source {
        reader::CatalogSource::File => path.display().to_string(),
        reader::CatalogSource::Directory => "写真フォルダから直接読み込み（簡易モード）".into(),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "wedding_gallery={level},gallery_common={level}",
            level = default_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
