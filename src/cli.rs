use crate::config::PlaceholderPolicy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery-catalog")]
#[command(about = "ウェディングギャラリーの写真カタログを生成", long_about = None)]
pub struct Cli {
    /// 省略時は build を実行
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（省略時は $GALLERY_CONFIG, ./gallery.json の順に探す）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真フォルダからカタログJSONを生成
    Build(BuildArgs),

    /// カテゴリ別の枚数を表示
    Stats {
        /// カタログJSON（省略時は設定の出力先）
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// IDを指定して写真のメタデータを表示
    Show {
        /// 写真ID
        #[arg(required = true)]
        id: String,

        /// カタログJSON（省略時は設定の出力先）
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// 設定を表示
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct BuildArgs {
    /// 写真フォルダのパス
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 出力JSONファイル
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// カテゴリ範囲表のプリセット (wedding/classic)
    #[arg(long)]
    pub scheme: Option<String>,

    /// プレースホルダー生成失敗時の扱い (skip/empty)
    #[arg(long)]
    pub placeholder_policy: Option<PlaceholderPolicy>,

    /// プレースホルダーを生成しない
    #[arg(long)]
    pub no_placeholder: bool,

    /// 並列処理しない
    #[arg(long)]
    pub sequential: bool,
}
