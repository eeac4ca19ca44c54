use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bias-audit")]
#[command(about = "顔画像をバイアス監査APIに送信して結果を表示する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を送信して監査結果を表示
    Audit {
        /// 画像ファイルのパス
        image: Option<PathBuf>,

        /// エンドポイントを上書き
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 結果JSONの保存先
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// 保存済みの結果JSONを表示
    Render {
        /// 結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// タイムアウトを解除
        #[arg(long, conflicts_with = "set_timeout")]
        clear_timeout: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
