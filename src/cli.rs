use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flashcard-gen")]
#[command(about = "PDF・画像からフラッシュカードを生成するクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ファイルをサーバーへ送信してフラッシュカードを生成
    Process {
        /// PDF/画像ファイル、またはフォルダ
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// カスタムプロンプトのファイル（省略時はサーバー既定）
        #[arg(short, long)]
        prompt_file: Option<PathBuf>,

        /// 出力ファイル（デフォルト: 設定の output_file）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 結果の出力先 (file/stdout/both)
        #[arg(long, value_enum, default_value = "file")]
        emit: Emit,

        /// 接続先サーバー（設定・環境変数より優先）
        #[arg(long)]
        server: Option<String>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// 送信前に除外するファイルを対話的に選ぶ
        #[arg(short = 'i', long)]
        interactive: bool,
    },

    /// 既定プロンプトを表示
    Prompt {
        /// 書き出し先（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 接続先サーバーURLを設定
        #[arg(long)]
        set_server_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 結果の出力先
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    #[default]
    File,
    Stdout,
    Both,
}

impl Emit {
    pub fn writes_file(&self) -> bool {
        matches!(self, Emit::File | Emit::Both)
    }

    pub fn prints(&self) -> bool {
        matches!(self, Emit::Stdout | Emit::Both)
    }
}
