//! サーバーとの送受信型
//!
//! CLIとWeb(WASM)で共有される型:
//! - ResultPayload: `POST /process_files` のJSONレスポンス
//! - UploadRequest: multipartボディの内容（送信手段には依存しない）
//! - DownloadArtifact: ダウンロードするテキストファイル

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::selection::SelectedFile;

/// 処理エンドポイント
pub const PROCESS_FILES_PATH: &str = "/process_files";

/// multipartのファイルフィールド名（ファイルごとに繰り返す）
pub const FILES_FIELD: &str = "files";

/// multipartのプロンプトフィールド名
pub const PROMPT_FIELD: &str = "prompt";

/// ダウンロードファイル名
pub const DOWNLOAD_FILE_NAME: &str = "flashcards.txt";

/// サーバーの処理結果
///
/// エラー時のレスポンスは `{"error": "..."}` だけのこともあるので全フィールド省略可。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultPayload {
    pub success: bool,
    pub flashcards: String,
    pub processed_files: u32,
    pub total_files: u32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResultPayload {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// 結果パネルの集計表示
    pub fn summary(&self) -> String {
        format!("{} of {} files processed", self.processed_files, self.total_files)
    }

    /// 失敗時に表示するメッセージ
    pub fn failure_message(&self) -> String {
        match self.error.as_deref() {
            Some(error) if !error.is_empty() => error.to_string(),
            _ => "Processing failed".to_string(),
        }
    }
}

/// 送信内容
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest<H> {
    /// `files` フィールドとして送る全ファイル（選択順）
    pub files: Vec<SelectedFile<H>>,
    /// カスタムプロンプト。None はサーバー既定を使う
    pub prompt: Option<String>,
}

/// 保存用テキストファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub contents: String,
}
