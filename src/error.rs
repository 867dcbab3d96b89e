use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("対応ファイル（PDF/JPEG/PNG）が選択されていません")]
    NoFilesSelected,

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("対話入力エラー: {0}")]
    Interactive(String),

    #[error("処理に失敗しました: {0}")]
    Processing(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] flashcard_common::Error),
}

pub type Result<T> = std::result::Result<T, FlashcardError>;
