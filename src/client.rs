//! `POST /process_files` クライアント
//!
//! 選択ファイルを `files` パートとして繰り返し送り、カスタムプロンプトがあれば
//! `prompt` パートを付ける。ステータスコードに関係なくボディをJSONとして読む。
//! タイムアウトは設けない。

use crate::error::{FlashcardError, Result};
use crate::scanner::LocalFile;
use flashcard_common::{FileKind, ResultPayload, UploadRequest, FILES_FIELD, PROCESS_FILES_PATH, PROMPT_FIELD};
use reqwest::multipart::{Form, Part};

#[derive(Debug, Clone)]
pub struct ProcessingClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ProcessingClient {
    pub fn new(server_url: &str) -> Result<Self> {
        let base = server_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(FlashcardError::Config("サーバーURLが空です".into()));
        }

        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: format!("{}{}", base, PROCESS_FILES_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// multipartボディを組み立てる
    pub async fn build_form(request: &UploadRequest<std::path::PathBuf>) -> Result<Form> {
        let mut form = Form::new();

        for file in &request.files {
            form = form.part(FILES_FIELD, file_part(file).await?);
            tracing::debug!(name = %file.name, size = file.size, "file part added");
        }

        if let Some(prompt) = &request.prompt {
            form = form.text(PROMPT_FIELD, prompt.clone());
            tracing::debug!(chars = prompt.len(), "custom prompt included");
        }

        Ok(form)
    }

    /// ファイルを送信して処理結果を受け取る
    pub async fn process_files(&self, request: &UploadRequest<std::path::PathBuf>) -> Result<ResultPayload> {
        let form = Self::build_form(request).await?;
        self.send_form(form).await
    }

    /// 組み立て済みのボディを送信する
    pub async fn send_form(&self, form: Form) -> Result<ResultPayload> {
        tracing::info!(endpoint = %self.endpoint, "uploading files");
        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        tracing::debug!(status = %status, "server responded");

        let body = response.text().await?;
        let payload = ResultPayload::from_json(&body).map_err(|e| {
            FlashcardError::Processing(format!("サーバー応答を解析できません (HTTP {}): {}", status, e))
        })?;
        Ok(payload)
    }
}

async fn file_part(file: &LocalFile) -> Result<Part> {
    let bytes = tokio::fs::read(&file.handle).await?;
    let part = Part::bytes(bytes)
        .file_name(file.name.clone())
        .mime_str(FileKind::mime_type(&file.name))?;
    Ok(part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let client = ProcessingClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/process_files");

        let client = ProcessingClient::new(" http://example.com/api ").unwrap();
        assert_eq!(client.endpoint(), "http://example.com/api/process_files");
    }

    #[test]
    fn test_empty_server_url() {
        let err = ProcessingClient::new("  ").unwrap_err();
        assert!(matches!(err, FlashcardError::Config(_)));
    }
}
