//! 送信ワークフローの結合テスト
//!
//! `/process_files` を axum のモックサーバーで立て、multipartの中身と
//! 成功・失敗時のコントローラ状態を検証

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use flashcard_common::{Panel, Severity};
use flashcard_gen::client::ProcessingClient;
use flashcard_gen::error::FlashcardError;
use flashcard_gen::scanner;
use flashcard_gen::session::Session;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[derive(Debug, Clone)]
struct ReceivedPart {
    field: String,
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<ReceivedPart>>>,
}

async fn process_files(State(state): State<MockState>, mut multipart: Multipart) -> impl IntoResponse {
    while let Ok(Some(field)) = multipart.next_field().await {
        let part = ReceivedPart {
            field: field.name().unwrap_or_default().to_string(),
            file_name: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
            data: field.bytes().await.map(|b| b.to_vec()).unwrap_or_default(),
        };
        state.received.lock().unwrap().push(part);
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// モックサーバーを起動してURLと受信記録を返す
async fn spawn_mock(status: StatusCode, body: &str) -> (String, Arc<Mutex<Vec<ReceivedPart>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        body: body.to_string(),
        received: received.clone(),
    };
    let app = Router::new()
        .route("/process_files", post(process_files))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), received)
}

fn write_file(dir: &Path, name: &str, size: usize) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, vec![b'x'; size]).unwrap();
    path
}

fn session_for(url: &str) -> Session {
    Session::new(ProcessingClient::new(url).unwrap()).without_progress()
}

const SUCCESS_BODY: &str = r#"{
    "success": true,
    "flashcards": "Q: ...\nA: ...",
    "processed_files": 1,
    "total_files": 1,
    "message": "Done"
}"#;

/// report.pdf を送信して結果パネルに表示されるまで
#[tokio::test]
async fn test_end_to_end_success() {
    let (url, received) = spawn_mock(StatusCode::OK, SUCCESS_BODY).await;
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "report.pdf", 500_000);

    let mut session = session_for(&url);
    session.add_files(vec![scanner::local_file(&path).unwrap()]);

    let flashcards = session.submit().await.expect("submission should succeed");
    assert_eq!(flashcards, "Q: ...\nA: ...");

    let view = session.controller().render();
    assert_eq!(view.panel(), Panel::Results);
    let results = view.results.unwrap();
    assert_eq!(results.summary, "1 of 1 files processed");
    assert_eq!(results.flashcards, "Q: ...\nA: ...");
    assert!(!view.is_processing);

    let last = session.history().last().unwrap();
    assert_eq!(last.severity, Severity::Success);
    assert_eq!(last.message, "Done");

    let parts = received.lock().unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].field, "files");
    assert_eq!(parts[0].file_name.as_deref(), Some("report.pdf"));
    assert_eq!(parts[0].content_type.as_deref(), Some("application/pdf"));
    assert_eq!(parts[0].data.len(), 500_000);
}

/// success:false はエラー通知になり、ファイル一覧に戻る
#[tokio::test]
async fn test_end_to_end_backend_failure() {
    let (url, _) = spawn_mock(
        StatusCode::OK,
        r#"{"success": false, "error": "Unsupported content"}"#,
    )
    .await;
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "report.pdf", 500_000);

    let mut session = session_for(&url);
    session.add_files(vec![scanner::local_file(&path).unwrap()]);

    let err = session.submit().await.unwrap_err();
    assert!(matches!(err, FlashcardError::Processing(ref m) if m == "Unsupported content"));

    let view = session.controller().render();
    assert_eq!(view.progress, None);
    assert!(view.file_list_visible);
    assert_eq!(view.files.len(), 1);
    assert_eq!(view.files[0].name, "report.pdf");
    assert!(view.submit_enabled);
    assert!(!session.controller().is_processing());

    let last = session.history().last().unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert_eq!(last.message, "Unsupported content");
}

/// 400応答の {"error": ...} もそのまま表示する
#[tokio::test]
async fn test_error_status_body_is_parsed() {
    let (url, _) = spawn_mock(StatusCode::BAD_REQUEST, r#"{"error": "No valid PDF or image files found"}"#).await;
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "scan.png", 64);

    let mut session = session_for(&url);
    session.add_files(vec![scanner::local_file(&path).unwrap()]);

    let err = session.submit().await.unwrap_err();
    assert!(matches!(err, FlashcardError::Processing(ref m) if m == "No valid PDF or image files found"));
    assert!(!session.controller().is_processing());
}

/// JSONでない応答は通信エラーとして扱う
#[tokio::test]
async fn test_non_json_response() {
    let (url, _) = spawn_mock(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").await;
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "a.pdf", 10);

    let mut session = session_for(&url);
    session.add_files(vec![scanner::local_file(&path).unwrap()]);

    assert!(session.submit().await.is_err());
    assert!(!session.controller().is_processing());
    let last = session.history().last().unwrap();
    assert_eq!(last.title, "Processing failed");
    assert!(last.message.contains("502"));
}

/// 接続できない場合も送信中フラグは残らない
#[tokio::test]
async fn test_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "a.pdf", 10);

    let mut session = session_for(&format!("http://{}", addr));
    session.add_files(vec![scanner::local_file(&path).unwrap()]);

    assert!(session.submit().await.is_err());
    assert!(!session.controller().is_processing());
    assert!(session.controller().render().submit_enabled);
    assert_eq!(session.history().last().unwrap().severity, Severity::Error);
}

/// カスタムプロンプトは prompt パートとして送る
#[tokio::test]
async fn test_custom_prompt_is_sent() {
    let (url, received) = spawn_mock(StatusCode::OK, SUCCESS_BODY).await;
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "a.pdf", 10);

    let mut session = session_for(&url);
    session.add_files(vec![scanner::local_file(&path).unwrap()]);
    session.set_prompt("  Make cloze deletions only.\n".to_string());
    session.submit().await.unwrap();

    let parts = received.lock().unwrap();
    let prompt = parts.iter().find(|p| p.field == "prompt").expect("prompt part missing");
    assert_eq!(String::from_utf8_lossy(&prompt.data), "Make cloze deletions only.");
    assert_eq!(prompt.file_name, None);
}

/// 既定プロンプトのままなら prompt パートは送らない
#[tokio::test]
async fn test_default_prompt_is_omitted() {
    let (url, received) = spawn_mock(StatusCode::OK, SUCCESS_BODY).await;
    let dir = tempdir().unwrap();

    let mut session = session_for(&url);
    session.add_files(vec![
        scanner::local_file(&write_file(dir.path(), "b.jpg", 20)).unwrap(),
        scanner::local_file(&write_file(dir.path(), "a.pdf", 10)).unwrap(),
    ]);
    session.submit().await.unwrap();

    let parts = received.lock().unwrap();
    assert!(parts.iter().all(|p| p.field == "files"));
    let names: Vec<_> = parts.iter().filter_map(|p| p.file_name.clone()).collect();
    assert_eq!(names, vec!["b.jpg".to_string(), "a.pdf".to_string()]);
    assert_eq!(parts[0].content_type.as_deref(), Some("image/jpeg"));
}

/// 0件では送信しない
#[tokio::test]
async fn test_submit_without_files() {
    let (url, received) = spawn_mock(StatusCode::OK, SUCCESS_BODY).await;
    let mut session = session_for(&url);

    let err = session.submit().await.unwrap_err();
    assert!(matches!(err, FlashcardError::NoFilesSelected));
    assert!(received.lock().unwrap().is_empty());
}

/// 結果を flashcards.txt に保存
#[tokio::test]
async fn test_save_results() {
    let (url, _) = spawn_mock(StatusCode::OK, SUCCESS_BODY).await;
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "a.pdf", 10);

    let mut session = session_for(&url);
    session.add_files(vec![scanner::local_file(&path).unwrap()]);
    session.submit().await.unwrap();

    let out = dir.path().join("flashcards.txt");
    session.save_results(&out).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "Q: ...\nA: ...");
    let last = session.history().last().unwrap();
    assert_eq!(last.title, "Downloaded!");
    assert_eq!(last.message, format!("Flashcards saved to {}.", out.display()));
}

/// 標準出力には本文だけを書き、コピー済みとは通知しない
#[tokio::test]
async fn test_write_results_emits_only_flashcards() {
    let (url, _) = spawn_mock(StatusCode::OK, SUCCESS_BODY).await;
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "a.pdf", 10);

    let mut session = session_for(&url);
    session.add_files(vec![scanner::local_file(&path).unwrap()]);
    session.submit().await.unwrap();

    let mut out = Vec::new();
    session.write_results(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Q: ...\nA: ...\n");

    let last = session.history().last().unwrap();
    assert_eq!(last.title, "Printed!");
    assert_eq!(last.message, "Flashcards written to standard output.");
    assert!(session.history().iter().all(|n| n.title != "Copied!"));
}

/// クライアント単体: 応答をそのまま返す
#[tokio::test]
async fn test_client_process_files() {
    let (url, _) = spawn_mock(StatusCode::OK, SUCCESS_BODY).await;
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "a.pdf", 10);

    let client = ProcessingClient::new(&url).unwrap();
    let request = flashcard_common::UploadRequest {
        files: vec![scanner::local_file(&path).unwrap()],
        prompt: None,
    };
    let payload = client.process_files(&request).await.unwrap();
    assert!(payload.success);
    assert_eq!(payload.message, "Done");
    assert_eq!(payload.total_files, 1);
}
