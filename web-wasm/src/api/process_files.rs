//! `/process_files` への送信
//!
//! multipart の組み立てと fetch。JS側のエラーは `JsValue` のまま返し、
//! 表示用の文字列化は `error_text` で行う。

use flashcard_common::{ResultPayload, UploadRequest, FILES_FIELD, PROCESS_FILES_PATH, PROMPT_FIELD};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

/// 選択順に `files` パート、カスタム時のみ `prompt` パート
pub fn build_form_data(request: &UploadRequest<File>) -> Result<FormData, JsValue> {
    let form = FormData::new()?;

    for file in &request.files {
        form.append_with_blob_and_filename(FILES_FIELD, &file.handle, &file.name)?;
    }

    if let Some(prompt) = &request.prompt {
        form.append_with_str(PROMPT_FIELD, prompt)?;
    }

    Ok(form)
}

/// フォームを送信して応答JSONを読む
///
/// HTTPステータスに関わらず本文をJSONとして解釈する。
/// サーバーは 4xx/5xx でも `{"error": ...}` を返すため。
pub async fn send(form: FormData) -> Result<ResultPayload, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from(form));

    let request = Request::new_with_str_and_init(PROCESS_FILES_PATH, &opts)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let json = JsFuture::from(resp.json()?).await.map_err(|e| {
        JsValue::from_str(&format!("HTTP {}: {}", resp.status(), error_text(&e)))
    })?;

    let payload: ResultPayload = serde_wasm_bindgen::from_value(json)?;
    Ok(payload)
}

/// エラー通知に出す文字列
pub fn error_text(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
