//! ブラウザ操作（クリップボード・ダウンロード・選択範囲）

use flashcard_common::DownloadArtifact;
use std::ops::Range;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlDocument, HtmlTextAreaElement, Url};

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))
}

/// テキストエリアの全文をクリップボードへコピー
pub fn copy_textarea(textarea: &HtmlTextAreaElement) -> Result<(), JsValue> {
    textarea.select();
    let document: HtmlDocument = document()?.dyn_into()?;
    if document.exec_command("copy")? {
        Ok(())
    } else {
        Err(JsValue::from_str("copy command was rejected"))
    }
}

/// 全文を選択状態にする
pub fn select_range(textarea: &HtmlTextAreaElement, range: Range<usize>) -> Result<(), JsValue> {
    textarea.focus()?;
    textarea.set_selection_range(range.start as u32, range.end as u32)
}

/// テキストをファイルとして保存させる
///
/// 一時URLはクリック直後に必ず破棄する。
pub fn save_text_file(artifact: &DownloadArtifact) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&artifact.contents));
    let options = BlobPropertyBag::new();
    options.set_type(artifact.mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let clicked = click_download_link(&url, artifact.file_name);
    Url::revoke_object_url(&url)?;
    clicked
}

fn click_download_link(url: &str, file_name: &str) -> Result<(), JsValue> {
    let document = document()?;
    let body = document.body().ok_or_else(|| JsValue::from_str("body is not available"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(file_name);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
