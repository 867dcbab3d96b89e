//! アップロードエリアコンポーネント

use flashcard_common::{SelectedFile, ACCEPT_ATTRIBUTE};
use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, File, FileList};

/// FileList を選択候補に変換（拡張子の判定はコントローラ側）
fn to_candidates(files: &FileList) -> Vec<SelectedFile<File>> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| SelectedFile::new(file.name(), file.size() as u64, file))
        .collect()
}

#[component]
pub fn UploadArea<F>(on_files_added: F) -> impl IntoView
where
    F: Fn(Vec<SelectedFile<File>>) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let on_drop = {
        let on_files_added = on_files_added.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                on_files_added(to_candidates(&files));
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // ファイル選択ダイアログを開く
    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        if let Some(files) = input.files() {
            on_files_added(to_candidates(&files));
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    view! {
        <div
            class=move || if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=open_picker
        >
            <div class="upload-icon"><i class="fas fa-cloud-upload-alt"></i></div>
            <p>"Drag & drop files here or click to browse"</p>
            <p class="text-muted">"Supported: PDF, JPG, JPEG, PNG"</p>
            <input
                type="file"
                multiple=true
                accept=ACCEPT_ATTRIBUTE
                style="display: none"
                node_ref=input_ref
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
