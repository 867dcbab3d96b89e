//! メインアプリケーションコンポーネント

use crate::browser;
use crate::components::{
    file_list::FileList,
    header::Header,
    progress_bar::ProgressBar,
    results_panel::ResultsPanel,
    settings_panel::SettingsPanel,
    toast_stack::ToastStack,
    upload_area::UploadArea,
};
use crate::store::Store;
use flashcard_common::{SelectedFile, Severity, DEFAULT_PROMPT};
use leptos::html;
use leptos::prelude::*;
use web_sys::File;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(DEFAULT_PROMPT);
    let view_model = store.view_model();
    let results_ref: NodeRef<html::Textarea> = NodeRef::new();

    // ファイル追加
    let on_files_added = move |files: Vec<SelectedFile<File>>| {
        store.apply(|c| c.add_files(files));
    };

    let on_remove = move |index: usize| {
        store.apply(|c| {
            if let Err(e) = c.remove_file(index) {
                web_sys::console::warn_1(&e.to_string().into());
            }
        });
    };

    let on_clear = move |_: ()| {
        store.apply(|c| c.clear_files());
    };

    let on_submit = move |_: ()| store.submit();

    // 結果パネル
    let on_copy = move |_: ()| {
        let Some(textarea) = results_ref.get() else {
            return;
        };
        match browser::copy_textarea(&textarea) {
            Ok(()) => {
                store.apply(|c| c.mark_copied());
            }
            Err(e) => {
                store.apply(|c| c.notify(Severity::Error, "Copy failed", crate::api::error_text(&e)));
            }
        }
    };

    let on_download = move |_: ()| {
        let artifact = store.read(|c| c.results_download());
        match browser::save_text_file(&artifact) {
            Ok(()) => {
                store.apply(|c| c.mark_downloaded());
            }
            Err(e) => {
                store.apply(|c| c.notify(Severity::Error, "Download failed", crate::api::error_text(&e)));
            }
        }
    };

    let on_select_all = move |_: ()| {
        let Some(textarea) = results_ref.get() else {
            return;
        };
        let range = store.read(|c| c.select_all_results());
        if let Err(e) = browser::select_range(&textarea, range) {
            web_sys::console::warn_1(&e);
        }
    };

    let on_edit = move |text: String| {
        store.apply(|c| c.edit_results(text));
    };

    let on_new_batch = move |_: ()| {
        store.apply(|c| c.start_new_batch());
    };

    // プロンプト設定
    let on_toggle_advanced = move |_: ()| {
        store.apply(|c| c.toggle_advanced());
    };

    let on_prompt_input = move |text: String| {
        store.apply(|c| c.set_prompt(text));
    };

    let on_reset_prompt = move |_: ()| {
        store.apply(|c| c.reset_prompt());
    };

    let on_dismiss = move |id| store.dismiss(id);

    view! {
        <div class="container">
            <Header />

            <Show when=move || view_model.with(|v| v.upload_prompt_visible)>
                <UploadArea on_files_added=on_files_added />
            </Show>

            <Show when=move || view_model.with(|v| v.file_list_visible)>
                <FileList
                    view_model=view_model
                    on_remove=on_remove
                    on_clear=on_clear
                    on_submit=on_submit
                />
            </Show>

            <Show when=move || view_model.with(|v| v.progress.is_some())>
                <ProgressBar view_model=view_model />
            </Show>

            <Show when=move || view_model.with(|v| v.results.is_some())>
                <ResultsPanel
                    view_model=view_model
                    textarea_ref=results_ref
                    on_edit=on_edit
                    on_copy=on_copy
                    on_download=on_download
                    on_select_all=on_select_all
                    on_new_batch=on_new_batch
                />
            </Show>

            <SettingsPanel
                view_model=view_model
                on_toggle=on_toggle_advanced
                on_input=on_prompt_input
                on_reset=on_reset_prompt
            />

            <ToastStack view_model=view_model on_dismiss=on_dismiss />
        </div>
    }
}
