//! 結果パネル
//!
//! 生成されたフラッシュカードを編集可能なテキストエリアに表示する。
//! コピー・ダウンロード・全選択は編集後の内容が対象。

use flashcard_common::ViewModel;
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn ResultsPanel<FE, FC, FD, FA, FN>(
    view_model: Memo<ViewModel>,
    textarea_ref: NodeRef<html::Textarea>,
    on_edit: FE,
    on_copy: FC,
    on_download: FD,
    on_select_all: FA,
    on_new_batch: FN,
) -> impl IntoView
where
    FE: Fn(String) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FD: Fn(()) + 'static + Clone + Send + Sync,
    FA: Fn(()) + 'static + Clone + Send + Sync,
    FN: Fn(()) + 'static + Clone + Send + Sync,
{
    let results = move || view_model.with(|v| v.results.clone()).unwrap_or_default();

    view! {
        <div class="results-section">
            <div class="results-header">
                <h3><i class="fas fa-check-circle"></i>" Flashcards"</h3>
                <p class="results-summary">{move || results().summary}</p>
            </div>
            <textarea
                class="results-text"
                rows="20"
                node_ref=textarea_ref
                prop:value=move || results().flashcards
                on:input=move |ev| on_edit(event_target_value(&ev))
            />
            <div class="action-buttons">
                <button class="btn btn-primary" on:click=move |_| on_copy(())>
                    <i class="fas fa-copy"></i>" Copy"
                </button>
                <button class="btn btn-primary" on:click=move |_| on_download(())>
                    <i class="fas fa-download"></i>" Download"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_select_all(())>
                    <i class="fas fa-i-cursor"></i>" Select All"
                </button>
                <button class="btn btn-tertiary" on:click=move |_| on_new_batch(())>
                    <i class="fas fa-plus"></i>" New Batch"
                </button>
            </div>
        </div>
    }
}
