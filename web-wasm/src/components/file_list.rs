//! 選択ファイル一覧コンポーネント

use flashcard_common::{FileRowView, ViewModel};
use leptos::prelude::*;

#[component]
pub fn FileList<FR, FC, FS>(
    view_model: Memo<ViewModel>,
    on_remove: FR,
    on_clear: FC,
    on_submit: FS,
) -> impl IntoView
where
    FR: Fn(usize) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="file-list">
            <h3>"Selected files"</h3>
            <ul class="file-items">
                <For
                    each=move || view_model.with(|v| v.files.clone())
                    key=|row: &FileRowView| row.clone()
                    children=move |row: FileRowView| {
                        let on_remove = on_remove.clone();
                        let index = row.index;
                        view! {
                            <li class="file-item">
                                <i class=row.icon_class></i>
                                <span class="file-name">{row.name}</span>
                                <span class="file-size">{row.size_label}</span>
                                <button
                                    class="btn-remove"
                                    title="Remove"
                                    on:click=move |_| on_remove(index)
                                >
                                    <i class="fas fa-times"></i>
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <div class="action-buttons">
                <button
                    class="btn btn-primary"
                    disabled=move || !view_model.with(|v| v.submit_enabled)
                    on:click=move |_| on_submit(())
                >
                    <i class="fas fa-magic"></i>
                    {move || if view_model.with(|v| v.is_processing) { " Processing..." } else { " Generate Flashcards" }}
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=move || !view_model.with(|v| v.clear_enabled)
                    on:click=move |_| on_clear(())
                >
                    <i class="fas fa-trash"></i>" Clear All"
                </button>
            </div>
        </div>
    }
}
