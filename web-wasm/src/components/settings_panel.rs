//! 詳細設定パネル（AIプロンプト）

use flashcard_common::ViewModel;
use leptos::prelude::*;

#[component]
pub fn SettingsPanel<FT, FI, FR>(
    view_model: Memo<ViewModel>,
    on_toggle: FT,
    on_input: FI,
    on_reset: FR,
) -> impl IntoView
where
    FT: Fn(()) + 'static + Clone + Send + Sync,
    FI: Fn(String) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let expanded = move || view_model.with(|v| v.advanced_expanded);

    view! {
        <div class="settings-panel">
            <button class="btn-link advanced-toggle" on:click=move |_| on_toggle(())>
                <i class=move || if expanded() { "fas fa-chevron-up" } else { "fas fa-chevron-down" }></i>
                " Advanced settings"
                <Show when=move || view_model.with(|v| v.prompt_customized)>
                    <span class="badge">"custom"</span>
                </Show>
            </button>

            <Show when=expanded>
                <div class="form-group">
                    <label for="custom-prompt">"AI prompt"</label>
                    <textarea
                        id="custom-prompt"
                        rows="12"
                        prop:value=move || view_model.with(|v| v.prompt_text.clone())
                        on:input={
                            let on_input = on_input.clone();
                            move |ev| on_input(event_target_value(&ev))
                        }
                    />
                    <button
                        class="btn btn-tertiary btn-small"
                        on:click={
                            let on_reset = on_reset.clone();
                            move |_| on_reset(())
                        }
                    >
                        <i class="fas fa-undo"></i>" Reset to default"
                    </button>
                </div>
            </Show>
        </div>
    }
}
