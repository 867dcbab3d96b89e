//! プログレスバーコンポーネント

use flashcard_common::{Progress, ViewModel};
use leptos::prelude::*;

#[component]
pub fn ProgressBar(view_model: Memo<ViewModel>) -> impl IntoView {
    let progress = move || view_model.with(|v| v.progress).unwrap_or(Progress::UPLOADING);

    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", progress().percent)
                />
            </div>
            <p class="progress-text">{move || progress().label}</p>
        </div>
    }
}
