//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1><i class="fas fa-layer-group"></i>" Flashcard Generator"</h1>
            <p class="text-muted">"PDFや画像からREMNOTE形式のフラッシュカードを作成"</p>
        </header>
    }
}
