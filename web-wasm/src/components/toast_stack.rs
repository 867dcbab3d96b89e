//! トースト通知

use flashcard_common::{NotificationId, NotificationView, ViewModel};
use leptos::prelude::*;

#[component]
pub fn ToastStack<F>(view_model: Memo<ViewModel>, on_dismiss: F) -> impl IntoView
where
    F: Fn(NotificationId) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="toast-container">
            <For
                each=move || view_model.with(|v| v.notifications.clone())
                key=|n: &NotificationView| n.id
                children=move |n: NotificationView| {
                    let on_dismiss = on_dismiss.clone();
                    let id = n.id;
                    view! {
                        <div class=n.class>
                            <i class=n.icon_class></i>
                            <div class="toast-content">
                                <strong>{n.title}</strong>
                                <p>{n.message}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| on_dismiss(id)>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
