//! コントローラを保持するリアクティブストア
//!
//! すべての状態変更は `apply` を通す。通知の自動消去タイマーと
//! 結果表示までの遅延はここで予約する。

use crate::api;
use flashcard_common::{Completion, Controller, NotificationId, ViewModel, NOTIFICATION_LIFETIME};
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{HashMap, HashSet};
use web_sys::File;

pub type WebController = Controller<File>;

#[derive(Clone, Copy)]
pub struct Store {
    controller: RwSignal<WebController, LocalStorage>,
    timers: StoredValue<HashMap<NotificationId, Timeout>, LocalStorage>,
}

impl Store {
    pub fn new(baseline_prompt: &str) -> Self {
        Self {
            controller: RwSignal::new_local(Controller::new(baseline_prompt)),
            timers: StoredValue::new_local(HashMap::new()),
        }
    }

    /// 状態が変わるたびに作り直されるビューモデル
    pub fn view_model(&self) -> Memo<ViewModel> {
        let controller = self.controller;
        Memo::new(move |_| controller.with(|c| c.render()))
    }

    /// 追跡せずに読む（イベントハンドラ用）
    pub fn read<R>(&self, f: impl FnOnce(&WebController) -> R) -> R {
        self.controller.with_untracked(f)
    }

    /// 状態を変更し、新しい通知の自動消去を予約する
    pub fn apply<R>(&self, f: impl FnOnce(&mut WebController) -> R) -> Option<R> {
        let outcome = self.controller.try_update(|c| {
            let result = f(c);
            (result, c.take_unscheduled_notifications())
        });

        let (result, scheduled) = outcome?;
        self.schedule_dismissals(scheduled);
        Some(result)
    }

    /// 手動で閉じる。予約済みタイマーも取り消す
    pub fn dismiss(&self, id: NotificationId) {
        self.timers.update_value(|timers| {
            timers.remove(&id);
        });
        self.controller.update(|c| {
            c.dismiss_notification(id);
        });
    }

    fn schedule_dismissals(&self, ids: Vec<NotificationId>) {
        // 発火済みタイマーを片付ける（コールバック内では破棄できない）
        let visible: HashSet<NotificationId> = self
            .controller
            .with_untracked(|c| c.notifications().visible().iter().map(|n| n.id).collect());
        self.timers.update_value(|timers| timers.retain(|id, _| visible.contains(id)));

        let store = *self;
        for id in ids {
            let timeout = Timeout::new(NOTIFICATION_LIFETIME.as_millis() as u32, move || {
                store.controller.update(|c| {
                    c.dismiss_notification(id);
                });
            });
            self.timers.update_value(|timers| {
                timers.insert(id, timeout);
            });
        }
    }

    /// 選択中のファイルを送信する
    ///
    /// 送信中・0件なら何もしない。成功時は少し待ってから結果を表示する。
    pub fn submit(&self) {
        let Some(request) = self.apply(|c| c.begin_submission()).flatten() else {
            return;
        };
        web_sys::console::log_1(&format!("submitting {} file(s)", request.files.len()).into());

        let store = *self;
        spawn_local(async move {
            let outcome = match api::build_form_data(&request) {
                Ok(form) => {
                    store.apply(|c| c.mark_dispatched());
                    api::send(form).await.map_err(|e| api::error_text(&e))
                }
                Err(e) => Err(api::error_text(&e)),
            };

            if let Err(message) = &outcome {
                web_sys::console::error_1(&format!("processing failed: {}", message).into());
            }

            if let Some(Completion::RevealAfter(delay)) = store.apply(|c| c.complete(outcome)) {
                Timeout::new(delay.as_millis() as u32, move || {
                    store.apply(|c| c.reveal_results());
                })
                .forget();
            }
        });
    }
}

#[cfg(test)]
impl Store {
    fn has_timer(&self, id: NotificationId) -> bool {
        self.timers.with_value(|timers| timers.contains_key(&id))
    }
}
