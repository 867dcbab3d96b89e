//! 描画用ビューモデル
//!
//! `Controller::render` が状態変更のたびに丸ごと作り直す。
//! ホストはこの値だけを見て表示・有効状態を決める。

use crate::notifications::Notification;
use crate::submission::Progress;

/// 排他的に表示されるパネル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// アップロード案内（0件）またはファイル一覧（1件以上）
    #[default]
    Selection,
    Progress,
    Results,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewModel {
    pub upload_prompt_visible: bool,
    pub file_list_visible: bool,
    pub progress: Option<Progress>,
    pub results: Option<ResultsView>,
    pub files: Vec<FileRowView>,
    pub submit_enabled: bool,
    pub clear_enabled: bool,
    pub is_processing: bool,
    pub advanced_expanded: bool,
    /// 編集欄に表示するプロンプト
    pub prompt_text: String,
    pub prompt_customized: bool,
    pub notifications: Vec<NotificationView>,
}

impl ViewModel {
    pub fn panel(&self) -> Panel {
        if self.results.is_some() {
            Panel::Results
        } else if self.progress.is_some() {
            Panel::Progress
        } else {
            Panel::Selection
        }
    }
}

/// ファイル一覧の1行
///
/// 行全体がキー。インデックスや名前だけでは別ファイルの行を使い回してしまう。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRowView {
    /// 削除ボタンが渡すインデックス
    pub index: usize,
    pub name: String,
    pub size_label: String,
    pub icon_class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsView {
    pub flashcards: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: crate::notifications::NotificationId,
    pub class: String,
    pub icon_class: &'static str,
    pub title: String,
    pub message: String,
}

impl From<&Notification> for NotificationView {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            class: format!("toast {}", notification.severity.as_str()),
            icon_class: notification.severity.icon_class(),
            title: notification.title.clone(),
            message: notification.message.clone(),
        }
    }
}
