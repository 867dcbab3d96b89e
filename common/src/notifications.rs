//! 通知（トースト）管理
//!
//! 通知はIDで識別され、ホスト側が `NOTIFICATION_LIFETIME` 後に `dismiss` を予約する。
//! 手動で閉じた通知への二重削除は `dismiss` が false を返すことで防ぐ。

use std::time::Duration;

/// 自動で閉じるまでの表示時間
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(5);

/// 通知ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

/// 通知の重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Severity::Success => "fas fa-check-circle",
            Severity::Error => "fas fa-exclamation-circle",
            Severity::Warning => "fas fa-exclamation-triangle",
            Severity::Info => "fas fa-info-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

/// 表示中の通知スタック
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    next_id: u64,
    visible: Vec<Notification>,
    unscheduled: Vec<NotificationId>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 通知を追加してIDを返す（件数の上限なし）
    pub fn push(
        &mut self,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        let notification = Notification {
            id,
            severity,
            title: title.into(),
            message: message.into(),
        };
        tracing::debug!(id = id.0, severity = severity.as_str(), title = %notification.title, "notification pushed");
        self.visible.push(notification);
        self.unscheduled.push(id);
        id
    }

    /// 通知を閉じる。既に閉じられていれば false
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.unscheduled.retain(|pending| *pending != id);
        match self.visible.iter().position(|n| n.id == id) {
            Some(pos) => {
                self.visible.remove(pos);
                true
            }
            None => false,
        }
    }

    /// まだ自動消去タイマーを予約していない通知IDを取り出す
    pub fn take_unscheduled(&mut self) -> Vec<NotificationId> {
        std::mem::take(&mut self.unscheduled)
    }

    pub fn visible(&self) -> &[Notification] {
        &self.visible
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.visible.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
