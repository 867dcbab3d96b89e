//! 送信ワークフローの状態
//!
//! Idle → Uploading → AwaitingResult → {Succeeded | Failed} → Idle
//!
//! 進捗率は見た目だけの値で、サーバー側の処理段階とは対応しない。

use std::time::Duration;

/// 成功表示から結果パネルを出すまでの待ち時間
pub const RESULT_REVEAL_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Uploading,
    AwaitingResult,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Uploading => "uploading",
            SubmissionPhase::AwaitingResult => "awaiting_result",
            SubmissionPhase::Succeeded => "succeeded",
            SubmissionPhase::Failed => "failed",
        }
    }

    /// リクエストが未完了か
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionPhase::Uploading | SubmissionPhase::AwaitingResult)
    }
}

/// プログレスバーの表示値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub percent: u8,
    pub label: &'static str,
}

impl Progress {
    pub const UPLOADING: Progress = Progress {
        percent: 10,
        label: "Uploading files...",
    };
    pub const PROCESSING: Progress = Progress {
        percent: 50,
        label: "Processing with AI...",
    };
    pub const COMPLETE: Progress = Progress {
        percent: 100,
        label: "Complete!",
    };

    /// 0.0〜1.0 の比率
    pub fn fraction(&self) -> f32 {
        f32::from(self.percent) / 100.0
    }
}

/// `Controller::complete` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// 成功。指定時間後に `reveal_results` を呼ぶ
    RevealAfter(Duration),
    /// 失敗。エラー通知は出済み
    Failed,
    /// 送信中でなかったので無視した
    Ignored,
}
