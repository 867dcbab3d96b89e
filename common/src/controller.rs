//! アップロード・結果確認コントローラ
//!
//! 選択リスト、送信中フラグ、表示パネル、結果テキスト、プロンプト設定、通知を
//! ひとつの値として持つ。ホスト（ブラウザ/CLI）は操作メソッドを呼び、
//! 変更のたびに `render` の結果で画面を作り直す。
//!
//! 送信は3段階で進める:
//! 1. `begin_submission` で送信内容を受け取る
//! 2. 送信したら `mark_dispatched`
//! 3. 応答または通信エラーを `complete` に渡す（送信中フラグは必ず解除される）

use std::ops::Range;

use crate::error::Result;
use crate::format::format_file_size;
use crate::notifications::{NotificationCenter, NotificationId, Severity};
use crate::prompts::PromptSettings;
use crate::selection::{AddFilesReport, SelectedFile, Selection};
use crate::submission::{Completion, Progress, SubmissionPhase, RESULT_REVEAL_DELAY};
use crate::types::{DownloadArtifact, ResultPayload, UploadRequest, DOWNLOAD_FILE_NAME};
use crate::view::{FileRowView, NotificationView, Panel, ResultsView, ViewModel};

#[derive(Debug, Clone)]
pub struct Controller<H> {
    selection: Selection<H>,
    phase: SubmissionPhase,
    processing: bool,
    panel: Panel,
    progress: Progress,
    pending_result: Option<ResultPayload>,
    results_text: String,
    results_summary: String,
    prompt: PromptSettings,
    notifications: NotificationCenter,
}

impl<H> Controller<H> {
    /// 起動時に1度だけ作る。`baseline_prompt` がカスタマイズ判定の基準になる
    pub fn new(baseline_prompt: impl Into<String>) -> Self {
        Self {
            selection: Selection::new(),
            phase: SubmissionPhase::Idle,
            processing: false,
            panel: Panel::Selection,
            progress: Progress::UPLOADING,
            pending_result: None,
            results_text: String::new(),
            results_summary: String::new(),
            prompt: PromptSettings::new(baseline_prompt),
            notifications: NotificationCenter::new(),
        }
    }

    // ============================================
    // 選択ファイル
    // ============================================

    /// ファイルを追加し、不正な拡張子・重複を通知する
    pub fn add_files(&mut self, candidates: impl IntoIterator<Item = SelectedFile<H>>) -> AddFilesReport {
        let report = self.selection.add_files(candidates);

        for name in &report.rejected {
            self.notifications.push(
                Severity::Error,
                "Invalid file",
                format!("{} is not a supported file type.", name),
            );
        }

        if report.duplicates > 0 {
            self.notifications.push(
                Severity::Info,
                "Duplicates skipped",
                format!("{} duplicate files were skipped.", report.duplicates),
            );
        }

        report
    }

    pub fn remove_file(&mut self, index: usize) -> Result<SelectedFile<H>> {
        self.selection.remove(index)
    }

    pub fn clear_files(&mut self) -> usize {
        self.selection.clear()
    }

    pub fn selection(&self) -> &Selection<H> {
        &self.selection
    }

    // ============================================
    // 送信ワークフロー
    // ============================================

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// 送信を開始して送信内容を返す
    ///
    /// 0件・送信中・結果表示待ちなら何もせず None。
    pub fn begin_submission(&mut self) -> Option<UploadRequest<H>>
    where
        H: Clone,
    {
        if self.selection.is_empty() || self.processing || self.pending_result.is_some() {
            tracing::debug!(
                count = self.selection.len(),
                processing = self.processing,
                reveal_pending = self.pending_result.is_some(),
                "submission rejected by entry guard"
            );
            return None;
        }

        self.processing = true;
        self.phase = SubmissionPhase::Uploading;
        self.panel = Panel::Progress;
        self.progress = Progress::UPLOADING;
        self.pending_result = None;

        let prompt = self.prompt.custom_prompt();
        tracing::info!(
            files = self.selection.len(),
            custom_prompt = prompt.is_some(),
            "starting file processing"
        );

        Some(UploadRequest {
            files: self.selection.files().to_vec(),
            prompt,
        })
    }

    /// リクエスト送信済み。応答待ちに進む
    pub fn mark_dispatched(&mut self) {
        if self.phase != SubmissionPhase::Uploading {
            return;
        }
        self.phase = SubmissionPhase::AwaitingResult;
        self.progress = Progress::PROCESSING;
    }

    /// 応答（または通信エラーの文言）を反映する
    ///
    /// どの分岐でも送信中フラグを解除して Idle に戻る。
    pub fn complete(&mut self, outcome: std::result::Result<ResultPayload, String>) -> Completion {
        if !self.phase.is_in_flight() {
            tracing::warn!(phase = self.phase.as_str(), "completion without an outstanding request ignored");
            return Completion::Ignored;
        }

        let completion = match outcome {
            Ok(payload) if payload.success => {
                self.phase = SubmissionPhase::Succeeded;
                self.progress = Progress::COMPLETE;
                tracing::info!(
                    processed = payload.processed_files,
                    total = payload.total_files,
                    "processing completed"
                );
                self.pending_result = Some(payload);
                Completion::RevealAfter(RESULT_REVEAL_DELAY)
            }
            Ok(payload) => {
                self.fail(payload.failure_message());
                Completion::Failed
            }
            Err(transport) => {
                self.fail(transport);
                Completion::Failed
            }
        };

        self.processing = false;
        self.phase = SubmissionPhase::Idle;
        completion
    }

    fn fail(&mut self, message: String) {
        self.phase = SubmissionPhase::Failed;
        tracing::error!(error = %message, "processing failed");
        self.panel = Panel::Selection;
        self.notifications.push(Severity::Error, "Processing failed", message);
    }

    /// 成功結果を結果パネルに出す。保留中の結果がなければ false
    pub fn reveal_results(&mut self) -> bool {
        let Some(payload) = self.pending_result.take() else {
            return false;
        };

        self.panel = Panel::Results;
        self.results_text = payload.flashcards.clone();
        self.results_summary = payload.summary();
        tracing::debug!(chars = self.results_text.len(), "results revealed");
        self.notifications.push(Severity::Success, "Success!", payload.message);
        true
    }

    /// 選択・結果・パネルを初期状態に戻す
    pub fn start_new_batch(&mut self) {
        self.selection.clear();
        self.pending_result = None;
        self.results_text.clear();
        self.results_summary.clear();
        self.panel = Panel::Selection;
        self.progress = Progress::UPLOADING;
        tracing::info!("new batch started");
    }

    // ============================================
    // 結果操作
    // ============================================

    pub fn results_text(&self) -> &str {
        &self.results_text
    }

    /// 結果エディタでの編集を反映
    pub fn edit_results(&mut self, text: impl Into<String>) {
        self.results_text = text.into();
    }

    /// クリップボードへコピーする全文
    pub fn copy_results(&self) -> &str {
        &self.results_text
    }

    pub fn mark_copied(&mut self) -> NotificationId {
        self.notifications
            .push(Severity::Success, "Copied!", "Flashcards copied to clipboard.")
    }

    pub fn results_download(&self) -> DownloadArtifact {
        DownloadArtifact {
            file_name: DOWNLOAD_FILE_NAME,
            mime_type: "text/plain",
            contents: self.results_text.clone(),
        }
    }

    pub fn mark_downloaded(&mut self) -> NotificationId {
        self.mark_saved("downloads")
    }

    /// 保存先を指定して保存完了を通知する
    pub fn mark_saved(&mut self, location: impl std::fmt::Display) -> NotificationId {
        self.notifications
            .push(Severity::Success, "Downloaded!", format!("Flashcards saved to {}.", location))
    }

    /// 全選択の範囲（UTF-16単位。textarea の selection range と同じ単位）
    pub fn select_all_results(&self) -> Range<usize> {
        0..self.results_text.encode_utf16().count()
    }

    // ============================================
    // 詳細設定
    // ============================================

    pub fn prompt(&self) -> &PromptSettings {
        &self.prompt
    }

    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.prompt.set(text);
    }

    pub fn toggle_advanced(&mut self) -> bool {
        self.prompt.toggle()
    }

    pub fn reset_prompt(&mut self) -> NotificationId {
        self.prompt.reset();
        self.notifications
            .push(Severity::Success, "Prompt reset", "AI prompt has been reset to default.")
    }

    // ============================================
    // 通知
    // ============================================

    pub fn notify(
        &mut self,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> NotificationId {
        self.notifications.push(severity, title, message)
    }

    /// 通知を閉じる。既に閉じていれば false
    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    /// 自動消去タイマー未予約の通知ID
    pub fn take_unscheduled_notifications(&mut self) -> Vec<NotificationId> {
        self.notifications.take_unscheduled()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    // ============================================
    // 描画
    // ============================================

    /// 現在の状態から表示内容を作る
    pub fn render(&self) -> ViewModel {
        let has_files = !self.selection.is_empty();
        let on_selection = self.panel == Panel::Selection;
        let controls_enabled = has_files && !self.processing && self.pending_result.is_none();

        let files = self
            .selection
            .files()
            .iter()
            .enumerate()
            .map(|(index, file)| FileRowView {
                index,
                name: file.name.clone(),
                size_label: format_file_size(file.size),
                icon_class: file.kind().icon_class(),
            })
            .collect();

        let results = (self.panel == Panel::Results).then(|| ResultsView {
            flashcards: self.results_text.clone(),
            summary: self.results_summary.clone(),
        });

        ViewModel {
            upload_prompt_visible: on_selection && !has_files,
            file_list_visible: on_selection && has_files,
            progress: (self.panel == Panel::Progress).then_some(self.progress),
            results,
            files,
            submit_enabled: controls_enabled,
            clear_enabled: controls_enabled,
            is_processing: self.processing,
            advanced_expanded: self.prompt.is_expanded(),
            prompt_text: self.prompt.current().to_string(),
            prompt_customized: self.prompt.is_customized(),
            notifications: self.notifications.visible().iter().map(NotificationView::from).collect(),
        }
    }
}
