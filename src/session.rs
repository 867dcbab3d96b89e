//! CLIセッション
//!
//! ブラウザ版と同じ `Controller` をターミナルから動かす:
//! ファイル追加 → （任意で対話的に除外）→ 送信 → 結果の保存・表示。
//! 通知は出た順に標準エラーへ表示して閉じる。標準出力はフラッシュカード本文専用。

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dialoguer::MultiSelect;
use flashcard_common::{
    AddFilesReport, Completion, Controller, Notification, Progress, Severity, DEFAULT_PROMPT,
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::client::ProcessingClient;
use crate::error::{FlashcardError, Result};
use crate::scanner::LocalFile;

pub struct Session {
    controller: Controller<PathBuf>,
    client: ProcessingClient,
    show_progress: bool,
    history: Vec<Notification>,
}

impl Session {
    pub fn new(client: ProcessingClient) -> Self {
        Self {
            controller: Controller::new(DEFAULT_PROMPT),
            client,
            show_progress: true,
            history: Vec::new(),
        }
    }

    /// プログレスバーを表示しない（テスト・パイプ出力用）
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn controller(&self) -> &Controller<PathBuf> {
        &self.controller
    }

    /// これまでに表示した通知
    pub fn history(&self) -> &[Notification] {
        &self.history
    }

    pub fn add_files(&mut self, files: Vec<LocalFile>) -> AddFilesReport {
        let report = self.controller.add_files(files);
        self.flush_notifications();
        report
    }

    pub fn set_prompt(&mut self, prompt: String) {
        self.controller.set_prompt(prompt);
    }

    pub fn remove_file(&mut self, index: usize) -> Result<LocalFile> {
        Ok(self.controller.remove_file(index)?)
    }

    /// 選択中のファイルから除外するものを対話的に選ぶ
    pub fn review_interactively(&mut self) -> Result<()> {
        let labels: Vec<String> = self
            .controller
            .render()
            .files
            .iter()
            .map(|row| format!("{} ({})", row.name, row.size_label))
            .collect();

        if labels.is_empty() {
            return Ok(());
        }

        let mut excluded = MultiSelect::new()
            .with_prompt("除外するファイルを選択 (Space:選択 Enter:確定)")
            .items(labels.as_slice())
            .interact()
            .map_err(|e| FlashcardError::Interactive(e.to_string()))?;

        // 後ろから消せばインデックスはずれない
        excluded.sort_unstable_by(|a, b| b.cmp(a));
        for index in excluded {
            let removed = self.remove_file(index)?;
            eprintln!("- 除外: {}", removed.name);
        }
        Ok(())
    }

    /// 選択中のファイルを送信し、成功したらフラッシュカード本文を返す
    pub async fn submit(&mut self) -> Result<String> {
        let Some(request) = self.controller.begin_submission() else {
            return Err(FlashcardError::NoFilesSelected);
        };

        let bar = self.progress_bar();
        Self::show_stage(&bar, Progress::UPLOADING);

        let outcome = match ProcessingClient::build_form(&request).await {
            Ok(form) => {
                self.controller.mark_dispatched();
                Self::show_stage(&bar, Progress::PROCESSING);
                self.client.send_form(form).await.map_err(|e| e.to_string())
            }
            Err(e) => Err(e.to_string()),
        };

        let completion = self.controller.complete(outcome);
        let result = match completion {
            Completion::RevealAfter(delay) => {
                Self::show_stage(&bar, Progress::COMPLETE);
                tokio::time::sleep(delay).await;
                bar.finish_and_clear();
                self.controller.reveal_results();
                Ok(self.controller.results_text().to_string())
            }
            Completion::Failed | Completion::Ignored => {
                bar.finish_and_clear();
                let message = self
                    .controller
                    .notifications()
                    .visible()
                    .iter()
                    .rev()
                    .find(|n| n.severity == Severity::Error)
                    .map(|n| n.message.clone())
                    .unwrap_or_else(|| "Processing failed".to_string());
                Err(FlashcardError::Processing(message))
            }
        };

        if let Some(results) = self.controller.render().results {
            eprintln!("✔ {}", results.summary);
        }
        self.flush_notifications();
        result
    }

    /// 結果を flashcards.txt 形式で保存する
    pub fn save_results(&mut self, path: &Path) -> Result<()> {
        let artifact = self.controller.results_download();
        std::fs::write(path, artifact.contents)?;
        self.controller.mark_saved(path.display());
        tracing::info!(path = %path.display(), "flashcards saved");
        self.flush_notifications();
        Ok(())
    }

    /// 結果を標準出力へ書き出す
    pub fn print_results(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_results(&mut out)
    }

    /// 結果本文だけを書き出す。通知は標準エラー側
    pub fn write_results(&mut self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.controller.copy_results())?;
        out.flush()?;
        self.controller
            .notify(Severity::Success, "Printed!", "Flashcards written to standard output.");
        self.flush_notifications();
        Ok(())
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(100);
        let style = ProgressStyle::with_template("{spinner} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(120));
        bar
    }

    fn show_stage(bar: &ProgressBar, progress: Progress) {
        bar.set_position(u64::from(progress.percent));
        bar.set_message(progress.label);
    }

    /// 溜まった通知を表示して閉じる
    fn flush_notifications(&mut self) {
        for id in self.controller.take_unscheduled_notifications() {
            let Some(notification) = self.controller.notifications().get(id).cloned() else {
                continue;
            };
            print_notification(&notification);
            self.controller.dismiss_notification(id);
            self.history.push(notification);
        }
    }
}

fn print_notification(notification: &Notification) {
    let marker = match notification.severity {
        Severity::Success => "✔",
        Severity::Error => "❌",
        Severity::Warning => "⚠",
        Severity::Info => "ℹ",
    };
    if notification.message.is_empty() {
        eprintln!("{} {}", marker, notification.title);
    } else {
        eprintln!("{} {}: {}", marker, notification.title, notification.message);
    }
}
