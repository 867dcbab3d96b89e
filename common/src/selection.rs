//! 選択ファイルリスト
//!
//! 挿入順がそのまま表示順。同じ (name, size) の組は1件しか持たない。

use crate::error::{Error, Result};
use crate::format::{extension_of, is_allowed_extension, FileKind};

/// 選択されたファイル
///
/// `H` はホスト側のファイルハンドル（ブラウザでは `web_sys::File`、CLIではローカルパス）。
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<H> {
    pub name: String,
    pub size: u64,
    pub handle: H,
}

impl<H> SelectedFile<H> {
    pub fn new(name: impl Into<String>, size: u64, handle: H) -> Self {
        Self {
            name: name.into(),
            size,
            handle,
        }
    }

    pub fn extension(&self) -> String {
        extension_of(&self.name)
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_extension(&self.extension())
    }

    fn same_identity(&self, other: &Self) -> bool {
        self.name == other.name && self.size == other.size
    }
}

/// `add_files` の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFilesReport {
    pub accepted: usize,
    /// 拡張子で弾かれたファイル名（入力順）
    pub rejected: Vec<String>,
    pub duplicates: usize,
}

#[derive(Debug, Clone)]
pub struct Selection<H> {
    files: Vec<SelectedFile<H>>,
}

impl<H> Default for Selection<H> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<H> Selection<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 拡張子チェック → 重複除外 → 末尾に追加
    pub fn add_files(&mut self, candidates: impl IntoIterator<Item = SelectedFile<H>>) -> AddFilesReport {
        let mut report = AddFilesReport::default();

        for file in candidates {
            if !is_allowed_extension(&file.extension()) {
                tracing::warn!(name = %file.name, "unsupported file type rejected");
                report.rejected.push(file.name);
                continue;
            }

            if self.files.iter().any(|existing| existing.same_identity(&file)) {
                report.duplicates += 1;
                continue;
            }

            tracing::debug!(name = %file.name, size = file.size, "file accepted");
            self.files.push(file);
            report.accepted += 1;
        }

        if report.duplicates > 0 {
            tracing::info!(count = report.duplicates, "duplicate files skipped");
        }
        tracing::debug!(total = self.files.len(), "selection updated");
        report
    }

    /// インデックス指定で1件削除。範囲外はエラーでリストは変更しない
    pub fn remove(&mut self, index: usize) -> Result<SelectedFile<H>> {
        if index >= self.files.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.files.len(),
            });
        }
        let removed = self.files.remove(index);
        tracing::debug!(name = %removed.name, "file removed");
        Ok(removed)
    }

    /// 全件削除して削除件数を返す
    pub fn clear(&mut self) -> usize {
        let count = self.files.len();
        self.files.clear();
        tracing::debug!(count, "selection cleared");
        count
    }

    pub fn files(&self) -> &[SelectedFile<H>] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
