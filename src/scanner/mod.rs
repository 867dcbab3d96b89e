use crate::error::{FlashcardError, Result};
use flashcard_common::format::{extension_of, is_allowed_extension};
use flashcard_common::SelectedFile;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// CLIで選択するファイル（ハンドルはローカルパス）
pub type LocalFile = SelectedFile<PathBuf>;

/// ファイルパスから選択候補を作る
pub fn local_file(path: &Path) -> Result<LocalFile> {
    if !path.is_file() {
        return Err(FlashcardError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let size = std::fs::metadata(path)?.len();

    Ok(SelectedFile::new(name, size, path.to_path_buf()))
}

/// フォルダ内の対応ファイル（PDF/JPEG/PNG）を集める
///
/// `recursive` が false なら直下のみ。結果はパス順。
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<LocalFile>> {
    if !folder.is_dir() {
        return Err(FlashcardError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut paths = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name.contains('.') && is_allowed_extension(&extension_of(&name)) {
            paths.push(path.to_path_buf());
        }
    }

    paths.sort();
    paths.iter().map(|p| local_file(p)).collect()
}

/// コマンドライン引数のパスを選択候補に展開する
///
/// ファイルはそのまま渡し（拡張子チェックはコントローラ側）、フォルダは対応ファイルだけを集める。
pub fn collect_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<LocalFile>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let found = scan_folder(input, recursive)?;
            tracing::debug!(folder = %input.display(), count = found.len(), "folder scanned");
            files.extend(found);
        } else {
            files.push(local_file(input)?);
        }
    }

    Ok(files)
}
