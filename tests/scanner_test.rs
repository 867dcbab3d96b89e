//! ファイル収集テスト
//!
//! フォルダ走査と引数展開の動作を検証

use flashcard_common::{Controller, DEFAULT_PROMPT};
use flashcard_gen::scanner;
use std::fs;
use tempfile::tempdir;

/// 直下のみ走査（デフォルト）
#[test]
fn test_scan_top_level_only() {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("a.pdf"), b"pdf").unwrap();
    fs::create_dir(dir.path().join("chapter2")).unwrap();
    fs::write(dir.path().join("chapter2").join("b.png"), b"png").unwrap();

    let files = scanner::scan_folder(dir.path(), false).unwrap();
    let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.pdf"]);
}

/// サブフォルダも再帰的に走査
#[test]
fn test_scan_recursive() {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("a.pdf"), b"pdf").unwrap();
    fs::create_dir_all(dir.path().join("chapter2").join("figures")).unwrap();
    fs::write(dir.path().join("chapter2").join("b.png"), b"png").unwrap();
    fs::write(dir.path().join("chapter2").join("figures").join("c.JPG"), b"jpg").unwrap();
    fs::write(dir.path().join("chapter2").join("notes.md"), b"md").unwrap();

    let files = scanner::scan_folder(dir.path(), true).unwrap();
    let mut names: Vec<_> = files.iter().map(|f| f.name.clone()).collect();
    names.sort();
    assert_eq!(names, vec!["a.pdf", "b.png", "c.JPG"]);
}

/// 明示したファイルは拡張子に関係なく候補にし、コントローラが弾く
#[test]
fn test_explicit_files_are_validated_by_controller() {
    let dir = tempdir().expect("Failed to create temp dir");
    let pdf = dir.path().join("lecture.pdf");
    let txt = dir.path().join("notes.txt");
    fs::write(&pdf, vec![0u8; 1536]).unwrap();
    fs::write(&txt, b"plain").unwrap();

    let candidates = scanner::collect_inputs(&[pdf.clone(), txt], false).unwrap();
    assert_eq!(candidates.len(), 2);

    let mut controller = Controller::new(DEFAULT_PROMPT);
    let report = controller.add_files(candidates);
    assert_eq!(report.accepted, 1);
    assert_eq!(report.rejected, vec!["notes.txt".to_string()]);

    let view = controller.render();
    assert_eq!(view.files[0].name, "lecture.pdf");
    assert_eq!(view.files[0].size_label, "1.5 KB");
    assert_eq!(controller.selection().files()[0].handle, pdf);
}

/// フォルダとファイルの混在、同じファイルの二重指定は重複として除外
#[test]
fn test_mixed_inputs_and_duplicates() {
    let dir = tempdir().expect("Failed to create temp dir");
    let pdf = dir.path().join("a.pdf");
    fs::write(&pdf, b"pdf").unwrap();
    fs::write(dir.path().join("b.png"), b"png").unwrap();

    let candidates = scanner::collect_inputs(&[dir.path().to_path_buf(), pdf], false).unwrap();
    assert_eq!(candidates.len(), 3);

    let mut controller = Controller::new(DEFAULT_PROMPT);
    let report = controller.add_files(candidates);
    assert_eq!(report.accepted, 2);
    assert_eq!(report.duplicates, 1);
}
