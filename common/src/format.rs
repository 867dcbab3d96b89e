//! ファイル種別判定とサイズ表記
//!
//! - ALLOWED_EXTENSIONS: 受け付ける拡張子
//! - FileKind: 拡張子ごとのアイコン・MIMEタイプ
//! - format_file_size: 1024基準の人間向けサイズ表記

/// 受け付ける拡張子（小文字、ドットなし）
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

/// ファイル選択ダイアログの accept 属性
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.jpg,.jpeg,.png";

const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB"];

/// ファイル名の最後のドット区切りを小文字で返す
///
/// ドットを含まない名前は名前全体が拡張子として扱われる。
pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_lowercase()
}

/// 拡張子が許可リストに含まれるか
pub fn is_allowed_extension(ext: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

/// 表示用のファイル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
    Other,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileKind::Pdf,
            "jpg" | "jpeg" | "png" => FileKind::Image,
            _ => FileKind::Other,
        }
    }

    pub fn from_name(name: &str) -> Self {
        Self::from_extension(&extension_of(name))
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            FileKind::Pdf => "fas fa-file-pdf file-icon",
            FileKind::Image => "fas fa-file-image file-icon",
            FileKind::Other => "fas fa-file file-icon",
        }
    }

    /// multipartパートの Content-Type
    pub fn mime_type(name: &str) -> &'static str {
        match extension_of(name).as_str() {
            "pdf" => "application/pdf",
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            _ => "application/octet-stream",
        }
    }
}

/// バイト数を "1.5 KB" 形式に整形
///
/// 小数点以下は最大2桁で末尾の0は落とす。GBより大きい単位は使わない。
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_zero() {
        assert_eq!(format_file_size(0), "0 B");
    }

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(1), "1 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(500_000), "488.28 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_format_file_size_caps_at_gb() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("report.PDF"), "pdf");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("noext"), "noext");
        assert_eq!(extension_of("trailing."), "");
    }

    #[test]
    fn test_is_allowed_extension() {
        assert!(is_allowed_extension("pdf"));
        assert!(is_allowed_extension("JPEG"));
        assert!(is_allowed_extension("png"));
        assert!(!is_allowed_extension("gif"));
        assert!(!is_allowed_extension(""));
    }

    #[test]
    fn test_icon_class() {
        assert_eq!(FileKind::from_name("a.pdf").icon_class(), "fas fa-file-pdf file-icon");
        assert_eq!(FileKind::from_name("b.JPG").icon_class(), "fas fa-file-image file-icon");
        assert_eq!(FileKind::from_name("c.txt").icon_class(), "fas fa-file file-icon");
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(FileKind::mime_type("a.pdf"), "application/pdf");
        assert_eq!(FileKind::mime_type("b.jpeg"), "image/jpeg");
        assert_eq!(FileKind::mime_type("c.png"), "image/png");
        assert_eq!(FileKind::mime_type("d.bin"), "application/octet-stream");
    }
}
