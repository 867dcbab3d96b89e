//! Flashcard Common Library
//!
//! CLIとWeb(WASM)で共有されるコントローラ・型・ユーティリティ

pub mod controller;
pub mod error;
pub mod format;
pub mod notifications;
pub mod prompts;
pub mod selection;
pub mod submission;
pub mod types;
pub mod view;

pub use controller::Controller;
pub use error::{Error, Result};
pub use format::{format_file_size, FileKind, ACCEPT_ATTRIBUTE, ALLOWED_EXTENSIONS};
pub use notifications::{Notification, NotificationCenter, NotificationId, Severity, NOTIFICATION_LIFETIME};
pub use prompts::{PromptSettings, DEFAULT_PROMPT};
pub use selection::{AddFilesReport, SelectedFile, Selection};
pub use submission::{Completion, Progress, SubmissionPhase, RESULT_REVEAL_DELAY};
pub use types::{DownloadArtifact, ResultPayload, UploadRequest, DOWNLOAD_FILE_NAME, FILES_FIELD, PROCESS_FILES_PATH, PROMPT_FIELD};
pub use view::{FileRowView, NotificationView, Panel, ResultsView, ViewModel};
