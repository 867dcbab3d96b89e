//! プロンプト管理モジュール
//!
//! CLIとWeb(WASM)で共有されるプロンプト関連:
//! - DEFAULT_PROMPT: サーバー既定と同じフラッシュカード生成プロンプト
//! - PromptSettings: 詳細設定パネルの状態（編集中プロンプト、開閉）

/// フラッシュカード生成の既定プロンプト
pub const DEFAULT_PROMPT: &str = r#"Create a comprehensive set of study flashcards covering all the content in this document.

Break content into Objects - identify all significant concepts, systems, processes or terms. Be thorough and fine-grained with your object identification but each object should still be a discrete THING (Noun). Group related objects together in logical sections when possible.

Question Formatting:

Structure your output as follows:

## [Object Name]

* [Question] == [Answer]
* [Question] == [Answer]
* [Question] == [Answer]

Question Construction RULES:

1. RULE 1 - ATOMIC: Each question should target the smallest meaningful unit of knowledge

2. RULE 2 - DETERMINISTIC: Questions should clearly point to a single specific answer. The answers should be VERY clear from the questions.

After following these rules, ensure your questions collectively cover ALL information in the document. A person who memorizes all answers should understand EVERYTHING in the document. ALL of the information in the document should be turned into questions.

Output Format:

* Use proper Markdown formatting
* Create MANY flashcards - as many as needed to cover everything in the document
* Output only the flashcards and nothing else.
"#;

/// 詳細設定パネルの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSettings {
    baseline: String,
    current: String,
    expanded: bool,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT)
    }
}

impl PromptSettings {
    /// 起動時のプロンプトを基準値として記録する
    pub fn new(baseline: impl Into<String>) -> Self {
        let baseline = baseline.into();
        Self {
            current: baseline.clone(),
            baseline,
            expanded: false,
        }
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.current = text.into();
    }

    /// 基準値に戻す
    pub fn reset(&mut self) {
        self.current = self.baseline.clone();
    }

    /// 前後の空白を除いて基準値と異なるか
    pub fn is_customized(&self) -> bool {
        self.current.trim() != self.baseline.trim()
    }

    /// 送信するプロンプト。空または未変更なら None（サーバー既定を使う）
    pub fn custom_prompt(&self) -> Option<String> {
        let trimmed = self.current.trim();
        if trimmed.is_empty() || !self.is_customized() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// 開閉を切り替えて新しい状態を返す
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}
