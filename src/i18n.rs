//! Localized strings for picklab
//!
//! Lookup goes through `t(language, key)`; unknown languages never reach here
//! because `Language` is closed.

use serde::Deserialize;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a language code such as `en` or `zh-CN`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_', '.']).next().unwrap_or(code);
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary))
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    PickerTitle,
    NameButtonLabel,
    HintNavigate,
    HintSelect,
    HintClose,
    HintOpen,
    HintQuit,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    match lang {
        Language::English => match key {
            Key::PickerTitle => "Name",
            Key::NameButtonLabel => "Name Picker",
            Key::HintNavigate => " navigate · ",
            Key::HintSelect => " select · ",
            Key::HintClose => " close",
            Key::HintOpen => " choose name · ",
            Key::HintQuit => " quit",
        },
        Language::Chinese => match key {
            Key::PickerTitle => "名字",
            Key::NameButtonLabel => "名字选择器",
            Key::HintNavigate => " 移动 · ",
            Key::HintSelect => " 选择 · ",
            Key::HintClose => " 关闭",
            Key::HintOpen => " 选择名字 · ",
            Key::HintQuit => " 退出",
        },
    }
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}
