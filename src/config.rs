use crate::services::gemini::GeminiConfig;

const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_SPEECH_COMMAND: &str = "espeak-ng";
const DEFAULT_SPEECH_LANGUAGE: &str = "en";
const DEFAULT_SPEECH_REGION: &str = "en-GB";

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// `None` disables speech output.
    pub speech_command: Option<String>,
    pub speech_language: String,
    pub speech_region: String,
    pub gemini: GeminiConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini: GeminiConfig::from_env(),
            ..Self::from_lookup(|key| std::env::var(key).ok())
        }
    }

    /// Reads the terminal settings through `lookup`; the generation client
    /// keeps its defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_level = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let speech_command = match lookup("SPEECH_COMMAND") {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value.trim().to_string()),
            None => Some(DEFAULT_SPEECH_COMMAND.to_string()),
        };

        Self {
            log_level,
            speech_command,
            speech_language: non_blank("SPEECH_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_SPEECH_LANGUAGE.to_string()),
            speech_region: non_blank("SPEECH_REGION")
                .unwrap_or_else(|| DEFAULT_SPEECH_REGION.to_string()),
            gemini: GeminiConfig::default(),
        }
    }
}
