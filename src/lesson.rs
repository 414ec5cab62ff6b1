use serde::{Deserialize, Serialize};

/// Tokens at or below this length are never highlighted.
const MIN_HIGHLIGHT_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub english: String,
    #[serde(rename = "chinese")]
    pub local_translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

/// One generated lesson. Field names on the wire follow the generation schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContent {
    pub topic: String,
    pub words: Vec<VocabularyItem>,
    #[serde(rename = "connectedText")]
    pub narrative_text: String,
    #[serde(rename = "translation")]
    pub narrative_translation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrativeSegment<'a> {
    pub text: &'a str,
    pub is_vocabulary: bool,
}

impl LessonContent {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Splits the narrative into alternating word and whitespace runs, marking
    /// the runs that contain (or are contained in) a vocabulary entry.
    /// Concatenating every segment reproduces the narrative exactly.
    pub fn highlight_segments(&self) -> Vec<NarrativeSegment<'_>> {
        let vocabulary: Vec<String> = self
            .words
            .iter()
            .map(|w| w.english.to_lowercase())
            .collect();

        split_keep_whitespace(&self.narrative_text)
            .into_iter()
            .map(|text| NarrativeSegment {
                text,
                is_vocabulary: is_vocabulary_token(text, &vocabulary),
            })
            .collect()
    }
}

fn is_vocabulary_token(token: &str, vocabulary: &[String]) -> bool {
    let trimmed = token.trim();
    if trimmed.chars().count() <= MIN_HIGHLIGHT_LEN {
        return false;
    }
    let lowered = trimmed.to_lowercase();
    vocabulary
        .iter()
        .any(|word| lowered.contains(word.as_str()) || word.contains(lowered.as_str()))
}

fn split_keep_whitespace(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                parts.push(&text[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < text.len() {
        parts.push(&text[start..]);
    }
    parts
}
