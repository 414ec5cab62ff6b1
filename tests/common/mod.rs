#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use scenelingo::lesson::{LessonContent, VocabularyItem};
use scenelingo::services::gemini::{parse_lesson, GenerationError, LessonGenerator};
use scenelingo::services::speech::{SpeechError, SpeechOutput, Utterance, Voice};

pub fn sample_lesson(topic: &str, words: usize) -> LessonContent {
    LessonContent {
        topic: topic.to_string(),
        words: (0..words)
            .map(|i| VocabularyItem {
                english: format!("term{i}"),
                local_translation: format!("词语{i}"),
                pronunciation: (i % 2 == 0).then(|| format!("tɜːm{i}")),
            })
            .collect(),
        narrative_text: "Please show term0 at the counter and check term1 before boarding.".to_string(),
        narrative_translation: "在柜台我出示了护照并托运了行李。".to_string(),
    }
}

pub fn sample_lesson_json(topic: &str, words: usize) -> String {
    serde_json::to_string(&sample_lesson(topic, words)).unwrap()
}

pub enum Script {
    Text(String),
    /// Handed back as-is, bypassing payload validation.
    Lesson(LessonContent),
    Fail,
    Hang,
}

/// Generator double that answers from a script and records every call.
#[derive(Default)]
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Script>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(script: impl IntoIterator<Item = Script>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl LessonGenerator for ScriptedGenerator {
    async fn generate_lesson(&self, scenario_name: &str) -> Result<LessonContent, GenerationError> {
        self.calls.lock().push(scenario_name.to_string());
        let next = self.script.lock().pop_front();
        match next {
            Some(Script::Text(text)) => parse_lesson(&text),
            Some(Script::Lesson(lesson)) => Ok(lesson),
            Some(Script::Fail) | None => Err(GenerationError::EmptyResponse),
            Some(Script::Hang) => std::future::pending().await,
        }
    }
}

/// Speech double; `speaking` stays true until `stop` is called.
#[derive(Default)]
pub struct RecordingSpeech {
    pub voices: Vec<Voice>,
    pub fail: bool,
    spoken: Mutex<Vec<Utterance>>,
    speaking: AtomicBool,
    stops: AtomicUsize,
}

impl RecordingSpeech {
    pub fn with_voices(voices: Vec<Voice>) -> Self {
        Self {
            voices,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.spoken.lock().clone()
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    /// Simulates the engine finishing an utterance on its own.
    pub fn finish(&self) {
        self.speaking.store(false, Ordering::SeqCst);
    }
}

impl SpeechOutput for RecordingSpeech {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&self, utterance: Utterance) -> Result<(), SpeechError> {
        if self.fail {
            return Err(SpeechError::Unavailable);
        }
        self.spoken.lock().push(utterance);
        self.speaking.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
        self.speaking.store(false, Ordering::SeqCst);
    }

    fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }
}

pub fn voice(name: &str, lang: &str) -> Voice {
    Voice {
        id: name.to_string(),
        name: name.to_string(),
        lang: lang.to_string(),
        gender: None,
    }
}
