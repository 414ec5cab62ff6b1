pub mod gemini;
pub mod speech;

pub use gemini::{GeminiClient, GeminiConfig, GenerationError, LessonGenerator};
pub use speech::{CommandSpeech, NullSpeech, SpeechError, SpeechOutput, Voice, VoiceSelector};
