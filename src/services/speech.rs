use std::io;
use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

/// Learner-friendly speaking rate.
pub const DEFAULT_RATE: f32 = 0.85;
const KNOWN_MALE_PITCH: f32 = 0.9;
const FALLBACK_PITCH: f32 = 0.8;
const NEUTRAL_PITCH: f32 = 1.0;

const ESPEAK_PITCH_BASE: f32 = 50.0;
const ESPEAK_WPM_BASE: f32 = 175.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceGender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Identifier the engine accepts when asked for this voice.
    pub id: String,
    pub name: String,
    pub lang: String,
    pub gender: Option<VoiceGender>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<Voice>,
    pub pitch: f32,
    pub rate: f32,
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech output unavailable")]
    Unavailable,
    #[error("failed to start speech engine: {0}")]
    Spawn(#[source] io::Error),
}

/// Platform speech collaborator. Playback is fire-and-forget.
pub trait SpeechOutput: Send + Sync {
    fn voices(&self) -> Vec<Voice>;

    fn speak(&self, utterance: Utterance) -> Result<(), SpeechError>;

    /// Stops the current utterance and anything pending.
    fn stop(&self);

    fn is_speaking(&self) -> bool;
}

impl<T: SpeechOutput + ?Sized> SpeechOutput for Box<T> {
    fn voices(&self) -> Vec<Voice> {
        (**self).voices()
    }

    fn speak(&self, utterance: Utterance) -> Result<(), SpeechError> {
        (**self).speak(utterance)
    }

    fn stop(&self) {
        (**self).stop()
    }

    fn is_speaking(&self) -> bool {
        (**self).is_speaking()
    }
}

type VoicePredicate = Box<dyn Fn(&Voice) -> bool + Send + Sync>;

pub struct VoiceRule {
    label: &'static str,
    matches: VoicePredicate,
}

impl std::fmt::Debug for VoiceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceRule").field("label", &self.label).finish()
    }
}

/// Ordered voice preferences; the first rule with any matching voice wins.
#[derive(Debug, Default)]
pub struct VoiceSelector {
    rules: Vec<VoiceRule>,
}

impl VoiceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(
        mut self,
        label: &'static str,
        matches: impl Fn(&Voice) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(VoiceRule {
            label,
            matches: Box::new(matches),
        });
        self
    }

    /// Named high-quality male voices, then any male voice in `language`,
    /// then the `region` locale, then anything in the `language` family.
    pub fn preferred_male(language: &str, region: &str) -> Self {
        let family = language.to_ascii_lowercase();
        let family_for_male = family.clone();
        let region = region.to_ascii_lowercase();

        Self::new()
            .with_rule("google-uk-male", |v| v.name.contains("Google UK English Male"))
            .with_rule("daniel", |v| v.name == "Daniel")
            .with_rule("microsoft-david", |v| v.name.contains("Microsoft David"))
            .with_rule("family-male", move |v| {
                in_family(&v.lang, &family_for_male) && is_tagged_male(v)
            })
            .with_rule("region", move |v| v.lang.to_ascii_lowercase() == region)
            .with_rule("family", move |v| in_family(&v.lang, &family))
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.label).collect()
    }

    pub fn select<'a>(&self, voices: &'a [Voice]) -> Option<&'a Voice> {
        self.rules.iter().find_map(|rule| {
            let found = voices.iter().find(|v| (rule.matches)(v));
            if let Some(voice) = found {
                debug!(rule = rule.label, voice = %voice.name, "voice selected");
            }
            found
        })
    }

    /// Builds an utterance with the selected voice and matching pitch.
    pub fn utterance(&self, text: &str, voices: &[Voice]) -> Utterance {
        let voice = self.select(voices).cloned();
        let pitch = match &voice {
            Some(v) if is_known_male(v) => KNOWN_MALE_PITCH,
            Some(_) => FALLBACK_PITCH,
            None => NEUTRAL_PITCH,
        };
        Utterance {
            text: text.to_string(),
            voice,
            pitch,
            rate: DEFAULT_RATE,
        }
    }
}

fn in_family(lang: &str, family: &str) -> bool {
    lang.to_ascii_lowercase().starts_with(family)
}

fn is_tagged_male(voice: &Voice) -> bool {
    voice.gender == Some(VoiceGender::Male)
        || voice
            .name
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| word == "male")
}

fn is_known_male(voice: &Voice) -> bool {
    let named = ["Male", "Daniel", "David"]
        .iter()
        .any(|marker| voice.name.contains(marker));
    (named && !voice.name.contains("Female")) || voice.gender == Some(VoiceGender::Male)
}

/// Used when no speech engine is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeech;

impl SpeechOutput for NullSpeech {
    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    fn speak(&self, _utterance: Utterance) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable)
    }

    fn stop(&self) {}

    fn is_speaking(&self) -> bool {
        false
    }
}

/// Speaks through an espeak-compatible command line engine, one child process
/// per utterance.
#[derive(Debug)]
pub struct CommandSpeech {
    program: String,
    voices: OnceLock<Vec<Voice>>,
    current: Mutex<Option<Child>>,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            voices: OnceLock::new(),
            current: Mutex::new(None),
        }
    }

    /// Lists the engine's voices now instead of on first playback. Blocks on
    /// the engine process; returns the number of voices found.
    pub fn preload_voices(&self) -> usize {
        self.voices.get_or_init(|| self.discover_voices()).len()
    }

    fn discover_voices(&self) -> Vec<Voice> {
        match Command::new(&self.program)
            .arg("--voices")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) if output.status.success() => {
                parse_espeak_voices(&String::from_utf8_lossy(&output.stdout))
            }
            Ok(output) => {
                warn!(program = %self.program, status = ?output.status, "voice listing failed");
                Vec::new()
            }
            Err(err) => {
                warn!(program = %self.program, error = %err, "speech engine not found");
                Vec::new()
            }
        }
    }
}

impl SpeechOutput for CommandSpeech {
    fn voices(&self) -> Vec<Voice> {
        self.voices.get_or_init(|| self.discover_voices()).clone()
    }

    fn speak(&self, utterance: Utterance) -> Result<(), SpeechError> {
        self.stop();

        let mut command = Command::new(&self.program);
        if let Some(voice) = &utterance.voice {
            command.arg("-v").arg(&voice.id);
        }
        command
            .arg("-p")
            .arg(espeak_pitch(utterance.pitch).to_string())
            .arg("-s")
            .arg(espeak_rate(utterance.rate).to_string())
            .arg(engine_text(&utterance.text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = command.spawn().map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => SpeechError::Unavailable,
            _ => SpeechError::Spawn(err),
        })?;
        debug!(pid = child.id(), chars = utterance.text.len(), "speech started");
        *self.current.lock() = Some(child);
        Ok(())
    }

    fn stop(&self) {
        let running = self.current.lock().take();
        if let Some(mut child) = running {
            if let Err(err) = child.kill() {
                debug!(error = %err, "speech process already finished");
            }
            let _ = child.wait();
        }
    }

    fn is_speaking(&self) -> bool {
        let mut guard = self.current.lock();
        let status = guard.as_mut().map(|child| child.try_wait());
        match status {
            Some(Ok(None)) => true,
            Some(_) => {
                *guard = None;
                false
            }
            None => false,
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Keeps text that starts with `-` from being read as an option.
fn engine_text(text: &str) -> String {
    if text.starts_with('-') {
        format!(" {text}")
    } else {
        text.to_string()
    }
}

fn espeak_pitch(multiplier: f32) -> u32 {
    (ESPEAK_PITCH_BASE * multiplier).round().clamp(0.0, 99.0) as u32
}

fn espeak_rate(multiplier: f32) -> u32 {
    (ESPEAK_WPM_BASE * multiplier).round().clamp(80.0, 450.0) as u32
}

/// Parses `espeak-ng --voices` output:
/// `Pty Language Age/Gender VoiceName File Other Languages`.
pub fn parse_espeak_voices(listing: &str) -> Vec<Voice> {
    listing
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut cols = line.split_whitespace();
            let _priority = cols.next()?;
            let lang = cols.next()?;
            let age_gender = cols.next()?;
            let name = cols.next()?;
            let file = cols.next()?;
            let gender = match age_gender.rsplit('/').next() {
                Some("M") => Some(VoiceGender::Male),
                Some("F") => Some(VoiceGender::Female),
                _ => None,
            };
            Some(Voice {
                id: file.to_string(),
                name: name.replace('_', " "),
                lang: lang.to_string(),
                gender,
            })
        })
        .collect()
}
