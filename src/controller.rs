//! View-state controller for one learner session.
//!
//! Owns the `Selecting → Loading → {Viewing | Error} → Selecting` cycle,
//! guards against a second generation request while one is outstanding, and
//! stops speech when the learner leaves a lesson.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::lesson::LessonContent;
use crate::services::gemini::{GenerationError, LessonGenerator};
use crate::services::speech::{SpeechError, SpeechOutput, VoiceSelector};

/// The only failure text the learner sees.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate content. Please try again later.";

const HISTORY_LIMIT: usize = 100;
const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Selecting,
    Loading,
    Error(String),
    Viewing(LessonContent),
}

impl ViewState {
    pub fn phase(&self) -> ViewPhase {
        match self {
            ViewState::Selecting => ViewPhase::Selecting,
            ViewState::Loading => ViewPhase::Loading,
            ViewState::Error(_) => ViewPhase::Error,
            ViewState::Viewing(_) => ViewPhase::Viewing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Selecting,
    Loading,
    Error,
    Viewing,
}

impl ViewPhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            ViewPhase::Selecting => "SELECTING",
            ViewPhase::Loading => "LOADING",
            ViewPhase::Error => "ERROR",
            ViewPhase::Viewing => "VIEWING",
        }
    }

    pub fn can_transition_to(self, target: ViewPhase) -> bool {
        matches!(
            (self, target),
            (ViewPhase::Selecting, ViewPhase::Loading)
                | (ViewPhase::Loading, ViewPhase::Viewing)
                | (ViewPhase::Loading, ViewPhase::Error)
                | (ViewPhase::Error, ViewPhase::Selecting)
                | (ViewPhase::Viewing, ViewPhase::Selecting)
        )
    }
}

#[derive(Debug, Clone)]
pub struct StateTransition {
    pub from: ViewPhase,
    pub to: ViewPhase,
    pub reason: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Invalid transition from {from:?} to {to:?}")]
    InvalidTransition { from: ViewPhase, to: ViewPhase },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("scenario name is empty")]
    EmptyScenario,
    #[error("a lesson is already being generated")]
    RequestInFlight,
    #[error("cannot select a scenario while {0:?}")]
    NotSelecting(ViewPhase),
}

/// Identifies one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

pub struct ControllerOptions {
    pub generation_timeout: Duration,
    pub voice_selector: VoiceSelector,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
            voice_selector: VoiceSelector::preferred_male("en", "en-GB"),
        }
    }
}

/// A generation request handed out by [`Controller::begin_selection`]. It
/// can be awaited in place or moved onto a task; either way its
/// [`Completion`] goes back through [`Controller::complete`].
pub struct PendingLesson<G> {
    ticket: Ticket,
    scenario: String,
    generator: Arc<G>,
    timeout: Duration,
}

impl<G: LessonGenerator> PendingLesson<G> {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    pub async fn run(self) -> Completion {
        let result = match tokio::time::timeout(
            self.timeout,
            self.generator.generate_lesson(&self.scenario),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout(self.timeout)),
        };

        Completion {
            ticket: self.ticket,
            scenario: self.scenario,
            result,
        }
    }
}

#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub scenario: String,
    pub result: Result<LessonContent, GenerationError>,
}

pub struct Controller<G, S> {
    generator: Arc<G>,
    speech: S,
    voices: VoiceSelector,
    timeout: Duration,
    state: ViewState,
    outstanding: Option<Ticket>,
    next_ticket: u64,
    playing: bool,
    history: Vec<StateTransition>,
    phase_tx: watch::Sender<ViewPhase>,
}

impl<G: LessonGenerator, S: SpeechOutput> Controller<G, S> {
    pub fn new(generator: G, speech: S, options: ControllerOptions) -> Self {
        let (phase_tx, _) = watch::channel(ViewPhase::Selecting);
        Self {
            generator: Arc::new(generator),
            speech,
            voices: options.voice_selector,
            timeout: options.generation_timeout,
            state: ViewState::Selecting,
            outstanding: None,
            next_ticket: 0,
            playing: false,
            history: Vec::new(),
            phase_tx,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn phase(&self) -> ViewPhase {
        self.state.phase()
    }

    pub fn lesson(&self) -> Option<&LessonContent> {
        match &self.state {
            ViewState::Viewing(lesson) => Some(lesson),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn speech(&self) -> &S {
        &self.speech
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewPhase> {
        self.phase_tx.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.outstanding.is_some()
    }

    /// Moves to `Loading` and hands back the request to run. Rejected unless
    /// the controller is `Selecting` with nothing outstanding.
    pub fn begin_selection(&mut self, scenario_name: &str) -> Result<PendingLesson<G>, SelectError> {
        let scenario = scenario_name.trim();
        if self.outstanding.is_some() {
            debug!(scenario, "selection ignored, request in flight");
            return Err(SelectError::RequestInFlight);
        }
        if scenario.is_empty() {
            return Err(SelectError::EmptyScenario);
        }
        let phase = self.phase();
        if phase != ViewPhase::Selecting {
            debug!(scenario, phase = phase.as_str(), "selection ignored");
            return Err(SelectError::NotSelecting(phase));
        }

        self.transition(ViewState::Loading, format!("selected {scenario}"))
            .map_err(|_| SelectError::NotSelecting(phase))?;

        let ticket = Ticket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.outstanding = Some(ticket);
        info!(scenario, "generating lesson");

        Ok(PendingLesson {
            ticket,
            scenario: scenario.to_string(),
            generator: Arc::clone(&self.generator),
            timeout: self.timeout,
        })
    }

    /// Applies a finished request. Returns `false` when the completion is not
    /// the outstanding one and was discarded.
    pub fn complete(&mut self, completion: Completion) -> bool {
        if self.outstanding != Some(completion.ticket) {
            debug!(scenario = %completion.scenario, "discarding stale lesson result");
            return false;
        }
        self.outstanding = None;

        let result = completion.result.and_then(|lesson| {
            if lesson.words.is_empty() {
                Err(GenerationError::EmptyVocabulary)
            } else {
                Ok(lesson)
            }
        });

        let next = match result {
            Ok(lesson) => {
                info!(
                    scenario = %completion.scenario,
                    words = lesson.words.len(),
                    "lesson ready"
                );
                ViewState::Viewing(lesson)
            }
            Err(err) => {
                error!(scenario = %completion.scenario, error = %err, "lesson generation failed");
                ViewState::Error(GENERATION_FAILED_MESSAGE.to_string())
            }
        };

        if let Err(err) = self.transition(next, format!("resolved {}", completion.scenario)) {
            warn!(error = %err, "completion could not be applied");
            return false;
        }
        true
    }

    /// Selects and waits for the lesson in one step.
    pub async fn select_scenario(&mut self, scenario_name: &str) -> Result<ViewPhase, SelectError> {
        let pending = self.begin_selection(scenario_name)?;
        let completion = pending.run().await;
        self.complete(completion);
        Ok(self.phase())
    }

    /// Dismisses the error screen. Only valid from `Error`; a lesson is left
    /// through [`Controller::navigate_back`].
    pub fn acknowledge_error(&mut self) -> Result<(), TransitionError> {
        let from = self.phase();
        if from != ViewPhase::Error {
            warn!(from = from.as_str(), "no error to acknowledge");
            return Err(TransitionError::InvalidTransition {
                from,
                to: ViewPhase::Selecting,
            });
        }
        self.transition(ViewState::Selecting, "error acknowledged")
    }

    /// Leaves the lesson, dropping it and silencing any speech.
    pub fn navigate_back(&mut self) -> Result<(), TransitionError> {
        self.transition(ViewState::Selecting, "navigated back")?;
        self.stop_playback();
        Ok(())
    }

    /// Speaks `text` with the preferred voice. Playback failures are logged
    /// and reset the playing indicator; they never change the view state.
    pub fn play(&mut self, text: &str) -> bool {
        if self.phase() != ViewPhase::Viewing {
            debug!("playback requested outside a lesson");
            return false;
        }

        let voices = self.speech.voices();
        let utterance = self.voices.utterance(text, &voices);
        match self.speech.speak(utterance) {
            Ok(()) => {
                self.playing = true;
                true
            }
            Err(err) => {
                self.log_playback_failure(&err);
                self.playing = false;
                false
            }
        }
    }

    pub fn play_word(&mut self, index: usize) -> bool {
        let Some(text) = self
            .lesson()
            .and_then(|l| l.words.get(index))
            .map(|w| w.english.clone())
        else {
            return false;
        };
        self.play(&text)
    }

    pub fn play_narrative(&mut self) -> bool {
        let Some(text) = self.lesson().map(|l| l.narrative_text.clone()) else {
            return false;
        };
        self.play(&text)
    }

    pub fn stop_playback(&mut self) {
        self.speech.stop();
        self.playing = false;
    }

    /// Clears the indicator once the engine has finished on its own.
    pub fn is_playing(&mut self) -> bool {
        if self.playing && !self.speech.is_speaking() {
            self.playing = false;
        }
        self.playing
    }

    fn log_playback_failure(&self, err: &SpeechError) {
        match err {
            SpeechError::Unavailable => debug!("speech output unavailable"),
            other => warn!(error = %other, "speech playback failed"),
        }
    }

    fn transition(
        &mut self,
        next: ViewState,
        reason: impl Into<String>,
    ) -> Result<(), TransitionError> {
        let from = self.state.phase();
        let to = next.phase();
        if !from.can_transition_to(to) {
            warn!(from = from.as_str(), to = to.as_str(), "rejected view transition");
            return Err(TransitionError::InvalidTransition { from, to });
        }

        self.state = next;
        self.history.push(StateTransition {
            from,
            to,
            reason: reason.into(),
            at: Utc::now(),
        });
        if self.history.len() > HISTORY_LIMIT {
            let extra = self.history.len() - HISTORY_LIMIT;
            self.history.drain(0..extra);
        }
        self.phase_tx.send_replace(to);
        debug!(from = from.as_str(), to = to.as_str(), "view transition");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_transitions() {
        use ViewPhase::*;
        assert!(Selecting.can_transition_to(Loading));
        assert!(Loading.can_transition_to(Viewing));
        assert!(Loading.can_transition_to(Error));
        assert!(Error.can_transition_to(Selecting));
        assert!(Viewing.can_transition_to(Selecting));

        assert!(!Selecting.can_transition_to(Viewing));
        assert!(!Selecting.can_transition_to(Error));
        assert!(!Loading.can_transition_to(Selecting));
        assert!(!Loading.can_transition_to(Loading));
        assert!(!Viewing.can_transition_to(Loading));
        assert!(!Error.can_transition_to(Viewing));
    }

    #[test]
    fn state_phase_mapping() {
        assert_eq!(ViewState::Selecting.phase(), ViewPhase::Selecting);
        assert_eq!(ViewState::Error("x".into()).phase(), ViewPhase::Error);
        assert_eq!(ViewPhase::Viewing.as_str(), "VIEWING");
    }
}
