mod common;

use std::time::Duration;

use common::{sample_lesson, sample_lesson_json, voice, RecordingSpeech, Script, ScriptedGenerator};
use scenelingo::catalog::{Catalog, ALL_CATEGORIES};
use scenelingo::controller::{
    Completion, Controller, ControllerOptions, SelectError, TransitionError, ViewPhase, ViewState,
    GENERATION_FAILED_MESSAGE,
};
use scenelingo::services::speech::{SpeechOutput, VoiceSelector};

fn controller(
    script: impl IntoIterator<Item = Script>,
    speech: RecordingSpeech,
) -> Controller<ScriptedGenerator, RecordingSpeech> {
    Controller::new(
        ScriptedGenerator::new(script),
        speech,
        ControllerOptions {
            generation_timeout: Duration::from_secs(5),
            voice_selector: VoiceSelector::preferred_male("en", "en-GB"),
        },
    )
}

fn phases(controller: &Controller<ScriptedGenerator, RecordingSpeech>) -> Vec<(ViewPhase, ViewPhase)> {
    controller.history().iter().map(|t| (t.from, t.to)).collect()
}

#[tokio::test]
async fn airport_checkin_with_twelve_words_reaches_viewing() {
    let mut c = controller(
        [Script::Text(sample_lesson_json("Airport Check-in", 12))],
        RecordingSpeech::default(),
    );
    assert_eq!(c.phase(), ViewPhase::Selecting);

    let phase = c.select_scenario("Airport Check-in").await.unwrap();

    assert_eq!(phase, ViewPhase::Viewing);
    assert_eq!(c.lesson().unwrap().words.len(), 12);
    assert_eq!(c.generator().calls(), vec!["Airport Check-in".to_string()]);
    assert_eq!(
        phases(&c),
        vec![
            (ViewPhase::Selecting, ViewPhase::Loading),
            (ViewPhase::Loading, ViewPhase::Viewing),
        ]
    );
}

#[tokio::test]
async fn malformed_payload_shows_fixed_error_then_returns_to_selecting() {
    let catalog = Catalog::builtin();
    let before = catalog.filter("", ALL_CATEGORIES);
    let mut c = controller(
        [Script::Text("{\"topic\": \"Airport".to_string())],
        RecordingSpeech::default(),
    );

    let phase = c.select_scenario("Airport Check-in").await.unwrap();

    assert_eq!(phase, ViewPhase::Error);
    assert_eq!(c.state(), &ViewState::Error(GENERATION_FAILED_MESSAGE.to_string()));
    assert!(c.lesson().is_none());

    c.acknowledge_error().unwrap();
    assert_eq!(c.phase(), ViewPhase::Selecting);
    assert_eq!(catalog.filter("", ALL_CATEGORIES), before);
    assert_eq!(
        phases(&c),
        vec![
            (ViewPhase::Selecting, ViewPhase::Loading),
            (ViewPhase::Loading, ViewPhase::Error),
            (ViewPhase::Error, ViewPhase::Selecting),
        ]
    );
}

#[tokio::test]
async fn selecting_never_jumps_straight_to_a_result() {
    let mut c = controller(
        [Script::Text(sample_lesson_json("Cafe", 3)), Script::Fail],
        RecordingSpeech::default(),
    );

    c.select_scenario("Cafe").await.unwrap();
    c.navigate_back().unwrap();
    c.select_scenario("Cafe").await.unwrap();

    for transition in c.history() {
        if transition.from == ViewPhase::Selecting {
            assert_eq!(transition.to, ViewPhase::Loading);
        }
        if matches!(transition.to, ViewPhase::Viewing | ViewPhase::Error) {
            assert_eq!(transition.from, ViewPhase::Loading);
        }
    }
}

#[tokio::test]
async fn second_selection_while_loading_is_rejected() {
    let mut c = controller(
        [Script::Text(sample_lesson_json("Hotel Check-in", 10))],
        RecordingSpeech::default(),
    );

    let pending = c.begin_selection("Hotel Check-in").unwrap();
    assert_eq!(c.phase(), ViewPhase::Loading);
    assert!(c.is_loading());

    assert_eq!(
        c.begin_selection("Ordering Coffee").err(),
        Some(SelectError::RequestInFlight)
    );

    let completion = pending.run().await;
    assert!(c.complete(completion));
    assert_eq!(c.phase(), ViewPhase::Viewing);
    assert_eq!(c.generator().calls(), vec!["Hotel Check-in".to_string()]);
}

#[tokio::test]
async fn selection_outside_selecting_or_blank_is_rejected() {
    let mut c = controller([Script::Fail], RecordingSpeech::default());
    assert_eq!(c.begin_selection("   ").err(), Some(SelectError::EmptyScenario));

    c.select_scenario("Bank").await.unwrap();
    assert_eq!(
        c.begin_selection("Post Office").err(),
        Some(SelectError::NotSelecting(ViewPhase::Error))
    );
    assert_eq!(c.generator().calls().len(), 1);
}

#[tokio::test]
async fn duplicate_completion_is_discarded() {
    let mut c = controller(
        [Script::Text(sample_lesson_json("Pharmacy", 4))],
        RecordingSpeech::default(),
    );

    let pending = c.begin_selection("Pharmacy").unwrap();
    let ticket = pending.ticket();
    assert!(c.complete(pending.run().await));

    let replay = Completion {
        ticket,
        scenario: "Pharmacy".to_string(),
        result: Ok(sample_lesson("Other", 2)),
    };
    assert!(!c.complete(replay));
    assert_eq!(c.lesson().unwrap().topic, "Pharmacy");
}

#[tokio::test]
async fn identical_names_are_generated_twice() {
    let mut c = controller(
        [
            Script::Text(sample_lesson_json("Taxi", 10)),
            Script::Text(sample_lesson_json("Taxi", 11)),
        ],
        RecordingSpeech::default(),
    );

    c.select_scenario("Taxi").await.unwrap();
    c.navigate_back().unwrap();
    c.select_scenario("Taxi").await.unwrap();

    assert_eq!(c.generator().calls().len(), 2);
    assert_eq!(c.lesson().unwrap().words.len(), 11);
}

#[tokio::test(start_paused = true)]
async fn hung_generation_times_out_into_error() {
    let mut c = controller([Script::Hang], RecordingSpeech::default());

    let phase = c.select_scenario("Lost Passport").await.unwrap();

    assert_eq!(phase, ViewPhase::Error);
    assert_eq!(c.error_message(), Some(GENERATION_FAILED_MESSAGE));
}

#[tokio::test]
async fn back_navigation_stops_active_speech() {
    let mut c = controller(
        [Script::Text(sample_lesson_json("Airport Check-in", 12))],
        RecordingSpeech::with_voices(vec![voice("Samantha", "en-US"), voice("Daniel", "en-GB")]),
    );
    c.select_scenario("Airport Check-in").await.unwrap();

    assert!(c.play_narrative());
    assert!(c.speech().is_speaking());
    assert!(c.is_playing());

    c.navigate_back().unwrap();

    assert!(!c.speech().is_speaking());
    assert_eq!(c.speech().stops(), 1);
    assert!(!c.is_playing());
    assert!(c.lesson().is_none());
    assert_eq!(c.phase(), ViewPhase::Selecting);
}

#[tokio::test]
async fn acknowledge_is_rejected_while_viewing_a_lesson() {
    let mut c = controller(
        [Script::Text(sample_lesson_json("Airport Check-in", 12))],
        RecordingSpeech::default(),
    );
    c.select_scenario("Airport Check-in").await.unwrap();
    assert!(c.play_narrative());

    let err = c.acknowledge_error().unwrap_err();

    assert!(matches!(
        err,
        TransitionError::InvalidTransition {
            from: ViewPhase::Viewing,
            to: ViewPhase::Selecting
        }
    ));
    assert_eq!(c.phase(), ViewPhase::Viewing);
    assert!(c.lesson().is_some());
    assert!(c.speech().is_speaking());
    assert_eq!(c.speech().stops(), 0);
}

#[tokio::test]
async fn lesson_without_words_is_a_generation_failure() {
    let mut c = controller(
        [Script::Lesson(sample_lesson("Cafe", 0))],
        RecordingSpeech::default(),
    );

    let phase = c.select_scenario("Cafe").await.unwrap();

    assert_eq!(phase, ViewPhase::Error);
    assert_eq!(c.error_message(), Some(GENERATION_FAILED_MESSAGE));
    assert!(c.lesson().is_none());
    assert_eq!(c.generator().calls(), vec!["Cafe".to_string()]);
}

#[tokio::test]
async fn word_playback_uses_preferred_voice() {
    let mut c = controller(
        [Script::Text(sample_lesson_json("Airport Check-in", 12))],
        RecordingSpeech::with_voices(vec![voice("Samantha", "en-US"), voice("Daniel", "en-GB")]),
    );
    c.select_scenario("Airport Check-in").await.unwrap();

    assert!(c.play_word(2));
    assert!(!c.play_word(40));

    let spoken = c.speech().spoken();
    assert_eq!(spoken.len(), 1);
    assert_eq!(spoken[0].text, "term2");
    assert_eq!(spoken[0].voice.as_ref().unwrap().name, "Daniel");
    assert_eq!(spoken[0].rate, 0.85);
    assert_eq!(spoken[0].pitch, 0.9);
}

#[tokio::test]
async fn playback_failure_is_recovered_locally() {
    let mut c = controller(
        [Script::Text(sample_lesson_json("Gym", 10))],
        RecordingSpeech::failing(),
    );
    c.select_scenario("Gym").await.unwrap();

    assert!(!c.play_narrative());
    assert!(!c.is_playing());
    assert_eq!(c.phase(), ViewPhase::Viewing);
}

#[tokio::test]
async fn playback_indicator_clears_when_engine_finishes() {
    let mut c = controller(
        [Script::Text(sample_lesson_json("Gym", 10))],
        RecordingSpeech::default(),
    );
    c.select_scenario("Gym").await.unwrap();

    assert!(c.play_word(0));
    c.speech().finish();
    assert!(!c.is_playing());
}

#[tokio::test]
async fn playback_is_ignored_outside_a_lesson() {
    let mut c = controller([], RecordingSpeech::default());
    assert!(!c.play("hello"));
    assert!(c.speech().spoken().is_empty());
}

#[tokio::test]
async fn invalid_transitions_are_reported() {
    let mut c = controller([], RecordingSpeech::default());
    assert!(matches!(
        c.navigate_back(),
        Err(TransitionError::InvalidTransition {
            from: ViewPhase::Selecting,
            to: ViewPhase::Selecting
        })
    ));
    assert!(c.acknowledge_error().is_err());
    assert!(c.history().is_empty());
}

#[tokio::test]
async fn subscribers_observe_phase_changes() {
    let mut c = controller(
        [Script::Text(sample_lesson_json("Bakery", 10))],
        RecordingSpeech::default(),
    );
    let rx = c.subscribe();

    let pending = c.begin_selection("Bakery").unwrap();
    assert_eq!(*rx.borrow(), ViewPhase::Loading);

    c.complete(pending.run().await);
    assert_eq!(*rx.borrow(), ViewPhase::Viewing);
}
