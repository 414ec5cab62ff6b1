use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use scenelingo::catalog::Catalog;
use scenelingo::config::Config;
use scenelingo::controller::{Completion, Controller, ControllerOptions};
use scenelingo::logging;
use scenelingo::services::gemini::GeminiClient;
use scenelingo::services::speech::{CommandSpeech, NullSpeech, SpeechOutput, VoiceSelector};
use scenelingo::terminal::{parse_command, Command, Session};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = logging::init_tracing(&config.log_level);

    let gemini = GeminiClient::new(config.gemini.clone());
    if !gemini.is_available() {
        tracing::warn!("GEMINI_API_KEY not set, lesson generation will fail");
    }

    let speech = load_speech(config.speech_command.clone()).await;

    let options = ControllerOptions {
        generation_timeout: config.gemini.timeout,
        voice_selector: VoiceSelector::preferred_male(
            &config.speech_language,
            &config.speech_region,
        ),
    };
    let controller = Controller::new(gemini, speech, options);
    let session = Session::new(Catalog::builtin(), controller);

    if let Err(err) = run(session).await {
        tracing::error!(error = %err, "terminal I/O failed");
        std::process::exit(1);
    }
}

/// Starts the speech engine and lists its voices off the event loop.
async fn load_speech(program: Option<String>) -> Box<dyn SpeechOutput> {
    let Some(program) = program else {
        return Box::new(NullSpeech);
    };
    let loaded = tokio::task::spawn_blocking(move || {
        let engine = CommandSpeech::new(program);
        let voices = engine.preload_voices();
        (engine, voices)
    })
    .await;

    match loaded {
        Ok((engine, voices)) => {
            tracing::info!(voices, "speech engine ready");
            Box::new(engine)
        }
        Err(err) => {
            tracing::warn!(error = %err, "speech engine setup failed, audio disabled");
            Box::new(NullSpeech)
        }
    }
}

async fn run<S: SpeechOutput>(mut session: Session<GeminiClient, S>) -> std::io::Result<()> {
    let (tx, mut rx) = mpsc::channel::<Completion>(1);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    show(&session.render())?;
    prompt()?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(command) => {
                        let reaction = session.handle(command);
                        show(&reaction.output)?;
                        if let Some(pending) = reaction.pending {
                            let tx = tx.clone();
                            tokio::spawn(async move {
                                let completion = pending.run().await;
                                if tx.send(completion).await.is_err() {
                                    tracing::debug!("session closed before lesson arrived");
                                }
                            });
                        }
                        if reaction.quit {
                            break;
                        }
                    }
                    Err(err) => show(&err.to_string())?,
                }
                prompt()?;
            }
            Some(completion) = rx.recv() => {
                show(&session.complete(completion))?;
                prompt()?;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    session.handle(Command::Quit);
    Ok(())
}

fn show(text: &str) -> std::io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;
    stdout.flush()
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "> ")?;
    stdout.flush()
}
