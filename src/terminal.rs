//! Line-oriented terminal front end: command parsing, per-view rendering and
//! the selection-view browsing state (search term, category, active tab).

use std::fmt::Write as _;

use thiserror::Error;

use crate::catalog::{Catalog, SearchOutcome, ALL_CATEGORIES};
use crate::controller::{Completion, Controller, PendingLesson, SelectError, ViewPhase};
use crate::lesson::LessonContent;
use crate::services::gemini::LessonGenerator;
use crate::services::speech::SpeechOutput;

const HELP: &str = "\
Commands:
  search <text>     filter scenarios (English, 中文 or description); `search` clears
  category <id>     restrict to a category (`category all` resets)
  categories        list categories
  list              show the current results
  pick <n> | <n>    learn the n-th scenario in the list
  custom            generate a lesson for the typed search term
  words | story     switch lesson tab
  say <n>           pronounce the n-th word
  listen            read the story aloud
  stop              stop speech
  back              leave the lesson or the error screen
  ok                acknowledge an error
  help | quit";

/// All input the terminal understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Search(String),
    Category(String),
    Categories,
    Pick(usize),
    Custom,
    Words,
    Story,
    Say(usize),
    Listen,
    Stop,
    Back,
    Acknowledge,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a list number")]
    InvalidNumber(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" | "list" | "l" => Ok(Command::Refresh),
        "search" | "s" | "/" => Ok(Command::Search(rest.to_string())),
        "category" | "c" => {
            if rest.is_empty() {
                Err(CommandError::MissingArgument("category"))
            } else {
                Ok(Command::Category(rest.to_ascii_lowercase()))
            }
        }
        "categories" => Ok(Command::Categories),
        "pick" | "p" => parse_index(rest, "pick").map(Command::Pick),
        "custom" | "generate" | "g" => Ok(Command::Custom),
        "words" | "w" => Ok(Command::Words),
        "story" | "context" => Ok(Command::Story),
        "say" => parse_index(rest, "say").map(Command::Say),
        "listen" => Ok(Command::Listen),
        "stop" => Ok(Command::Stop),
        "back" | "b" => Ok(Command::Back),
        "ok" => Ok(Command::Acknowledge),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other if other.chars().all(|c| c.is_ascii_digit()) => {
            parse_index(other, "pick").map(Command::Pick)
        }
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Parses a 1-based list number into a 0-based index.
fn parse_index(raw: &str, verb: &'static str) -> Result<usize, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument(verb));
    }
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidNumber(raw.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LessonTab {
    #[default]
    Words,
    Story,
}

/// What the event loop should do after a command.
pub struct Reaction<G> {
    pub output: String,
    pub pending: Option<PendingLesson<G>>,
    pub quit: bool,
}

impl<G> Reaction<G> {
    fn show(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            pending: None,
            quit: false,
        }
    }
}

pub struct Session<G, S> {
    catalog: Catalog,
    controller: Controller<G, S>,
    search: String,
    category: String,
    tab: LessonTab,
    results: SearchOutcome,
}

impl<G: LessonGenerator, S: SpeechOutput> Session<G, S> {
    pub fn new(catalog: Catalog, controller: Controller<G, S>) -> Self {
        let results = catalog.search("", ALL_CATEGORIES);
        Self {
            catalog,
            controller,
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            tab: LessonTab::default(),
            results,
        }
    }

    pub fn controller(&self) -> &Controller<G, S> {
        &self.controller
    }

    pub fn results(&self) -> &SearchOutcome {
        &self.results
    }

    pub fn tab(&self) -> LessonTab {
        self.tab
    }

    pub fn handle(&mut self, command: Command) -> Reaction<G> {
        match command {
            Command::Quit => {
                self.controller.stop_playback();
                Reaction {
                    output: String::new(),
                    pending: None,
                    quit: true,
                }
            }
            Command::Help => Reaction::show(HELP),
            Command::Refresh => Reaction::show(self.render()),
            Command::Search(text) => self.browse(|s| s.search = text),
            Command::Category(id) => {
                if self.catalog.category(&id).is_none() {
                    return Reaction::show(format!("unknown category `{id}`, type `categories`"));
                }
                self.browse(|s| s.category = id)
            }
            Command::Categories => Reaction::show(self.render_categories()),
            Command::Pick(index) => match self.results.matches.get(index).copied() {
                Some(scenario) => self.select(scenario.topic().to_string()),
                None => Reaction::show(format!("no scenario #{}", index + 1)),
            },
            Command::Custom => match self.results.custom_topic.clone() {
                Some(topic) => self.select(topic),
                None => Reaction::show("type `search <topic>` first"),
            },
            Command::Words => self.show_tab(LessonTab::Words),
            Command::Story => self.show_tab(LessonTab::Story),
            Command::Say(index) => {
                if self.controller.play_word(index) {
                    Reaction::show("♪")
                } else {
                    Reaction::show("(audio unavailable)")
                }
            }
            Command::Listen => {
                if self.controller.play_narrative() {
                    Reaction::show("♪ listening…")
                } else {
                    Reaction::show("(audio unavailable)")
                }
            }
            Command::Stop => {
                self.controller.stop_playback();
                Reaction::show("")
            }
            Command::Back => match self.controller.phase() {
                ViewPhase::Viewing => {
                    let _ = self.controller.navigate_back();
                    self.tab = LessonTab::default();
                    Reaction::show(self.render())
                }
                ViewPhase::Error => self.acknowledge(),
                _ => Reaction::show(self.render()),
            },
            Command::Acknowledge => self.acknowledge(),
        }
    }

    /// Feeds a finished generation back into the controller.
    pub fn complete(&mut self, completion: Completion) -> String {
        if self.controller.complete(completion) {
            self.tab = LessonTab::default();
            self.render()
        } else {
            String::new()
        }
    }

    pub fn render(&self) -> String {
        let state = self.controller.state();
        match state.phase() {
            ViewPhase::Selecting => self.render_selection(),
            ViewPhase::Loading => render_loading(),
            ViewPhase::Error => render_error(self.controller.error_message().unwrap_or_default()),
            ViewPhase::Viewing => match (self.controller.lesson(), self.tab) {
                (Some(lesson), LessonTab::Words) => render_words(lesson),
                (Some(lesson), LessonTab::Story) => render_story(lesson),
                (None, _) => String::new(),
            },
        }
    }

    fn browse(&mut self, update: impl FnOnce(&mut Self)) -> Reaction<G> {
        if self.controller.phase() != ViewPhase::Selecting {
            return Reaction::show("finish the current screen first (`back`)");
        }
        update(self);
        self.results = self.catalog.search(&self.search, &self.category);
        Reaction::show(self.render_selection())
    }

    fn show_tab(&mut self, tab: LessonTab) -> Reaction<G> {
        if self.controller.phase() != ViewPhase::Viewing {
            return Reaction::show("no lesson open");
        }
        self.tab = tab;
        Reaction::show(self.render())
    }

    fn select(&mut self, topic: String) -> Reaction<G> {
        match self.controller.begin_selection(&topic) {
            Ok(pending) => Reaction {
                output: render_loading(),
                pending: Some(pending),
                quit: false,
            },
            Err(SelectError::RequestInFlight) => Reaction::show("still generating, please wait"),
            Err(err) => Reaction::show(err.to_string()),
        }
    }

    fn acknowledge(&mut self) -> Reaction<G> {
        match self.controller.acknowledge_error() {
            Ok(()) => Reaction::show(self.render_selection()),
            Err(_) => Reaction::show(self.render()),
        }
    }

    fn render_categories(&self) -> String {
        let counts = self.catalog.count_by_category();
        let mut out = String::new();
        for category in self.catalog.categories() {
            let count = if category.id == ALL_CATEGORIES {
                self.catalog.scenarios().len()
            } else {
                counts.get(category.id).copied().unwrap_or(0)
            };
            let _ = writeln!(out, "  {:<14} {} ({count})", category.id, category.label);
        }
        out
    }

    fn render_selection(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "SceneLingo AI");
        let _ = writeln!(
            out,
            "Choose from {} scenarios to learn English in context.",
            self.catalog.scenarios().len()
        );

        if let Some(topic) = &self.results.custom_topic {
            let _ = writeln!(out, "\n[Custom Scenario] Generate: \"{topic}\"  (type `custom`)");
        }

        let _ = write!(out, "\n{} Scenarios Found", self.results.matches.len());
        if self.category != ALL_CATEGORIES {
            if let Some(category) = self.catalog.category(&self.category) {
                let _ = write!(out, "  [{}]", category.label);
            }
        }
        out.push('\n');

        for (i, scenario) in self.results.matches.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>4}. {}  {} · {}",
                i + 1,
                scenario.display_name_local,
                scenario.display_name_en,
                scenario.description
            );
        }

        if self.results.show_empty_hint() {
            let _ = writeln!(
                out,
                "No scenarios found in this category. (`category all` to view all categories)"
            );
        }
        out
    }
}

pub fn render_loading() -> String {
    "Consulting AI Teacher...\nGenerating vocabulary and context for your scenario.".to_string()
}

pub fn render_error(message: &str) -> String {
    format!("Oops!\n{message}\n(type `back` to go back)")
}

pub fn render_words(lesson: &LessonContent) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "< {}   [Words] | Scenario Context", lesson.topic);
    let _ = writeln!(out, "{} key terms generated for this scenario.", lesson.words.len());
    for (i, word) in lesson.words.iter().enumerate() {
        match &word.pronunciation {
            Some(p) if !p.trim().is_empty() => {
                let _ = writeln!(out, "{:>4}. {}  /{}/", i + 1, word.english, p.trim_matches('/'));
            }
            _ => {
                let _ = writeln!(out, "{:>4}. {}", i + 1, word.english);
            }
        }
        let _ = writeln!(out, "      {}", word.local_translation);
    }
    out
}

pub fn render_story(lesson: &LessonContent) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "< {}   Words | [Scenario Context]", lesson.topic);
    let _ = writeln!(out, "English Context  (`listen`)");
    for segment in lesson.highlight_segments() {
        if segment.is_vocabulary {
            let _ = write!(out, "*{}*", segment.text);
        } else {
            out.push_str(segment.text);
        }
    }
    let _ = writeln!(out, "\n\nTranslation");
    let _ = writeln!(out, "{}", lesson.narrative_translation);
    out
}
