pub mod catalog;
pub mod config;
pub mod controller;
pub mod lesson;
pub mod logging;
pub mod services;
pub mod terminal;

pub use catalog::{Catalog, ScenarioDescriptor, ALL_CATEGORIES};
pub use controller::{Controller, ControllerOptions, ViewPhase, ViewState, GENERATION_FAILED_MESSAGE};
pub use lesson::{LessonContent, VocabularyItem};
