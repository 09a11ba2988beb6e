//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the
//! UI tree, plus the global state shared across views.

use crate::i18n::Language;
use crate::types::presentation::PresentationData;
use crate::ui::Layout;
use dioxus::prelude::*;

/// Which top-level view is showing
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum View {
    Home,
    Deck,
}

/// Global application state shared across components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Previously created presentations, most recent first
    pub history: Signal<Vec<PresentationData>>,
    /// The presentation currently open in the deck view
    pub current: Signal<Option<PresentationData>>,
    /// Process-wide display language
    pub language: Signal<Language>,
    pub view: Signal<View>,
}

impl AppState {
    pub fn new() -> Self {
        tracing::info!("AppState initialized");
        Self {
            history: Signal::new(Vec::new()),
            current: Signal::new(None),
            language: Signal::new(Language::En),
            view: Signal::new(View::Home),
        }
    }
}

#[component]
pub fn App() -> Element {
    let app_state = AppState::new();
    use_context_provider(|| app_state);

    rsx! {
        Layout {}
    }
}
