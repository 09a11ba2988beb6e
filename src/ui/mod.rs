//! UI components for SlideDeck
//!
//! This module contains all user interface components built with Dioxus. The
//! [`Layout`] component is the host controller: it owns navigation and the
//! persistence side effects the views delegate to.

pub mod components;
pub mod deck;
pub mod home;

use crate::app::{AppState, View};
use crate::storage::presentations::{delete_presentation, list_presentations, save_presentation};
use crate::types::presentation::{GenerationRequest, PresentationData, SlideData};
use deck::DeckView;
use dioxus::prelude::*;
use home::Home;

/// Main application layout: view switch plus the host-side callbacks the
/// views consume.
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let mut history = app_state.history;
    let mut current = app_state.current;
    let mut view = app_state.view;
    let mut language = app_state.language;

    use_effect(move || match list_presentations() {
        Ok(presentations) => history.set(presentations),
        Err(e) => tracing::error!("Failed to load presentation history: {}", e),
    });

    // The generation service is an external collaborator; submitting creates
    // and persists a deck shell for the request and opens it.
    let handle_submit = move |request: GenerationRequest| {
        tracing::info!(
            "Generation requested: {} attachment(s), topic \"{}\"",
            request.attachments.len(),
            crate::truncate_str(&request.topic, 64),
        );

        let topic = if request.topic.trim().is_empty() {
            "Untitled presentation".to_string()
        } else {
            request.topic
        };
        let mut deck = PresentationData::new(topic.clone());
        deck.slides.push(SlideData::new(topic.clone(), topic));

        if let Err(e) = save_presentation(&deck) {
            tracing::error!("Failed to save presentation: {}", e);
            return;
        }
        if let Ok(presentations) = list_presentations() {
            history.set(presentations);
        }
        current.set(Some(deck));
        view.set(View::Deck);
    };

    let handle_load = move |presentation: PresentationData| {
        tracing::debug!("Opening presentation: {}", presentation.id);
        current.set(Some(presentation));
        view.set(View::Deck);
    };

    let handle_delete = move |id: String| {
        if let Err(e) = delete_presentation(&id) {
            tracing::error!("Failed to delete presentation {}: {}", id, e);
        }
        let should_clear = current
            .read()
            .as_ref()
            .map(|deck| deck.id == id)
            .unwrap_or(false);
        if should_clear {
            current.set(None);
        }
        if let Ok(presentations) = list_presentations() {
            history.set(presentations);
        }
    };

    let handle_language = move |lang| language.set(lang);

    let active_view = *view.read();

    rsx! {
        div {
            class: "flex h-screen w-screen bg-zinc-950 text-zinc-100 overflow-hidden font-sans",

            link { rel: "stylesheet", href: "assets/styles.css" }

            main {
                class: "flex-1 flex flex-col h-full relative min-w-0",

                if active_view == View::Home {
                    Home {
                        on_submit: handle_submit,
                        on_load_history: handle_load,
                        on_delete_history: handle_delete,
                        set_language: handle_language,
                    }
                } else {
                    DeckView {}
                }
            }
        }
    }
}
