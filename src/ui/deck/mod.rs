//! Deck view
//!
//! Minimal viewer for a loaded presentation: slide titles, bullets and
//! visual prompts. Rendering and export live elsewhere; from here the user
//! can only edit a slide's visual prompt through the regeneration dialog.

use dioxus::prelude::*;

use crate::app::{AppState, View};
use crate::i18n::translations;
use crate::storage::presentations::save_presentation;
use crate::ui::components::regenerate::RegenerateModal;

#[component]
pub fn DeckView() -> Element {
    let app_state = use_context::<AppState>();
    let mut current = app_state.current;
    let mut view = app_state.view;
    let mut history = app_state.history;
    let t = &translations(*app_state.language.read()).slide_show;

    // Index of the slide whose image is being regenerated
    let mut regenerate_for = use_signal(|| None::<usize>);

    let Some(deck) = current.read().clone() else {
        // Nothing loaded; offer the way back instead of an empty shell
        return rsx! {
            div {
                class: "flex-1 flex items-center justify-center bg-zinc-950",
                button {
                    class: "px-4 py-2 rounded-lg text-sm text-zinc-400 hover:text-white hover:bg-zinc-900 transition",
                    onclick: move |_| view.set(View::Home),
                    "← {t.back_title}"
                }
            }
        };
    };

    let modal_open = regenerate_for.read().is_some();
    let initial_prompt = regenerate_for
        .read()
        .and_then(|idx| deck.slides.get(idx))
        .map(|slide| slide.visual_prompt.clone())
        .unwrap_or_default();

    let handle_confirm = move |new_prompt: String| {
        let Some(idx) = *regenerate_for.read() else {
            return;
        };
        regenerate_for.set(None);

        let mut updated = current.read().clone();
        if let Some(deck) = updated.as_mut() {
            if let Some(slide) = deck.slides.get_mut(idx) {
                slide.visual_prompt = new_prompt;
                // The old image no longer matches the prompt
                slide.image = None;
                tracing::info!("Image regeneration requested for slide {}", slide.id);
            }
            if let Err(e) = save_presentation(deck) {
                tracing::error!("Failed to save presentation {}: {}", deck.id, e);
            }
            if let Ok(presentations) = crate::storage::presentations::list_presentations() {
                history.set(presentations);
            }
        }
        current.set(updated);
    };

    let total = deck.slide_count();

    rsx! {
        div {
            class: "flex-1 flex flex-col h-full bg-zinc-950 relative overflow-hidden",

            // Header
            div {
                class: "flex items-center gap-4 p-4 border-b border-zinc-900",

                button {
                    class: "px-3 py-2 rounded-lg text-sm text-zinc-400 hover:text-white hover:bg-zinc-900 transition",
                    title: "{t.back_title}",
                    onclick: move |_| view.set(View::Home),
                    "← {t.back_title}"
                }

                h2 {
                    class: "text-lg font-semibold text-white truncate",
                    "{deck.topic}"
                }
            }

            // Slide list
            div {
                class: "flex-1 overflow-y-auto p-6 space-y-4 max-w-3xl mx-auto w-full",

                {deck.slides.iter().enumerate().map(|(idx, slide)| {
                    let number = idx + 1;
                    rsx! {
                        div {
                            key: "{slide.id}",
                            class: "bg-zinc-900/50 border border-zinc-800 rounded-xl p-5 text-left space-y-3",

                            div {
                                class: "flex items-center justify-between",
                                span {
                                    class: "text-xs text-zinc-500 uppercase tracking-wider",
                                    "{t.slide} {number} {t.of} {total}"
                                }
                                button {
                                    class: "px-3 py-1.5 rounded-lg text-xs text-purple-400 hover:bg-purple-900/20 transition",
                                    onclick: move |_| regenerate_for.set(Some(idx)),
                                    "{t.regenerate}"
                                }
                            }

                            h3 { class: "text-xl font-bold text-zinc-100", "{slide.title}" }

                            if !slide.bullets.is_empty() {
                                ul {
                                    class: "list-disc list-inside text-sm text-zinc-300 space-y-1",
                                    for (b_idx, bullet) in slide.bullets.iter().enumerate() {
                                        li { key: "{b_idx}", "{bullet}" }
                                    }
                                }
                            }

                            p {
                                class: "text-xs text-zinc-500 italic",
                                "{slide.visual_prompt}"
                            }
                        }
                    }
                })}
            }

            RegenerateModal {
                is_open: modal_open,
                initial_prompt,
                on_close: move |_| regenerate_for.set(None),
                on_confirm: handle_confirm,
            }
        }
    }
}
