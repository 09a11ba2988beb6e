//! Landing view
//!
//! Composes a generation request (topic plus attachments), browses the
//! presentation history, and hosts the delete confirmation. Submission,
//! history load/delete and the language switch are delegated to callbacks
//! supplied by the host.

pub mod composer;
pub mod history;
pub mod state;

use dioxus::prelude::*;

use crate::app::AppState;
use crate::i18n::{translations, Language};
use crate::types::presentation::{GenerationRequest, PresentationData};
use crate::ui::components::confirmation::ConfirmationModal;
use composer::Composer;
use history::HistoryGrid;
use state::HomeState;

#[component]
pub fn Home(
    on_submit: EventHandler<GenerationRequest>,
    on_load_history: EventHandler<PresentationData>,
    on_delete_history: EventHandler<String>,
    set_language: EventHandler<Language>,
) -> Element {
    let app_state = use_context::<AppState>();
    let language = *app_state.language.read();
    let t = translations(language);

    let mut state = use_signal(HomeState::default);

    let delete_open = state.read().pending_delete.is_some();

    rsx! {
        div {
            class: "flex-1 flex flex-col items-center p-6 bg-zinc-950 relative overflow-hidden h-full",

            // Language toggle
            div {
                class: "absolute top-6 right-6 z-40",
                button {
                    class: "flex items-center gap-2 px-3 py-2 rounded-full bg-zinc-900 border border-zinc-800 text-zinc-400 hover:text-white hover:bg-zinc-800 transition text-sm font-medium",
                    onclick: move |_| set_language.call(language.toggle()),
                    "{language.label()}"
                }
            }

            div {
                class: "z-10 w-full max-w-4xl text-center flex flex-col h-full",

                div {
                    class: "flex-none pt-12 space-y-6",

                    h1 {
                        class: "text-6xl font-bold text-white mb-4 tracking-tighter",
                        "{t.home.title}"
                    }
                    p {
                        class: "text-xl text-zinc-400 font-light",
                        "{t.home.subtitle_prefix} "
                        span { class: "text-purple-400 font-medium", "{t.home.subtitle_highlight}" }
                        " {t.home.subtitle_suffix}"
                    }

                    div {
                        class: "w-full max-w-2xl mx-auto",

                        Composer { state, on_submit }

                        // Suggestion chips
                        div {
                            class: "flex flex-wrap justify-center gap-2 mt-4",
                            for suggestion in t.home.suggestions.iter() {
                                button {
                                    key: "{suggestion}",
                                    class: "px-3 py-1.5 text-xs text-zinc-500 bg-zinc-900/50 border border-zinc-800 rounded-full hover:bg-zinc-800 hover:text-zinc-300 transition cursor-pointer",
                                    onclick: move |_| state.write().set_draft(*suggestion),
                                    "{suggestion}"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "flex-1 mt-10 w-full flex flex-col min-h-0",
                    HistoryGrid { state, on_load_history }
                }
            }

            ConfirmationModal {
                is_open: delete_open,
                title: "{t.home.delete_presentation_title}",
                message: "{t.home.delete_presentation_confirm}",
                confirm_text: "{t.home.delete}",
                cancel_text: "{t.modals.cancel}",
                is_dangerous: true,
                on_close: move |_| state.write().cancel_delete(),
                on_confirm: move |_| {
                    if let Some(id) = state.write().confirm_delete() {
                        on_delete_history.call(id);
                    }
                },
            }
        }
    }
}
