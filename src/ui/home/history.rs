//! History grid
//!
//! Cards for previously created presentations: open on click, delete behind
//! a confirmation handled by the parent view.

use dioxus::prelude::*;

use crate::app::AppState;
use crate::i18n::{format_timestamp, translations};
use crate::types::presentation::{sort_by_recency, PresentationData};
use crate::ui::home::state::HomeState;

#[component]
pub fn HistoryGrid(
    state: Signal<HomeState>,
    on_load_history: EventHandler<PresentationData>,
) -> Element {
    let app_state = use_context::<AppState>();
    let language = *app_state.language.read();
    let t = &translations(language).home;

    // Display order is recomputed on every render rather than stored
    let mut history = app_state.history.read().clone();
    sort_by_recency(&mut history);

    rsx! {
        div {
            class: "flex items-center justify-between mb-4 px-2",
            h3 {
                class: "text-zinc-500 text-sm font-semibold uppercase tracking-wider",
                "{t.history}"
            }
        }

        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 overflow-y-auto pb-10 pr-2 text-left",

            if history.is_empty() {
                div {
                    class: "col-span-full py-12 text-center text-zinc-600 border border-zinc-900 rounded-xl border-dashed",
                    p { "{t.no_history}" }
                }
            } else {
                {history.into_iter().map(|deck| {
                    let deck_for_open = deck.clone();
                    let deck_for_play = deck.clone();
                    let deck_id = deck.id.clone();
                    let created = format_timestamp(deck.created_at, language);
                    let topic = deck.display_topic();
                    let slides = deck.slide_count();

                    rsx! {
                        div {
                            key: "{deck.id}",
                            class: "group relative bg-zinc-900/50 border border-zinc-800 rounded-xl p-4 hover:bg-zinc-900 hover:border-zinc-700 transition flex flex-col h-32",

                            div {
                                class: "flex-1 cursor-pointer",
                                onclick: move |_| on_load_history.call(deck_for_open.clone()),

                                h4 {
                                    class: "text-zinc-200 font-medium mb-2",
                                    "{topic}"
                                }
                                span {
                                    class: "text-xs text-zinc-500",
                                    "{created} • {slides} slides"
                                }
                            }

                            div {
                                class: "flex justify-end items-center gap-2 mt-auto opacity-0 group-hover:opacity-100 transition-opacity",

                                button {
                                    class: "p-1.5 text-zinc-500 hover:text-red-400 hover:bg-zinc-800 rounded transition",
                                    title: "{t.delete}",
                                    onclick: move |evt| {
                                        evt.stop_propagation();
                                        state.write().request_delete(deck_id.clone());
                                    },
                                    svg {
                                        width: "14",
                                        height: "14",
                                        view_box: "0 0 24 24",
                                        fill: "none",
                                        stroke: "currentColor",
                                        stroke_width: "2",
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                        path { d: "M3 6h18" }
                                        path { d: "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6" }
                                        path { d: "M10 6V4a2 2 0 0 1 2-2h0a2 2 0 0 1 2 2v2" }
                                    }
                                }

                                button {
                                    class: "p-1.5 text-purple-400 hover:bg-purple-900/20 rounded transition",
                                    title: "{t.open}",
                                    onclick: move |_| on_load_history.call(deck_for_play.clone()),
                                    svg {
                                        width: "14",
                                        height: "14",
                                        view_box: "0 0 24 24",
                                        fill: "currentColor",
                                        polygon { points: "5 3 19 12 5 21 5 3" }
                                    }
                                }
                            }
                        }
                    }
                })}
            }
        }
    }
}
