//! Topic composer
//!
//! The drop-zone form where the user types a topic, attaches reference
//! files, and submits a generation request.

use std::path::Path;
use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;

use crate::app::AppState;
use crate::attachments::{triage_files, Attachment, ALLOWED_MIME_TYPES};
use crate::i18n::translations;
use crate::types::presentation::GenerationRequest;
use crate::ui::home::state::HomeState;

/// Screen a batch from the file engine and start one read task per accepted
/// file. Each attachment is appended as its own read completes; a failed
/// read is logged and dropped without touching its siblings.
fn ingest_files(mut state: Signal<HomeState>, file_engine: Arc<dyn FileEngine>) {
    let triage = triage_files(file_engine.files());

    {
        let mut st = state.write();
        for rejected in &triage.rejected {
            st.notify_rejected(rejected);
        }
    }

    for file in triage.accepted {
        let engine = file_engine.clone();
        spawn(async move {
            match engine.read_file(&file.name).await {
                Some(bytes) => {
                    // The engine reports full paths; attachments carry just
                    // the file name
                    let name = Path::new(&file.name)
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or(&file.name)
                        .to_string();
                    state
                        .write()
                        .push_attachment(Attachment::from_bytes(name, file.mime_type, &bytes));
                }
                None => tracing::error!("Failed to read attachment {}", file.name),
            }
        });
    }
}

/// Chip icon for an attachment kind
fn kind_icon(mime_type: &str) -> (&'static str, &'static str) {
    if mime_type.starts_with("image/") {
        ("🖼", "text-blue-400")
    } else if mime_type.starts_with("audio/") {
        ("🎵", "text-pink-400")
    } else if mime_type == "application/pdf" {
        ("📄", "text-red-400")
    } else {
        ("📎", "text-zinc-400")
    }
}

#[component]
pub fn Composer(state: Signal<HomeState>, on_submit: EventHandler<GenerationRequest>) -> Element {
    let app_state = use_context::<AppState>();
    let t = &translations(*app_state.language.read()).home;

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(request) = state.write().take_submission() {
            on_submit.call(request);
        }
    };

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            // Enter without Shift = submit; Shift+Enter keeps the default
            // newline behavior
            evt.prevent_default();
            if let Some(request) = state.write().take_submission() {
                on_submit.call(request);
            }
        }
    };

    let dragging = state.read().dragging;
    let placeholder = if dragging { t.drop_files } else { t.placeholder };
    let draft = state.read().draft.clone();
    let attachments = state.read().attachments.clone();
    let notices = state.read().notices.clone();
    let can_submit = state.read().can_submit();
    let accept = ALLOWED_MIME_TYPES.join(",");

    let zone_class = if dragging {
        "relative bg-zinc-900 border border-purple-500 rounded-2xl p-2 flex flex-col shadow-2xl transition-colors"
    } else {
        "relative bg-zinc-900 border border-zinc-800 rounded-2xl p-2 flex flex-col shadow-2xl transition-colors"
    };

    rsx! {
        // Notices for rejected files
        {notices.iter().map(|notice| {
            let id = notice.id;
            rsx! {
                div {
                    key: "{id}",
                    class: "flex items-center justify-between gap-3 mb-2 px-4 py-2 rounded-lg bg-red-900/30 border border-red-800 text-sm text-red-300",
                    span { "{notice.message}" }
                    button {
                        class: "text-red-400 hover:text-white transition",
                        onclick: move |_| state.write().dismiss_notice(id),
                        "✕"
                    }
                }
            }
        })}

        form {
            class: "w-full relative group",
            onsubmit: submit,
            ondragover: move |evt| {
                evt.prevent_default();
                state.write().drag_enter();
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                state.write().drag_leave();
            },
            ondrop: move |evt| {
                evt.prevent_default();
                state.write().drag_leave();
                if let Some(file_engine) = evt.files() {
                    ingest_files(state, file_engine);
                }
            },

            div {
                class: zone_class,

                // Attachment chips
                if !attachments.is_empty() {
                    div {
                        class: "flex flex-wrap gap-2 px-4 pt-4 pb-2",
                        for (idx, att) in attachments.iter().enumerate() {
                            div {
                                key: "{att.name}-{idx}",
                                class: "flex items-center gap-2 bg-zinc-800 rounded-lg pl-3 pr-2 py-1.5 border border-zinc-700",
                                span {
                                    class: kind_icon(&att.mime_type).1,
                                    {kind_icon(&att.mime_type).0}
                                }
                                span {
                                    class: "text-xs text-zinc-200 max-w-[150px] truncate",
                                    title: "{att.name}",
                                    "{att.name}"
                                }
                                button {
                                    r#type: "button",
                                    class: "p-1 hover:bg-zinc-700 rounded-full text-zinc-400 hover:text-white transition",
                                    onclick: move |_| state.write().remove_attachment(idx),
                                    "✕"
                                }
                            }
                        }
                    }
                }

                textarea {
                    class: "w-full bg-transparent text-lg text-zinc-100 placeholder-zinc-500 p-4 min-h-[120px] outline-none resize-none",
                    placeholder: "{placeholder}",
                    value: "{draft}",
                    oninput: move |evt| state.write().set_draft(evt.value()),
                    onkeydown: handle_keydown,
                }

                div {
                    class: "flex justify-between items-center px-4 pb-2 border-t border-zinc-800/50 pt-3 mt-2",

                    div {
                        class: "flex items-center gap-3",

                        // The label forwards clicks to the hidden picker
                        label {
                            class: "text-zinc-400 hover:text-white transition p-2 hover:bg-zinc-800 rounded-lg flex items-center gap-2 text-xs font-medium cursor-pointer",
                            input {
                                r#type: "file",
                                multiple: true,
                                class: "hidden",
                                accept: "{accept}",
                                onchange: move |evt| {
                                    if let Some(file_engine) = evt.files() {
                                        ingest_files(state, file_engine);
                                    }
                                },
                            }
                            "📎 {t.attach}"
                        }

                        span {
                            class: "text-xs text-zinc-600",
                            "✦ {t.powered_by}"
                        }
                    }

                    button {
                        r#type: "submit",
                        disabled: !can_submit,
                        class: "bg-white text-black hover:bg-zinc-200 disabled:opacity-50 disabled:cursor-not-allowed rounded-xl p-3 transition-colors duration-200 flex items-center justify-center",
                        svg {
                            width: "20",
                            height: "20",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            line { x1: "5", y1: "12", x2: "19", y2: "12" }
                            polyline { points: "12 5 19 12 12 19" }
                        }
                    }
                }
            }
        }
    }
}
