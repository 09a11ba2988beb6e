//! Confirmation dialog UI component
//!
//! Generic yes/no modal; the caller supplies all text and both callbacks.

use dioxus::prelude::*;

#[component]
pub fn ConfirmationModal(
    is_open: bool,
    title: String,
    message: String,
    confirm_text: String,
    cancel_text: String,
    is_dangerous: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    let confirm_class = if is_dangerous {
        "px-4 py-2 rounded-lg text-sm bg-red-600 hover:bg-red-500 text-white font-semibold transition"
    } else {
        "px-4 py-2 rounded-lg text-sm bg-purple-600 hover:bg-purple-500 text-white font-semibold transition"
    };

    rsx! {
        // Backdrop
        div {
            class: "absolute inset-0 z-50 flex items-center justify-center bg-black/80 backdrop-blur-sm p-4",

            // Dialog
            div {
                class: "bg-zinc-900 border border-zinc-700 rounded-xl shadow-2xl max-w-md w-full p-6 space-y-4",

                h3 { class: "text-lg font-bold text-white", "{title}" }

                p { class: "text-sm text-zinc-400", "{message}" }

                div {
                    class: "flex justify-end gap-3 pt-2",

                    button {
                        class: "px-4 py-2 rounded-lg text-sm text-zinc-300 hover:bg-zinc-800 transition",
                        onclick: move |_| on_close.call(()),
                        "{cancel_text}"
                    }

                    button {
                        class: confirm_class,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}
