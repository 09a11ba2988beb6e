//! Regeneration dialog UI component
//!
//! Edits a slide's visual prompt before asking the generation service for a
//! new background image.

use crate::app::AppState;
use crate::i18n::translations;
use dioxus::prelude::*;

/// Editable prompt that follows an external seed while the dialog is open.
///
/// Re-seeding is a synchronization rule, not one-time init: the field resets
/// whenever the dialog opens, and again if the seed changes while it is open.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PromptDraft {
    text: String,
    was_open: bool,
    last_seed: Option<String>,
}

impl PromptDraft {
    pub fn sync(&mut self, is_open: bool, seed: &str) {
        let reopened = is_open && !self.was_open;
        let seed_changed = is_open && self.last_seed.as_deref() != Some(seed);
        if reopened || seed_changed {
            self.text = seed.to_string();
            self.last_seed = Some(seed.to_string());
        }
        self.was_open = is_open;
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[component]
pub fn RegenerateModal(
    is_open: bool,
    initial_prompt: String,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<String>,
) -> Element {
    let app_state = use_context::<AppState>();
    let t = &translations(*app_state.language.read()).modals;

    let mut draft = use_signal(PromptDraft::default);

    use_effect(use_reactive!(|(is_open, initial_prompt)| {
        draft.write().sync(is_open, &initial_prompt);
    }));

    if !is_open {
        return rsx! {};
    }

    let prompt = draft.read().text().to_string();
    let prompt_for_confirm = prompt.clone();

    rsx! {
        div {
            class: "absolute inset-0 z-50 flex items-center justify-center bg-black/80 backdrop-blur-sm p-4",

            div {
                class: "bg-zinc-900 border border-zinc-700 rounded-xl shadow-2xl max-w-lg w-full p-6 space-y-4",

                div {
                    class: "flex justify-between items-center",

                    h3 {
                        class: "text-lg font-bold text-white",
                        "{t.regenerate_title}"
                    }

                    button {
                        class: "text-zinc-500 hover:text-white transition",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                p { class: "text-sm text-zinc-400", "{t.regenerate_desc}" }

                textarea {
                    class: "w-full h-32 bg-zinc-950 border border-zinc-800 rounded-lg p-3 text-zinc-300 text-sm focus:border-purple-500 outline-none resize-none",
                    placeholder: "{t.new_slide_placeholder}",
                    value: "{prompt}",
                    oninput: move |evt| draft.write().edit(evt.value()),
                }

                div {
                    class: "flex justify-end gap-3 pt-2",

                    button {
                        class: "px-4 py-2 rounded-lg text-sm text-zinc-300 hover:bg-zinc-800 transition",
                        onclick: move |_| on_close.call(()),
                        "{t.cancel}"
                    }

                    button {
                        class: "px-4 py-2 rounded-lg text-sm bg-purple-600 hover:bg-purple-500 text-white font-semibold shadow-lg transition",
                        onclick: move |_| on_confirm.call(prompt_for_confirm.clone()),
                        "{t.generate_new_image}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_applied_on_open() {
        let mut draft = PromptDraft::default();
        draft.sync(false, "A");
        assert_eq!(draft.text(), "");

        draft.sync(true, "A");
        assert_eq!(draft.text(), "A");
    }

    #[test]
    fn test_seed_change_while_open_reseeds() {
        let mut draft = PromptDraft::default();
        draft.sync(true, "A");
        draft.edit("A, but edited");

        draft.sync(true, "B");
        assert_eq!(draft.text(), "B");
    }

    #[test]
    fn test_reopen_discards_previous_edit() {
        let mut draft = PromptDraft::default();
        draft.sync(true, "A");
        draft.edit("scribbles");
        draft.sync(false, "A");

        draft.sync(true, "A");
        assert_eq!(draft.text(), "A");
    }

    #[test]
    fn test_edits_survive_unrelated_syncs() {
        let mut draft = PromptDraft::default();
        draft.sync(true, "A");
        draft.edit("A refined");

        // Same seed, still open: the edit stays
        draft.sync(true, "A");
        assert_eq!(draft.text(), "A refined");
    }
}
