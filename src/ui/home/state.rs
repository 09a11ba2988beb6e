//! Home view state
//!
//! All mutable state of the landing view in one struct, updated only through
//! named transitions so the flows stay testable without a UI runtime.

use crate::attachments::{Attachment, IncomingFile};
use crate::types::presentation::GenerationRequest;

/// A user-facing notice with a stable id, so dismissal survives the list
/// shifting underneath it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

/// Local state owned by the Home component
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HomeState {
    /// Draft topic text
    pub draft: String,
    /// Attachments accepted so far, in completion order
    pub attachments: Vec<Attachment>,
    /// Whether a drag is currently over the drop zone
    pub dragging: bool,
    /// Presentation id awaiting delete confirmation
    pub pending_delete: Option<String>,
    /// User-facing notices, one per rejected file
    pub notices: Vec<Notice>,
    next_notice_id: u64,
}

impl HomeState {
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn drag_enter(&mut self) {
        self.dragging = true;
    }

    /// Clears the drag flag; used for both drag-leave and drop.
    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    pub fn push_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Remove an attachment by index; out-of-range indexes are ignored.
    pub fn remove_attachment(&mut self, index: usize) {
        if index < self.attachments.len() {
            self.attachments.remove(index);
        }
    }

    /// Submit is allowed with a non-blank draft or at least one attachment.
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty() || !self.attachments.is_empty()
    }

    /// Take the current draft and attachments as a generation request,
    /// clearing both so stale input cannot reappear after navigation.
    /// Returns `None` (and changes nothing) when submit is not allowed.
    pub fn take_submission(&mut self) -> Option<GenerationRequest> {
        if !self.can_submit() {
            return None;
        }
        Some(GenerationRequest {
            topic: std::mem::take(&mut self.draft),
            attachments: std::mem::take(&mut self.attachments),
        })
    }

    /// Record one notice for a file rejected by the allow-list.
    pub fn notify_rejected(&mut self, file: &IncomingFile) {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notices.push(Notice {
            id,
            message: format!("File type {} not supported.", file.mime_type),
        });
    }

    /// Dismiss a notice by its id; unknown ids are ignored.
    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }

    /// Open the delete confirmation for a presentation.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
    }

    /// Confirm the pending delete, yielding the id to delete.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Close the confirmation without deleting anything.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(name: &str) -> Attachment {
        Attachment::from_bytes(name, "image/png", b"pixels")
    }

    #[test]
    fn test_submit_gate() {
        let mut state = HomeState::default();
        assert!(!state.can_submit());
        assert_eq!(state.take_submission(), None);

        state.set_draft("   \n  ");
        assert!(!state.can_submit());

        state.set_draft("The future of renewable energy");
        assert!(state.can_submit());

        state.set_draft("");
        state.push_attachment(attachment("chart.png"));
        assert!(state.can_submit());
    }

    #[test]
    fn test_take_submission_forwards_and_resets() {
        let mut state = HomeState::default();
        state.set_draft("Sourdough 101");
        state.push_attachment(attachment("starter.png"));

        let request = state.take_submission().unwrap();
        assert_eq!(request.topic, "Sourdough 101");
        assert_eq!(request.attachments.len(), 1);

        // Draft and attachments are the view's to clear
        assert!(state.draft.is_empty());
        assert!(state.attachments.is_empty());
        assert_eq!(state.take_submission(), None);
    }

    #[test]
    fn test_drag_state_machine() {
        let mut state = HomeState::default();
        assert!(!state.dragging);
        state.drag_enter();
        assert!(state.dragging);
        state.drag_enter();
        assert!(state.dragging);
        state.drag_leave();
        assert!(!state.dragging);
    }

    #[test]
    fn test_attachments_append_and_remove_by_index() {
        let mut state = HomeState::default();
        state.push_attachment(attachment("a.png"));
        state.push_attachment(attachment("b.png"));
        state.push_attachment(attachment("c.png"));

        state.remove_attachment(1);
        let names: Vec<&str> = state.attachments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "c.png"]);

        // Out of range is a no-op
        state.remove_attachment(7);
        assert_eq!(state.attachments.len(), 2);
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let mut state = HomeState::default();
        state.request_delete("abc");
        assert_eq!(state.pending_delete.as_deref(), Some("abc"));

        assert_eq!(state.confirm_delete(), Some("abc".to_string()));
        assert_eq!(state.pending_delete, None);
        // Confirming again yields nothing
        assert_eq!(state.confirm_delete(), None);

        state.request_delete("def");
        state.cancel_delete();
        assert_eq!(state.pending_delete, None);
        assert_eq!(state.confirm_delete(), None);
    }

    #[test]
    fn test_one_notice_per_rejected_file() {
        let mut state = HomeState::default();
        let rejected = IncomingFile {
            name: "clip.mp4".to_string(),
            mime_type: "video/mp4".to_string(),
        };
        state.notify_rejected(&rejected);
        state.notify_rejected(&rejected);

        assert_eq!(state.notices.len(), 2);
        assert_eq!(state.notices[0].message, "File type video/mp4 not supported.");
    }

    #[test]
    fn test_notice_ids_stay_stable_across_dismissals() {
        let mut state = HomeState::default();
        for name in ["a.mp4", "b.mp4", "c.mp4"] {
            state.notify_rejected(&IncomingFile {
                name: name.to_string(),
                mime_type: "video/mp4".to_string(),
            });
        }
        let ids: Vec<u64> = state.notices.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids[0] != ids[1] && ids[1] != ids[2]);

        // Dismissing the middle notice leaves the others' ids untouched
        state.dismiss_notice(ids[1]);
        let remaining: Vec<u64> = state.notices.iter().map(|n| n.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);

        // Unknown id is a no-op
        state.dismiss_notice(9999);
        assert_eq!(state.notices.len(), 2);
    }
}
