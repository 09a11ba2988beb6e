//! Presentation types
//!
//! Defines the slide deck structures shared between the UI and storage.

use crate::attachments::Attachment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single slide within a presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideData {
    /// Unique identifier for the slide
    pub id: String,
    /// Slide title
    pub title: String,
    /// Bullet points shown on the slide
    pub bullets: Vec<String>,
    /// Prompt used to generate the background image
    pub visual_prompt: String,
    /// Base64-encoded background image, if one has been generated
    pub image: Option<String>,
}

impl SlideData {
    pub fn new(title: impl Into<String>, visual_prompt: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            bullets: Vec::new(),
            visual_prompt: visual_prompt.into(),
            image: None,
        }
    }
}

/// A generated presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationData {
    /// Unique identifier for the presentation
    pub id: String,
    /// The topic the deck was generated from
    pub topic: String,
    /// When the presentation was created
    pub created_at: DateTime<Utc>,
    /// Ordered slides
    pub slides: Vec<SlideData>,
}

impl PresentationData {
    /// Create a new, empty presentation for a topic
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            topic: topic.into(),
            created_at: Utc::now(),
            slides: Vec::new(),
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Topic shortened for history cards
    pub fn display_topic(&self) -> String {
        let short = crate::truncate_str(&self.topic, 80);
        if short.len() < self.topic.len() {
            format!("{}...", short)
        } else {
            short.to_string()
        }
    }
}

/// Sort presentations for display, most recent first.
///
/// Ordering is by `created_at` only; entries with equal timestamps may land
/// in either relative order.
pub fn sort_by_recency(presentations: &mut [PresentationData]) {
    presentations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// What the home view hands the host when the user submits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub attachments: Vec<Attachment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn deck_at(ts: i64) -> PresentationData {
        let mut deck = PresentationData::new(format!("deck-{ts}"));
        deck.created_at = Utc.timestamp_opt(ts, 0).unwrap();
        deck
    }

    #[test]
    fn test_presentation_creation() {
        let deck = PresentationData::new("Rust in production");
        assert!(!deck.id.is_empty());
        assert_eq!(deck.topic, "Rust in production");
        assert_eq!(deck.slide_count(), 0);
        assert!(deck.created_at <= Utc::now());
    }

    #[test]
    fn test_sort_by_recency() {
        let mut decks = vec![deck_at(100), deck_at(300), deck_at(200)];
        sort_by_recency(&mut decks);
        let topics: Vec<&str> = decks.iter().map(|d| d.topic.as_str()).collect();
        assert_eq!(topics, vec!["deck-300", "deck-200", "deck-100"]);
    }

    #[test]
    fn test_display_topic_truncation() {
        let mut deck = PresentationData::new("a".repeat(120));
        assert!(deck.display_topic().ends_with("..."));
        assert_eq!(deck.display_topic().len(), 83);

        deck.topic = "Short topic".to_string();
        assert_eq!(deck.display_topic(), "Short topic");
    }

    #[test]
    fn test_presentation_round_trip() {
        let mut deck = PresentationData::new("Serialize me");
        deck.slides
            .push(SlideData::new("Intro", "A wide shot of a sunrise"));

        let json = serde_json::to_string(&deck).unwrap();
        let back: PresentationData = serde_json::from_str(&json).unwrap();

        assert_eq!(deck, back);
    }
}
