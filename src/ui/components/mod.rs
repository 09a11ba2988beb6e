//! Shared UI components
//!
//! Modal dialogs used across views.

pub mod confirmation;
pub mod regenerate;
