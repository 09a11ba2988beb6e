//! Shared data types

pub mod presentation;
