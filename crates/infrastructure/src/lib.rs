//! Routefinder Infrastructure Layer
pub mod api;
pub mod system;
