//! Tunepilot - natural language playback commander
//!
//! Interprets short free-text prompts ("play album ok computer and volume up")
//! and dispatches each clause to a remote music-streaming service.

pub mod client;
pub mod command;
pub mod core;
