//! Domain types returned across the playback-service boundary
//!
//! These are the interpreter-facing shapes. Raw API responses live in the
//! concrete client and are mapped into these before crossing the trait.

use serde::{Deserialize, Serialize};

/// An album hit from search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumSummary {
    pub id: String,
    pub name: String,
}

/// A playable track. The `uri` is an opaque token the service accepts
/// in playback requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub uri: String,
    pub name: String,
}

/// Snapshot of the active playback session, if any
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    pub device: Option<Device>,
}

/// The device playback is routed to
#[derive(Debug, Clone)]
pub struct Device {
    /// Absent when the device does not expose volume control
    pub volume_percent: Option<u8>,
}
