//! Remote playback-service boundary
//!
//! The interpreter only ever talks to [`PlaybackService`]; the Spotify
//! implementation lives in [`spotify`]. Tests substitute their own stub.

pub mod spotify;
pub mod types;

pub use spotify::SpotifyClient;
pub use types::{AlbumSummary, Device, PlaybackState, TrackSummary};

use crate::core::error::Result;
use async_trait::async_trait;

/// Operations the interpreter needs from a streaming service
///
/// All side effects flow through this trait. Implementations own transport
/// and authentication; callers own readiness (an expired token surfaces as
/// an error from the individual call).
#[async_trait]
pub trait PlaybackService {
    /// Search albums by free-text query, returning up to `limit` hits
    async fn search_album(&self, query: &str, limit: u32) -> Result<Vec<AlbumSummary>>;

    /// Search tracks by free-text query, returning up to `limit` hits
    async fn search_track(&self, query: &str, limit: u32) -> Result<Vec<TrackSummary>>;

    /// Tracks of an album, in album order
    async fn album_tracks(&self, album_id: &str) -> Result<Vec<TrackSummary>>;

    /// Up to `limit` of the user's saved ("liked") tracks
    async fn saved_tracks(&self, limit: u32) -> Result<Vec<TrackSummary>>;

    /// Up to `limit` recommended tracks seeded by the given genres
    async fn recommendations(&self, seed_genres: &[&str], limit: u32)
        -> Result<Vec<TrackSummary>>;

    /// Start playback of the given URIs, in order
    async fn start_playback(&self, uris: &[String]) -> Result<()>;

    async fn pause_playback(&self) -> Result<()>;

    async fn skip_to_next(&self) -> Result<()>;

    /// Current playback state; `None` when nothing is playing anywhere
    async fn current_playback(&self) -> Result<Option<PlaybackState>>;

    /// Set the active device's volume (0-100)
    async fn set_volume(&self, percent: u8) -> Result<()>;
}
