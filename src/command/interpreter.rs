//! Clause-by-clause interpretation of a free-text prompt
//!
//! The prompt is lower-cased and split on the literal token "and"; each
//! clause is trimmed, classified, and executed against the service before
//! the next clause starts. Exactly one status line comes out per clause,
//! in clause order. A failed remote call becomes the report line for its
//! own clause and never disturbs sibling clauses.

use crate::client::PlaybackService;
use crate::command::intent::{classify, Intent, VIBE_GENRES};
use crate::core::error::Result;
use rand::seq::SliceRandom;
use rand::Rng;

/// Volume change applied by one volume clause, in percent
const VOLUME_STEP: i16 = 10;
/// How many saved tracks a liked-songs session pulls
const LIKED_TRACKS_LIMIT: u32 = 50;
/// How many recommendations seed a vibe session
const VIBE_TRACKS_LIMIT: u32 = 20;

/// Interpret a prompt against a playback service
///
/// Returns one status line per clause, joined with newlines. The RNG drives
/// the liked-songs shuffle and the vibe-session genre pick only; intent
/// selection itself is deterministic.
pub async fn interpret<R>(prompt: &str, service: &dyn PlaybackService, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let prompt = prompt.to_lowercase();
    let mut response = Vec::new();

    for clause in prompt.split("and") {
        let clause = clause.trim();
        let intent = classify(clause);
        tracing::debug!(clause, ?intent, "classified clause");

        match run_intent(&intent, service, rng).await {
            Ok(line) => response.push(line),
            Err(e) => {
                tracing::warn!(clause, error = %e, "clause failed");
                response.push(format!("⚠️ Command failed: {}", e));
            }
        }
    }

    response.join("\n")
}

async fn run_intent<R>(intent: &Intent, service: &dyn PlaybackService, rng: &mut R) -> Result<String>
where
    R: Rng + ?Sized,
{
    match intent {
        Intent::PlayAlbum { query } => {
            let albums = service.search_album(query, 1).await?;
            match albums.into_iter().next() {
                Some(album) => {
                    let tracks = service.album_tracks(&album.id).await?;
                    let uris: Vec<String> = tracks.into_iter().map(|t| t.uri).collect();
                    service.start_playback(&uris).await?;
                    Ok(format!("🎶 Playing album: {}", album.name))
                }
                None => Ok("🚫 Album not found.".to_string()),
            }
        }

        Intent::PlayLiked => {
            let tracks = service.saved_tracks(LIKED_TRACKS_LIMIT).await?;
            let mut uris: Vec<String> = tracks.into_iter().map(|t| t.uri).collect();
            uris.shuffle(rng);
            service.start_playback(&uris).await?;
            Ok("💖 Playing your liked songs.".to_string())
        }

        Intent::VibeSession => {
            let genre = VIBE_GENRES[rng.gen_range(0..VIBE_GENRES.len())];
            let tracks = service.recommendations(&[genre], VIBE_TRACKS_LIMIT).await?;
            let uris: Vec<String> = tracks.into_iter().map(|t| t.uri).collect();
            service.start_playback(&uris).await?;
            Ok(format!("🌈 Starting a '{}' vibe session.", genre))
        }

        Intent::PlayTrack { query } => {
            let tracks = service.search_track(query, 1).await?;
            match tracks.into_iter().next() {
                Some(track) => {
                    service
                        .start_playback(std::slice::from_ref(&track.uri))
                        .await?;
                    Ok(format!("🎵 Playing: {}", track.name))
                }
                None => Ok("🚫 Song not found.".to_string()),
            }
        }

        Intent::Pause => {
            service.pause_playback().await?;
            Ok("⏸️ Music paused.".to_string())
        }

        Intent::Next => {
            service.skip_to_next().await?;
            Ok("⏭️ Skipped to next track.".to_string())
        }

        Intent::VolumeUp => adjust_volume(service, VOLUME_STEP).await,
        Intent::VolumeDown => adjust_volume(service, -VOLUME_STEP).await,

        Intent::Unrecognized { clause } => Ok(format!("🤔 Didn't understand: '{}'", clause)),
    }
}

/// Volume is re-fetched on every clause; nothing is cached across clauses
async fn adjust_volume(service: &dyn PlaybackService, step: i16) -> Result<String> {
    let volume = service
        .current_playback()
        .await?
        .and_then(|state| state.device)
        .and_then(|device| device.volume_percent);

    match volume {
        Some(current) => {
            let new_volume = step_volume(current, step);
            service.set_volume(new_volume).await?;
            Ok(format!("🔊 Volume set to {}%", new_volume))
        }
        None => Ok("⚠️ Can't fetch current volume.".to_string()),
    }
}

fn step_volume(current: u8, step: i16) -> u8 {
    (i16::from(current) + step).clamp(0, 100) as u8
}
