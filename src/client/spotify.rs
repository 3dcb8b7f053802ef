//! Spotify Web API client
//!
//! Thin HTTP wrapper implementing [`PlaybackService`]. Response shapes from
//! the API are loosely typed on purpose: every field the interpreter touches
//! is optional on the wire and guarded during mapping, so a partial payload
//! degrades to "not found" instead of a decode failure.

use crate::client::types::{AlbumSummary, Device, PlaybackState, TrackSummary};
use crate::client::PlaybackService;
use crate::core::config::ClientConfig;
use crate::core::error::{Result, TuneError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

/// Client for the Spotify Web API
pub struct SpotifyClient {
    client: Client,
    config: ClientConfig,
}

impl SpotifyClient {
    /// Create a client with explicit configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a client from environment variables (see [`ClientConfig::from_env`])
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base, path)
    }

    /// Send a request with auth attached; non-2xx becomes an ApiError
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TuneError::ApiError {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    fn map_album(item: AlbumItem) -> Option<AlbumSummary> {
        let id = item.id?;
        Some(AlbumSummary {
            id,
            name: item.name.unwrap_or_default(),
        })
    }

    fn map_track(item: TrackItem) -> Option<TrackSummary> {
        let uri = item.uri?;
        Some(TrackSummary {
            uri,
            name: item.name.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl PlaybackService for SpotifyClient {
    async fn search_album(&self, query: &str, limit: u32) -> Result<Vec<AlbumSummary>> {
        tracing::debug!(query, limit, "searching albums");
        let response = self
            .send(
                self.client
                    .get(self.url("/search"))
                    .query(&[("q", query), ("type", "album")])
                    .query(&[("limit", limit)]),
            )
            .await?;

        let body: SearchResponse = response.json().await?;
        Ok(body
            .albums
            .map(|page| page.items)
            .unwrap_or_default()
            .into_iter()
            .filter_map(Self::map_album)
            .collect())
    }

    async fn search_track(&self, query: &str, limit: u32) -> Result<Vec<TrackSummary>> {
        tracing::debug!(query, limit, "searching tracks");
        let response = self
            .send(
                self.client
                    .get(self.url("/search"))
                    .query(&[("q", query), ("type", "track")])
                    .query(&[("limit", limit)]),
            )
            .await?;

        let body: SearchResponse = response.json().await?;
        Ok(body
            .tracks
            .map(|page| page.items)
            .unwrap_or_default()
            .into_iter()
            .filter_map(Self::map_track)
            .collect())
    }

    async fn album_tracks(&self, album_id: &str) -> Result<Vec<TrackSummary>> {
        tracing::debug!(album_id, "fetching album tracks");
        let response = self
            .send(
                self.client
                    .get(self.url(&format!("/albums/{}/tracks", album_id))),
            )
            .await?;

        let body: TrackPage = response.json().await?;
        Ok(body.items.into_iter().filter_map(Self::map_track).collect())
    }

    async fn saved_tracks(&self, limit: u32) -> Result<Vec<TrackSummary>> {
        tracing::debug!(limit, "fetching saved tracks");
        let response = self
            .send(
                self.client
                    .get(self.url("/me/tracks"))
                    .query(&[("limit", limit)]),
            )
            .await?;

        let body: SavedTracksResponse = response.json().await?;
        Ok(body
            .items
            .into_iter()
            .filter_map(|item| item.track.and_then(Self::map_track))
            .collect())
    }

    async fn recommendations(
        &self,
        seed_genres: &[&str],
        limit: u32,
    ) -> Result<Vec<TrackSummary>> {
        tracing::debug!(?seed_genres, limit, "fetching recommendations");
        let response = self
            .send(
                self.client
                    .get(self.url("/recommendations"))
                    .query(&[("seed_genres", seed_genres.join(",").as_str())])
                    .query(&[("limit", limit)]),
            )
            .await?;

        let body: RecommendationsResponse = response.json().await?;
        Ok(body
            .tracks
            .into_iter()
            .filter_map(Self::map_track)
            .collect())
    }

    async fn start_playback(&self, uris: &[String]) -> Result<()> {
        tracing::debug!(count = uris.len(), "starting playback");
        self.send(
            self.client
                .put(self.url("/me/player/play"))
                .json(&PlayBody { uris }),
        )
        .await?;
        Ok(())
    }

    async fn pause_playback(&self) -> Result<()> {
        tracing::debug!("pausing playback");
        self.send(self.client.put(self.url("/me/player/pause")))
            .await?;
        Ok(())
    }

    async fn skip_to_next(&self) -> Result<()> {
        tracing::debug!("skipping to next track");
        self.send(self.client.post(self.url("/me/player/next")))
            .await?;
        Ok(())
    }

    async fn current_playback(&self) -> Result<Option<PlaybackState>> {
        tracing::debug!("fetching current playback");
        let response = self.send(self.client.get(self.url("/me/player"))).await?;

        // 204 means no active playback session anywhere
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body: PlayerResponse = response.json().await?;
        Ok(Some(PlaybackState {
            device: body.device.map(|d| Device {
                volume_percent: d.volume_percent,
            }),
        }))
    }

    async fn set_volume(&self, percent: u8) -> Result<()> {
        tracing::debug!(percent, "setting volume");
        self.send(
            self.client
                .put(self.url("/me/player/volume"))
                .query(&[("volume_percent", u32::from(percent))]),
        )
        .await?;
        Ok(())
    }
}

// Wire format. Everything optional: the API omits sections freely.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    albums: Option<AlbumPage>,
    #[serde(default)]
    tracks: Option<TrackPage>,
}

#[derive(Debug, Deserialize)]
struct AlbumPage {
    #[serde(default)]
    items: Vec<AlbumItem>,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<TrackItem>,
}

#[derive(Debug, Deserialize)]
struct AlbumItem {
    id: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TrackItem {
    uri: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SavedTracksResponse {
    #[serde(default)]
    items: Vec<SavedTrackItem>,
}

#[derive(Debug, Deserialize)]
struct SavedTrackItem {
    track: Option<TrackItem>,
}

#[derive(Debug, Deserialize)]
struct RecommendationsResponse {
    #[serde(default)]
    tracks: Vec<TrackItem>,
}

#[derive(Debug, Deserialize)]
struct PlayerResponse {
    device: Option<DeviceWire>,
}

#[derive(Debug, Deserialize)]
struct DeviceWire {
    volume_percent: Option<u8>,
}

#[derive(Debug, Serialize)]
struct PlayBody<'a> {
    uris: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_API_BASE;

    fn test_client() -> SpotifyClient {
        SpotifyClient::new(ClientConfig::new("test-token", "https://api.example.com/v1"))
    }

    #[test]
    fn test_url_joining() {
        let client = test_client();
        assert_eq!(
            client.url("/me/player/play"),
            "https://api.example.com/v1/me/player/play"
        );
    }

    #[test]
    fn test_from_config_uses_default_base() {
        let client = SpotifyClient::new(ClientConfig::new("token", DEFAULT_API_BASE));
        assert_eq!(client.config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_search_response_tolerates_missing_sections() {
        let body: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(body.albums.is_none());
        assert!(body.tracks.is_none());
    }

    #[test]
    fn test_map_album_requires_id() {
        let missing_id = AlbumItem {
            id: None,
            name: Some("Kid A".into()),
        };
        assert!(SpotifyClient::map_album(missing_id).is_none());

        let missing_name = AlbumItem {
            id: Some("abc123".into()),
            name: None,
        };
        let album = SpotifyClient::map_album(missing_name).unwrap();
        assert_eq!(album.id, "abc123");
        assert_eq!(album.name, "");
    }

    #[test]
    fn test_map_track_requires_uri() {
        let missing_uri = TrackItem {
            uri: None,
            name: Some("Idioteque".into()),
        };
        assert!(SpotifyClient::map_track(missing_uri).is_none());
    }

    #[test]
    fn test_player_response_without_device() {
        let body: PlayerResponse = serde_json::from_str(r#"{"is_playing": false}"#).unwrap();
        assert!(body.device.is_none());
    }

    #[test]
    fn test_player_response_device_without_volume() {
        let body: PlayerResponse =
            serde_json::from_str(r#"{"device": {"id": "d1", "name": "Kitchen"}}"#).unwrap();
        assert!(body.device.unwrap().volume_percent.is_none());
    }

    #[test]
    fn test_saved_tracks_skips_null_entries() {
        let json = r#"{
            "items": [
                {"track": {"uri": "spotify:track:1", "name": "One"}},
                {"track": null},
                {"track": {"uri": null, "name": "No uri"}}
            ]
        }"#;
        let body: SavedTracksResponse = serde_json::from_str(json).unwrap();
        let tracks: Vec<_> = body
            .items
            .into_iter()
            .filter_map(|item| item.track.and_then(SpotifyClient::map_track))
            .collect();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].uri, "spotify:track:1");
    }
}
