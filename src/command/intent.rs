//! Classify one clause of a prompt into a playback intent
//!
//! Rules are an ordered list, first match wins. The order is load-bearing:
//! the bare "play " rule sits below "play album", otherwise it would shadow
//! album playback for every "play album ..." clause.

/// Genres a vibe session can seed from
pub const VIBE_GENRES: [&str; 6] = ["pop", "hip-hop", "rock", "lo-fi", "edm", "indie"];

/// The action one clause maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Search an album by query and play its tracks in album order
    PlayAlbum { query: String },
    /// Shuffle the user's saved tracks and play them
    PlayLiked,
    /// Play recommendations seeded by a randomly chosen genre
    VibeSession,
    /// Search a track by query and play it
    PlayTrack { query: String },
    Pause,
    Next,
    VolumeUp,
    VolumeDown,
    /// No rule matched; carries the clause text for the report line
    Unrecognized { clause: String },
}

type Rule = fn(&str) -> Option<Intent>;

/// Ordered rule list; evaluation order is semantically significant
const RULES: &[Rule] = &[
    |clause| {
        clause.strip_prefix("play album").map(|rest| Intent::PlayAlbum {
            query: rest.trim().to_string(),
        })
    },
    |clause| {
        (clause.contains("liked songs") || clause.contains("my likes"))
            .then_some(Intent::PlayLiked)
    },
    |clause| clause.contains("vibe session").then_some(Intent::VibeSession),
    |clause| {
        clause.strip_prefix("play ").map(|rest| Intent::PlayTrack {
            query: rest.trim().to_string(),
        })
    },
    |clause| clause.contains("pause").then_some(Intent::Pause),
    |clause| clause.contains("next").then_some(Intent::Next),
    |clause| clause.contains("volume up").then_some(Intent::VolumeUp),
    |clause| clause.contains("volume down").then_some(Intent::VolumeDown),
];

/// Classify one trimmed, lower-cased clause
///
/// Deterministic: the same clause text always yields the same intent.
/// Falls through to [`Intent::Unrecognized`] when no rule matches, which
/// includes the empty clause.
pub fn classify(clause: &str) -> Intent {
    for rule in RULES {
        if let Some(intent) = rule(clause) {
            return intent;
        }
    }
    Intent::Unrecognized {
        clause: clause.to_string(),
    }
}
