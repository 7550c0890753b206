// Error types for quality resolution

use std::fmt;

use super::models::ItagId;
use super::selector::QUALITY_TIERS;

/// One kind per way a resolution request can fail. All kinds are terminal
/// for a single invocation; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Quality spec is neither a recognized tier nor a usable itag
    UnknownQuality {
        spec: String,
        /// Itags the spec was checked against, when a scope was in play
        candidates: Option<Vec<ItagId>>,
    },

    /// The video-info endpoint reported failure, was unreachable, or
    /// returned a payload missing an expected field
    RemoteApi { reason: String },

    /// The video's availability set shares no member with the catalog
    NoFormatMatch {
        /// The full similarity sequence that was walked
        tried: Vec<ItagId>,
        /// What the video actually offered
        available: Vec<ItagId>,
    },

    /// Input did not yield a plausible video identifier
    InvalidVideoId { input: String },
}

impl ResolveError {
    /// Process exit code for this kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownQuality { .. } => 2,
            Self::RemoteApi { .. } => 3,
            Self::NoFormatMatch { .. } => 4,
            Self::InvalidVideoId { .. } => 5,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownQuality { spec, candidates } => {
                write!(
                    f,
                    "unknown quality {:?} (known tiers: {})",
                    spec,
                    QUALITY_TIERS.join("/")
                )?;
                if let Some(candidates) = candidates {
                    write!(f, " (candidate itags: {:?})", candidates)?;
                }
                Ok(())
            }
            Self::RemoteApi { reason } => write!(f, "YouTube API error: {}", reason),
            Self::NoFormatMatch { tried, available } => write!(
                f,
                "no locally known formats available (tried: {:?}, video offers: {:?})",
                tried, available
            ),
            Self::InvalidVideoId { input } => write!(
                f,
                "could not parse a video ID from {:?} (expected 11 URL-safe characters)",
                input
            ),
        }
    }
}

impl std::error::Error for ResolveError {}
