// StreamExtractor trait definition

use async_trait::async_trait;

use crate::resolver::errors::ResolveError;
use crate::resolver::models::Stream;

/// Source of per-video stream availability.
///
/// The resolver core only ever sees this trait; everything network-shaped
/// lives behind it.
#[async_trait]
pub trait StreamExtractor: Send + Sync {
    /// Name of the extractor (for logging)
    fn name(&self) -> &'static str;

    /// Fetch the streams available for a video, in the order the remote
    /// source reports them.
    async fn streams_for_video(&self, video_id: &str) -> Result<Vec<Stream>, ResolveError>;
}
