// Orchestrates one resolution request end to end

use crate::extractors::StreamExtractor;
use crate::utils::video_id_from_url;

use super::catalog::ITAGS_BY_QUALITY;
use super::errors::ResolveError;
use super::models::{ItagId, Resolution};
use super::selector::{itag_from_quality, itags_by_similarity, most_similar_available, QualitySpec};

pub struct Resolver {
    extractor: Box<dyn StreamExtractor>,
}

impl Resolver {
    pub fn new(extractor: Box<dyn StreamExtractor>) -> Self {
        Self { extractor }
    }

    /// Resolve a quality spec against one video to a concrete stream.
    ///
    /// Linear flow, no retries: parse the video ID, fix the desired itag,
    /// fetch what the video offers, then take the closest available match.
    pub async fn resolve(
        &self,
        quality: QualitySpec,
        video: &str,
    ) -> Result<Resolution, ResolveError> {
        let video_id = video_id_from_url(video)?;
        let desired = itag_from_quality(quality, &ITAGS_BY_QUALITY)?;
        tracing::debug!("want itag {} for video {}", desired, video_id);

        let streams = self
            .extractor
            .streams_for_video(&video_id)
            .await?;
        tracing::debug!(
            "{} reported {} streams",
            self.extractor.name(),
            streams.len()
        );

        let available: Vec<ItagId> = streams.iter().map(|s| s.itag).collect();
        let chosen = most_similar_available(itags_by_similarity(desired)?, &available)?;

        let url = streams
            .into_iter()
            .find(|s| s.itag == chosen)
            .map(|s| s.url)
            .expect("matcher only returns members of the availability set");
        Ok(Resolution { itag: chosen, url })
    }
}
