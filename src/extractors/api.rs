// get_video_info extractor - the one network call this tool makes

use std::time::Duration;

use async_trait::async_trait;

use crate::resolver::errors::ResolveError;
use crate::resolver::models::{NetworkConfig, Stream};
use crate::utils::parse_qs_single;

use super::traits::StreamExtractor;

const API_BASE: &str = "https://www.youtube.com/get_video_info";
const USER_AGENT: &str = "yturl (https://github.com/cdown/yturl)";

/// Fetches availability sets from the get_video_info endpoint.
pub struct ApiStreamExtractor {
    client: reqwest::Client,
}

impl ApiStreamExtractor {
    pub fn new(config: &NetworkConfig) -> Result<Self, ResolveError> {
        let remote = |reason: String| ResolveError::RemoteApi { reason };

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(proxy_url) = config.proxy.as_deref() {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| remote(format!("invalid proxy {}: {}", proxy_url, e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| remote(format!("could not build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    fn api_url(video_id: &str) -> String {
        format!("{}?video_id={}", API_BASE, urlencoding::encode(video_id))
    }
}

#[async_trait]
impl StreamExtractor for ApiStreamExtractor {
    fn name(&self) -> &'static str {
        "get_video_info"
    }

    async fn streams_for_video(&self, video_id: &str) -> Result<Vec<Stream>, ResolveError> {
        let api_url = Self::api_url(video_id);
        tracing::debug!("fetching {}", api_url);

        let raw = self
            .client
            .get(&api_url)
            .send()
            .await
            .map_err(|e| ResolveError::RemoteApi {
                reason: e.to_string(),
            })?
            .text()
            .await
            .map_err(|e| ResolveError::RemoteApi {
                reason: e.to_string(),
            })?;
        tracing::debug!("raw API response: {:?}", raw);

        parse_video_info(&raw, &api_url)
    }
}

/// Parse a raw get_video_info response body into an availability set.
///
/// Kept separate from the HTTP call so it can be tested offline.
fn parse_video_info(raw: &str, api_url: &str) -> Result<Vec<Stream>, ResolveError> {
    let malformed = |what: String| ResolveError::RemoteApi {
        reason: format!("malformed API response: {}", what),
    };

    let response = parse_qs_single(raw).map_err(|e| malformed(e.to_string()))?;

    if response.get("status").map(String::as_str) != Some("ok") {
        // The challenge page comes back as HTML, so the decoded fields are
        // useless there; point at the URL the user can open instead.
        let reason = if raw.contains("CAPTCHA") {
            format!("you need to solve a CAPTCHA, visit {}", api_url)
        } else {
            response
                .get("reason")
                .cloned()
                .unwrap_or_else(|| "unspecified error".to_string())
        };
        return Err(ResolveError::RemoteApi { reason });
    }

    let stream_map = response
        .get("url_encoded_fmt_stream_map")
        .ok_or_else(|| malformed("missing url_encoded_fmt_stream_map".to_string()))?;

    // The endpoint lists streams from highest to lowest quality; keep that
    // order for the caller.
    let mut streams = Vec::new();
    for record in stream_map.split(',') {
        let fields = parse_qs_single(record).map_err(|e| malformed(e.to_string()))?;
        let itag = fields
            .get("itag")
            .ok_or_else(|| malformed("stream record without itag".to_string()))?
            .parse()
            .map_err(|_| malformed("non-numeric itag in stream record".to_string()))?;
        let url = fields
            .get("url")
            .ok_or_else(|| malformed("stream record without url".to_string()))?
            .clone();
        streams.push(Stream { itag, url });
    }

    Ok(streams)
}
