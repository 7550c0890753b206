// yturl - resolve a YouTube video and a quality level to a direct media URL

pub mod extractors;
pub mod resolver;
pub mod utils;

pub use extractors::{ApiStreamExtractor, StreamExtractor};
pub use resolver::{NetworkConfig, QualitySpec, Resolution, ResolveError, Resolver};
pub use utils::video_id_from_url;
