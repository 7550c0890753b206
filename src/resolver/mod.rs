// Quality-resolution core

pub mod catalog;
pub mod errors;
pub mod models;
pub mod orchestrator;
pub mod selector;

pub use errors::ResolveError;
pub use models::{ItagId, NetworkConfig, Resolution, Stream};
pub use orchestrator::Resolver;
pub use selector::{itag_from_quality, itags_by_similarity, most_similar_available, QualitySpec};
