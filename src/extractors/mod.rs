// Stream extractors - where availability sets come from

pub mod api;
pub mod traits;

pub use api::ApiStreamExtractor;
pub use traits::StreamExtractor;
