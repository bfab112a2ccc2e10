mod input_normalizer;
mod link_builder;
mod ranker;

pub use input_normalizer::{
    DestinationSignal, InputNormalizer, NormalizedInput, StartSignal, DESTINATION_DELIMITER,
};
pub use link_builder::{LinkBuilder, DEFAULT_MAPS_DIR_URL, WAYPOINT_DELIMITER};
pub use ranker::Ranker;
