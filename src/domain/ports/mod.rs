mod distance_resolver;

pub use distance_resolver::DistanceResolver;
