mod google_distance_matrix;

pub use google_distance_matrix::{GoogleDistanceMatrix, DEFAULT_DISTANCE_MATRIX_URL};
