pub mod normalizer;
pub mod types;
