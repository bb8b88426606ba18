/// Grouping and ordering helpers over activity records.
pub mod aggregate;
/// Activity-record schemas.
pub mod model;
/// Seed props for the built-in compositions.
pub mod sample;
