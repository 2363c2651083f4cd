pub mod ambient;
pub mod sparkle;
