pub mod alternative;
pub mod scoring;

pub use alternative::find_alternative;
pub use scoring::{match_percentage, predict, resolve_region};
