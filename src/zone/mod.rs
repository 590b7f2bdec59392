pub mod classifier;
pub mod dedup;
pub mod error;
pub mod record;
pub mod reverse;
pub mod zone_map;
