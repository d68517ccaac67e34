mod config;
mod snapshot;

pub use config::Config;
pub use snapshot::{Snapshot, gather};
