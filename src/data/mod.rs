mod pids;
mod process;

pub use pids::{is_valid_identifier, list_pids};
pub use process::{ProcessRecord, STAT_MIN_TOKENS};

#[cfg(test)]
pub(crate) use process::stat_line;
