use std::fs;
use std::path::Path;

use crate::error::{Result, RpsError};

/// Token positions in `/proc/<pid>/stat`, as laid out in proc(5).
mod stat_index {
    pub const COMM: usize = 1;
    pub const PPID: usize = 3;
    pub const UTIME: usize = 13;
    pub const NUM_THREADS: usize = 19;
    pub const VSIZE: usize = 22;
    pub const PROCESSOR: usize = 38;
}

/// Smallest token count that covers every field we extract.
pub const STAT_MIN_TOKENS: usize = stat_index::PROCESSOR + 1;

/// One process as read from its status record.
///
/// Fields keep the raw stat tokens; nothing is parsed as a number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: String,
    pub ppid: String,
    pub command: String,
    pub utime: String,
    pub num_threads: String,
    /// Last CPU the task ran on, displayed as-is.
    pub cpu: String,
    pub vsize: String,
}

impl ProcessRecord {
    /// Read `<proc_root>/<pid>/stat`.
    ///
    /// A missing or unreadable record means the process exited after it was
    /// listed, reported as [`RpsError::ProcessVanished`]. Command names are
    /// arbitrary bytes, so invalid UTF-8 is replaced rather than rejected.
    pub fn read(proc_root: &Path, pid: &str) -> Result<Self> {
        let path = proc_root.join(pid).join("stat");
        let bytes = fs::read(&path).map_err(|err| RpsError::process_vanished(pid, err))?;
        Self::parse(pid, &String::from_utf8_lossy(&bytes))
    }

    pub fn parse(pid: &str, content: &str) -> Result<Self> {
        let tokens = tokenize(content);
        if tokens.len() < STAT_MIN_TOKENS {
            return Err(RpsError::malformed_record(
                pid,
                tokens.len(),
                STAT_MIN_TOKENS,
            ));
        }

        Ok(Self {
            pid: pid.to_string(),
            ppid: tokens[stat_index::PPID].to_string(),
            command: strip_delimiters(tokens[stat_index::COMM]).to_string(),
            utime: tokens[stat_index::UTIME].to_string(),
            num_threads: tokens[stat_index::NUM_THREADS].to_string(),
            cpu: tokens[stat_index::PROCESSOR].to_string(),
            vsize: tokens[stat_index::VSIZE].to_string(),
        })
    }
}

/// Split a stat line on whitespace, keeping the `(comm)` span as one token.
///
/// The span runs from the first `(` to the last `)` so a command name with
/// spaces does not shift the positions of later fields.
fn tokenize(content: &str) -> Vec<&str> {
    match (content.find('('), content.rfind(')')) {
        (Some(open), Some(close)) if open < close => {
            let mut tokens = content[..open].split_whitespace().collect::<Vec<_>>();
            tokens.push(&content[open..=close]);
            tokens.extend(content[close + 1..].split_whitespace());
            tokens
        }
        _ => content.split_whitespace().collect(),
    }
}

fn strip_delimiters(token: &str) -> &str {
    let token = token.strip_prefix('(').unwrap_or(token);
    token.strip_suffix(')').unwrap_or(token)
}

/// Build a stat line with every unused field zeroed.
#[cfg(test)]
pub(crate) fn stat_line(record: &ProcessRecord) -> String {
    let mut tokens = vec!["0".to_string(); 52];
    tokens[0] = record.pid.clone();
    tokens[stat_index::COMM] = format!("({})", record.command);
    tokens[2] = "S".to_string();
    tokens[stat_index::PPID] = record.ppid.clone();
    tokens[stat_index::UTIME] = record.utime.clone();
    tokens[stat_index::NUM_THREADS] = record.num_threads.clone();
    tokens[stat_index::VSIZE] = record.vsize.clone();
    tokens[stat_index::PROCESSOR] = record.cpu.clone();
    tokens.join(" ") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEMD_STAT: &str = "1 (systemd) S 0 1 1 0 -1 4194560 40000 1000000 100 2000 10 30 \
        500 600 20 0 1 0 5 165000 3000 18446744073709551615 1 1 0 0 0 0 671173123 4096 1260 \
        0 0 0 17 3 0 0 0 0 0 0 0 0 0 0 0 0 0\n";

    #[test]
    fn parse_extracts_fixed_fields() {
        let record = ProcessRecord::parse("1", SYSTEMD_STAT).unwrap();
        assert_eq!(record.pid, "1");
        assert_eq!(record.ppid, "0");
        assert_eq!(record.command, "systemd");
        assert_eq!(record.utime, "10");
        assert_eq!(record.num_threads, "1");
        assert_eq!(record.vsize, "165000");
        assert_eq!(record.cpu, "3");
    }

    #[test]
    fn parse_keeps_command_with_spaces_intact() {
        let expected = ProcessRecord {
            pid: "812".to_string(),
            ppid: "1".to_string(),
            command: "Web Content".to_string(),
            utime: "4410".to_string(),
            num_threads: "27".to_string(),
            cpu: "5".to_string(),
            vsize: "2811203584".to_string(),
        };
        let record = ProcessRecord::parse("812", &stat_line(&expected)).unwrap();
        assert_eq!(record, expected);
    }

    #[test]
    fn parse_strips_only_outer_delimiters() {
        let expected = ProcessRecord {
            pid: "9".to_string(),
            ppid: "2".to_string(),
            command: "odd) name(".to_string(),
            utime: "0".to_string(),
            num_threads: "1".to_string(),
            cpu: "0".to_string(),
            vsize: "0".to_string(),
        };
        let record = ProcessRecord::parse("9", &stat_line(&expected)).unwrap();
        assert_eq!(record.command, "odd) name(");
        assert_eq!(record.ppid, "2");
    }

    #[test]
    fn parse_rejects_short_record() {
        let err = ProcessRecord::parse("77", "77 (short) S 1 77 77").unwrap_err();
        assert!(
            matches!(err, RpsError::MalformedRecord { pid, found, expected }
                if pid == "77" && found == 6 && expected == STAT_MIN_TOKENS)
        );
        assert!(ProcessRecord::parse("77", "").is_err());
    }

    #[test]
    fn parse_uses_caller_pid() {
        let record = ProcessRecord::parse("1", SYSTEMD_STAT).unwrap();
        assert_eq!(record.pid, "1");
        let record = ProcessRecord::parse("0001", SYSTEMD_STAT).unwrap();
        assert_eq!(record.pid, "0001");
    }

    #[test]
    fn read_missing_record_is_vanished() {
        let root = tempfile::tempdir().unwrap();
        let err = ProcessRecord::read(root.path(), "4242").unwrap_err();
        assert!(matches!(&err, RpsError::ProcessVanished { pid, .. } if pid == "4242"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn read_keeps_record_with_non_utf8_command() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("5")).unwrap();
        let mut stat = b"5 (caf\xe9) S 1".to_vec();
        stat.extend(b" 0".repeat(48));
        stat.push(b'\n');
        std::fs::write(root.path().join("5").join("stat"), stat).unwrap();

        let record = ProcessRecord::read(root.path(), "5").unwrap();
        assert_eq!(record.command, "caf\u{FFFD}");
        assert_eq!(record.ppid, "1");
    }

    #[test]
    fn read_parses_record_from_disk() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("1")).unwrap();
        std::fs::write(root.path().join("1").join("stat"), SYSTEMD_STAT).unwrap();
        let record = ProcessRecord::read(root.path(), "1").unwrap();
        assert_eq!(record.command, "systemd");
    }
}
