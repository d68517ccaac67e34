use std::fs;
use std::path::Path;

use crate::error::{Result, RpsError};

/// True when `name` is a non-empty run of ASCII digits.
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// List the process identifiers under `proc_root`, in directory order.
///
/// Entries that are not valid identifiers (`self`, `sys`, `meminfo`...)
/// are skipped.
pub fn list_pids(proc_root: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(proc_root).map_err(|err| RpsError::proc_root(proc_root, err))?;

    let mut pids = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable process root entry");
                continue;
            }
        };
        let name = entry.file_name();
        if let Some(name) = name.to_str()
            && is_valid_identifier(name)
        {
            pids.push(name.to_string());
        }
    }

    Ok(pids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_digit_runs() {
        assert!(is_valid_identifier("1"));
        assert!(is_valid_identifier("4194304"));
        assert!(is_valid_identifier("007"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("self"));
        assert!(!is_valid_identifier("12a"));
        assert!(!is_valid_identifier("-1"));
        assert!(!is_valid_identifier(" 12"));
        assert!(!is_valid_identifier("١٢"));
    }

    #[test]
    fn list_pids_filters_non_identifiers() {
        let root = tempfile::tempdir().unwrap();
        for name in ["1", "42", "self", "thread-self", "acpi", "9x"] {
            fs::create_dir(root.path().join(name)).unwrap();
        }
        fs::write(root.path().join("uptime"), "1.0 2.0\n").unwrap();

        let mut pids = list_pids(root.path()).unwrap();
        pids.sort();
        assert_eq!(pids, vec!["1".to_string(), "42".to_string()]);
    }

    #[test]
    fn list_pids_missing_root_is_error() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("nope");
        let err = list_pids(&missing).unwrap_err();
        assert!(matches!(err, RpsError::ProcRoot { path, .. } if path == missing));
    }
}
