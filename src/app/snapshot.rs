use std::io::{self, Write};
use std::iter;
use std::path::Path;

use crate::app::Config;
use crate::data::{ProcessRecord, list_pids};
use crate::error::Result;
use crate::ui::{ColumnLayout, LayoutBuilder};

/// All processes seen by one scan, with the layout they are rendered in.
pub struct Snapshot {
    records: Vec<ProcessRecord>,
    layout: ColumnLayout,
}

impl Snapshot {
    /// Enumerate and read every process, then freeze the column widths.
    ///
    /// Only a process root that cannot be listed fails the scan.
    pub fn capture(config: &Config) -> Result<Self> {
        let pids = list_pids(&config.proc_root)?;
        let mut builder = LayoutBuilder::new(config.max_comm_width);
        let records = gather(&config.proc_root, &pids, &mut builder);
        tracing::debug!(
            listed = pids.len(),
            read = records.len(),
            "process snapshot gathered"
        );

        Ok(Self {
            records,
            layout: builder.finish(),
        })
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// The header followed by one row per record, in gather order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        iter::once(self.layout.render_header())
            .chain(self.records.iter().map(|record| self.layout.render_row(record)))
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// Read each pid's record in order, widening `builder` for every success.
///
/// Processes that exit mid-scan or have short records are skipped.
pub fn gather<S: AsRef<str>>(
    proc_root: &Path,
    pids: &[S],
    builder: &mut LayoutBuilder,
) -> Vec<ProcessRecord> {
    let mut records = Vec::with_capacity(pids.len());
    for pid in pids {
        let pid = pid.as_ref();
        match ProcessRecord::read(proc_root, pid) {
            Ok(record) => {
                builder.widen(&record);
                records.push(record);
            }
            Err(err) => tracing::debug!(pid, error = %err, "skipping process"),
        }
    }
    records
}
