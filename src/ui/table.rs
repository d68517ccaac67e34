//! Aligned text table for a process snapshot.
//!
//! Layout happens in two phases. A [`LayoutBuilder`] is widened once per
//! record while the snapshot is gathered, then frozen into a
//! [`ColumnLayout`] that renders the header and rows. Widths are never
//! narrowed, and only the command column is capped.

use crate::data::ProcessRecord;
use crate::utils::{fit_text, pad_to_width, text_width};

/// Default cap for the command column.
pub const MAX_CMD_WIDTH: usize = 15;

pub const COLUMN_SEPARATOR: &str = "   ";

const COLUMN_COUNT: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Pid,
    Ppid,
    Command,
    Utime,
    Threads,
    Cpu,
    Vsize,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Pid,
        Column::Ppid,
        Column::Command,
        Column::Utime,
        Column::Threads,
        Column::Cpu,
        Column::Vsize,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::Pid => "PID",
            Column::Ppid => "PPID",
            Column::Command => "COMM",
            Column::Utime => "UTIME",
            Column::Threads => "THREADS",
            Column::Cpu => "CPU",
            Column::Vsize => "VSIZE",
        }
    }

    pub fn value(self, record: &ProcessRecord) -> &str {
        match self {
            Column::Pid => &record.pid,
            Column::Ppid => &record.ppid,
            Column::Command => &record.command,
            Column::Utime => &record.utime,
            Column::Threads => &record.num_threads,
            Column::Cpu => &record.cpu,
            Column::Vsize => &record.vsize,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Column widths while records are still being gathered.
#[derive(Clone, Debug)]
pub struct LayoutBuilder {
    widths: [usize; COLUMN_COUNT],
    max_comm_width: usize,
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new(MAX_CMD_WIDTH)
    }
}

impl LayoutBuilder {
    /// Start from the header label widths.
    ///
    /// The command cap never goes below the `COMM` label, so a header is
    /// never truncated.
    pub fn new(max_comm_width: usize) -> Self {
        Self {
            widths: Column::ALL.map(|column| text_width(column.label())),
            max_comm_width: max_comm_width.max(text_width(Column::Command.label())),
        }
    }

    pub fn widen(&mut self, record: &ProcessRecord) {
        for column in Column::ALL {
            let slot = &mut self.widths[column.index()];
            *slot = (*slot).max(text_width(column.value(record)));
            if column == Column::Command {
                *slot = (*slot).min(self.max_comm_width);
            }
        }
    }

    pub fn width(&self, column: Column) -> usize {
        self.widths[column.index()]
    }

    /// Freeze the widths. No record can widen the result.
    pub fn finish(self) -> ColumnLayout {
        ColumnLayout {
            widths: self.widths,
        }
    }
}

/// Frozen column widths used to render the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    widths: [usize; COLUMN_COUNT],
}

impl ColumnLayout {
    pub fn width(&self, column: Column) -> usize {
        self.widths[column.index()]
    }

    pub fn render_header(&self) -> String {
        self.render_with(Column::label)
    }

    pub fn render_row(&self, record: &ProcessRecord) -> String {
        self.render_with(|column| column.value(record))
    }

    fn render_with<'a>(&self, field: impl Fn(Column) -> &'a str) -> String {
        Column::ALL
            .iter()
            .map(|&column| format_field(field(column), self.width(column)))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    }
}

/// Fit `text` into exactly `width` display cells.
///
/// Over-wide text keeps its first `width - 3` cells followed by `...`;
/// anything else is padded with spaces on the right.
pub fn format_field(text: &str, width: usize) -> String {
    pad_to_width(&fit_text(text, width), width)
}
