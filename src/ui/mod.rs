mod table;

pub use table::{
    COLUMN_SEPARATOR, Column, ColumnLayout, LayoutBuilder, MAX_CMD_WIDTH, format_field,
};
