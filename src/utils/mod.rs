mod format;
mod logging;

pub use format::{ELLIPSIS, fit_text, pad_to_width, take_width, text_width};
pub use logging::{LOG_ENV, init_logging};
