mod format_duration;
pub use format_duration::FormatDuration;
