//! Scan listener trait.

/// Per-scan sink for human-readable diagnostic lines.
///
/// Filters report decisions worth showing to the person running the scan
/// (for example why a pull request will not be built). Lines are plain
/// text without a trailing newline.
pub trait ScanListener: Send + Sync {
    /// Writes one diagnostic line.
    fn log(&self, line: &str);
}

/// A listener that drops every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullListener;

impl ScanListener for NullListener {
    fn log(&self, _line: &str) {}
}
