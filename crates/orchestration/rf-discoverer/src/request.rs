//! Per-scan request context handed to every filter.

use rf_error::{RfError, Result};
use rf_traits::{RefMetadataProvider, ScanListener};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag for a scan.
///
/// Cloning shares the underlying flag. The flag uses `Ordering::Relaxed`;
/// it is polled between refs and before each metadata fetch.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a new, unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// The underlying atomic, for registering with signal handlers.
    pub fn as_atomic(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.0)
    }
}

/// Context for evaluating filters during one scan.
///
/// Bundles the metadata provider, the diagnostic listener and the
/// cancellation flag. Filters receive it by reference for every ref.
pub struct ScanRequest<'a> {
    provider: &'a dyn RefMetadataProvider,
    listener: &'a dyn ScanListener,
    cancel: CancelFlag,
}

impl<'a> ScanRequest<'a> {
    /// Create a request with a fresh cancellation flag.
    pub fn new(provider: &'a dyn RefMetadataProvider, listener: &'a dyn ScanListener) -> Self {
        Self {
            provider,
            listener,
            cancel: CancelFlag::new(),
        }
    }

    /// Use a shared cancellation flag.
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// The metadata provider for this scan.
    pub fn provider(&self) -> &'a dyn RefMetadataProvider {
        self.provider
    }

    /// Write a diagnostic line to the scan listener.
    pub fn log(&self, line: &str) {
        self.listener.log(line);
    }

    /// Fail with [`RfError::Cancelled`] if the scan was cancelled.
    pub fn ensure_active(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(RfError::Cancelled);
        }
        Ok(())
    }
}
