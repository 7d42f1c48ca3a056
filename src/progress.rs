//! Progress-callback trait for per-page and per-file events.
//!
//! Inject an [`Arc<dyn ProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress`] to receive an event
//! as each page is written or each file is resized. The callback approach
//! keeps the library free of any opinion about presentation: the CLI drives
//! an indicatif bar through it, a test counts invocations, a GUI could post
//! to a channel.
//!
//! Processing is strictly sequential, so implementations will only ever see
//! one event at a time; the `Send + Sync` bound exists so callbacks can be
//! shared freely via `Arc`.

use std::path::Path;
use std::sync::Arc;

/// Called by the pipeline as it works through a batch of pages or files.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Items are 1-indexed, matching what the user sees.
pub trait ProgressCallback: Send + Sync {
    /// Called once before any item is processed.
    fn on_start(&self, total_items: usize) {
        let _ = total_items;
    }

    /// Called after an item (page or file) has been written to disk.
    fn on_item_done(&self, item_num: usize, total_items: usize, path: &Path) {
        let _ = (item_num, total_items, path);
    }

    /// Called once after every item has been processed.
    fn on_complete(&self, total_items: usize) {
        let _ = total_items;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type SharedProgress = Arc<dyn ProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingCallback {
        started: AtomicUsize,
        items: AtomicUsize,
        completed: AtomicUsize,
    }

    impl ProgressCallback for CountingCallback {
        fn on_start(&self, total: usize) {
            self.started.store(total, Ordering::SeqCst);
        }

        fn on_item_done(&self, _item: usize, _total: usize, _path: &Path) {
            self.items.fetch_add(1, Ordering::SeqCst);
        }

        fn on_complete(&self, total: usize) {
            self.completed.store(total, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgress;
        cb.on_start(3);
        cb.on_item_done(1, 3, Path::new("a.jpg"));
        cb.on_complete(3);
    }

    #[test]
    fn counting_callback_receives_events() {
        let cb = CountingCallback {
            started: AtomicUsize::new(0),
            items: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
        };

        cb.on_start(2);
        cb.on_item_done(1, 2, &PathBuf::from("deck_page_1.jpg"));
        cb.on_item_done(2, 2, &PathBuf::from("deck_page_2.jpg"));
        cb.on_complete(2);

        assert_eq!(cb.started.load(Ordering::SeqCst), 2);
        assert_eq!(cb.items.load(Ordering::SeqCst), 2);
        assert_eq!(cb.completed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: SharedProgress = Arc::new(NoopProgress);
        cb.on_start(1);
        cb.on_item_done(1, 1, Path::new("x.jpg"));
        cb.on_complete(1);
    }
}
