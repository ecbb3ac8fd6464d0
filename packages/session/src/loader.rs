//! # Global loader: the process-wide in-flight request counter
//!
//! Every outgoing request increments the counter on start and decrements it
//! on completion; the loading indicator is visible iff the counter is above
//! zero. The counter never goes below zero, and [`GlobalLoader::guard`]
//! guarantees the decrement runs on failure paths too.

use std::sync::{Arc, Mutex};

type Listener = Box<dyn Fn(bool) + Send>;

/// Shared request counter. Cloning shares the same state.
#[derive(Clone, Default)]
pub struct GlobalLoader {
    active: Arc<Mutex<usize>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl GlobalLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as started.
    pub fn start(&self) {
        let visible = {
            let mut active = self.active.lock().unwrap();
            *active += 1;
            *active > 0
        };
        self.notify(visible);
    }

    /// Mark a request as finished. Clamped at zero.
    pub fn stop(&self) {
        let visible = {
            let mut active = self.active.lock().unwrap();
            *active = active.saturating_sub(1);
            *active > 0
        };
        self.notify(visible);
    }

    /// Number of requests currently in flight.
    pub fn pending(&self) -> usize {
        *self.active.lock().unwrap()
    }

    /// Whether the loading indicator should be visible.
    pub fn is_loading(&self) -> bool {
        self.pending() > 0
    }

    /// Observe visibility transitions. The listener fires after every
    /// `start`/`stop` with the current visible state.
    pub fn subscribe(&self, listener: impl Fn(bool) + Send + 'static) {
        self.listeners.lock().unwrap().push(Box::new(listener));
    }

    /// Scoped start/stop pairing: `stop` runs when the guard drops, on
    /// success and failure paths alike.
    pub fn guard(&self) -> LoaderGuard {
        self.start();
        LoaderGuard {
            loader: self.clone(),
        }
    }

    fn notify(&self, visible: bool) {
        for listener in self.listeners.lock().unwrap().iter() {
            listener(visible);
        }
    }
}

/// RAII handle pairing one `start` with exactly one `stop`.
pub struct LoaderGuard {
    loader: GlobalLoader,
}

impl Drop for LoaderGuard {
    fn drop(&mut self) {
        self.loader.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_visible_iff_starts_exceed_stops() {
        let loader = GlobalLoader::new();
        assert!(!loader.is_loading());

        loader.start();
        loader.start();
        assert!(loader.is_loading());
        assert_eq!(loader.pending(), 2);

        loader.stop();
        assert!(loader.is_loading());
        loader.stop();
        assert!(!loader.is_loading());
        assert_eq!(loader.pending(), 0);
    }

    #[test]
    fn test_extra_stops_never_go_below_zero() {
        let loader = GlobalLoader::new();
        loader.stop();
        loader.stop();
        assert_eq!(loader.pending(), 0);

        loader.start();
        loader.stop();
        loader.stop();
        assert_eq!(loader.pending(), 0);
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_guard_stops_on_drop() {
        let loader = GlobalLoader::new();
        {
            let _guard = loader.guard();
            assert!(loader.is_loading());
        }
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_guard_stops_on_error_path() {
        fn failing(loader: &GlobalLoader) -> Result<(), &'static str> {
            let _guard = loader.guard();
            Err("boom")
        }

        let loader = GlobalLoader::new();
        assert!(failing(&loader).is_err());
        assert_eq!(loader.pending(), 0);
    }

    #[test]
    fn test_subscribers_see_transitions() {
        let loader = GlobalLoader::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let visible_calls = Arc::new(AtomicUsize::new(0));

        let calls_ref = calls.clone();
        let visible_ref = visible_calls.clone();
        loader.subscribe(move |visible| {
            calls_ref.fetch_add(1, Ordering::SeqCst);
            if visible {
                visible_ref.fetch_add(1, Ordering::SeqCst);
            }
        });

        loader.start();
        loader.stop();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(visible_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clones_share_the_counter() {
        let loader = GlobalLoader::new();
        let other = loader.clone();
        loader.start();
        assert!(other.is_loading());
        other.stop();
        assert!(!loader.is_loading());
    }
}
