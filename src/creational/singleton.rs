//! Singleton Pattern with `OnceLock`
//!
//! `Singleton::instance()` hands out the one process-wide instance, creating
//! it on first access. The type has a private field and no `Clone` impl, so
//! code outside this module can neither build nor copy one:
//!
//! ```compile_fail
//! use design_patterns::creational::singleton::Singleton;
//! let rogue = Singleton { id: 7 };
//! ```
//!
//! ```compile_fail
//! use design_patterns::creational::singleton::Singleton;
//! let copy: Singleton = Singleton::instance().clone();
//! ```

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{PatternError, Result};

// ============================================================================
// Init-once holder
// ============================================================================

/// A slot that is filled at most once and then shared for the rest of the
/// process. Safe to use as a `static`: concurrent first accesses race on the
/// inner `OnceLock` and exactly one initializer runs.
pub struct SingletonHolder<T> {
    cell: OnceLock<T>,
}

impl<T> SingletonHolder<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(init)
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Fills the slot with an explicitly constructed value, for callers that
    /// want to inject the instance instead of relying on lazy creation.
    pub fn set(&self, value: T) -> Result<&T> {
        self.cell
            .set(value)
            .map_err(|_| PatternError::AlreadyInitialized)?;
        self.cell.get().ok_or(PatternError::AlreadyInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for SingletonHolder<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// The singleton itself
// ============================================================================

static INSTANCE: SingletonHolder<Singleton> = SingletonHolder::new();
static INIT_COUNT: AtomicUsize = AtomicUsize::new(0);
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
pub struct Singleton {
    id: u64,
}

impl Singleton {
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| {
            INIT_COUNT.fetch_add(1, Ordering::SeqCst);
            let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
            debug!(id, "singleton created");
            Singleton { id }
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of times the lazy initializer has run. Never exceeds 1.
    pub fn init_count() -> usize {
        INIT_COUNT.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_instance() {
        let first = Singleton::instance();
        let second = Singleton::instance();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn test_initialized_once_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| Singleton::instance() as *const Singleton as usize))
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let expected = Singleton::instance() as *const Singleton as usize;

        assert!(addresses.iter().all(|&addr| addr == expected));
        assert_eq!(Singleton::init_count(), 1);
    }

    #[test]
    fn test_holder_lazy_init() {
        let holder: SingletonHolder<String> = SingletonHolder::new();
        assert!(!holder.is_initialized());
        assert!(holder.get().is_none());

        let value = holder.get_or_init(|| "first".to_string());
        assert_eq!(value, "first");

        // A second initializer is ignored
        let again = holder.get_or_init(|| "second".to_string());
        assert!(std::ptr::eq(value, again));
        assert_eq!(again, "first");
    }

    #[test]
    fn test_holder_set_twice_fails() {
        let holder = SingletonHolder::new();
        assert_eq!(*holder.set(10).unwrap(), 10);
        assert!(matches!(holder.set(20), Err(PatternError::AlreadyInitialized)));
        assert_eq!(holder.get(), Some(&10));
    }

    #[test]
    fn test_holder_contended_init_runs_once() {
        static HOLDER: SingletonHolder<u32> = SingletonHolder::new();
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        let handles: Vec<_> = (0..16)
            .map(|i| {
                thread::spawn(move || {
                    *HOLDER.get_or_init(|| {
                        CALLS.fetch_add(1, Ordering::SeqCst);
                        i
                    })
                })
            })
            .collect();

        let seen: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(seen.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }
}
