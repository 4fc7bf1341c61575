// Observer Pattern with Borrowed Listeners
// A subject broadcasts to observers it does not own, in registration order.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, Write};

use tracing::{debug, warn};

// ============================================================================
// Observer interface
// ============================================================================

pub trait Observer<M: ?Sized> {
    fn update(&self, message: &M);
}

// ============================================================================
// Subject
// ============================================================================

/// Holds non-owning references: every observer must outlive the subject.
/// `notify_observers` takes `&self`, so the list cannot change mid-broadcast.
pub struct Subject<'a, M: ?Sized = str> {
    observers: Vec<&'a dyn Observer<M>>,
}

impl<'a, M: ?Sized> Subject<'a, M> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: &'a dyn Observer<M>) {
        self.observers.push(observer);
        debug!(count = self.observers.len(), "observer registered");
    }

    /// Calls `update` on every observer in registration order and returns how
    /// many were notified. With no observers this does nothing.
    pub fn notify_observers(&self, message: &M) -> usize {
        for observer in &self.observers {
            observer.update(message);
        }
        self.observers.len()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<M: ?Sized> Default for Subject<'_, M> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Observers
// ============================================================================

/// Prints `Received message: <message>` to its sink.
///
/// A failed write is logged and kept, and later notifications still go
/// through. `take_error` hands back the first failure.
pub struct ConsoleObserver<W: Write> {
    out: RefCell<W>,
    error: RefCell<Option<io::Error>>,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            error: RefCell::new(None),
        }
    }

    pub fn take_error(&self) -> Option<io::Error> {
        self.error.borrow_mut().take()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<M, W> Observer<M> for ConsoleObserver<W>
where
    M: Display + ?Sized,
    W: Write,
{
    fn update(&self, message: &M) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = writeln!(out, "Received message: {}", message) {
            warn!(error = %err, "observer failed to write message");
            let mut slot = self.error.borrow_mut();
            if slot.is_none() {
                *slot = Some(err);
            }
        }
    }
}

/// Keeps a copy of every message it receives.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    received: RefCell<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<String> {
        self.received.borrow().clone()
    }
}

impl<M: Display + ?Sized> Observer<M> for RecordingObserver {
    fn update(&self, message: &M) {
        self.received.borrow_mut().push(message.to_string());
    }
}

/// Adapts a closure into an observer.
pub struct FnObserver<F> {
    callback: F,
}

impl<F> FnObserver<F> {
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<M: ?Sized, F: Fn(&M)> Observer<M> for FnObserver<F> {
    fn update(&self, message: &M) {
        (self.callback)(message)
    }
}
